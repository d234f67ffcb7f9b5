use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Sample;
use crate::error::StoreError;

/// Sample repository - abstraction over sample storage backends.
#[async_trait]
pub trait SampleRepository: Send + Sync {
    /// All samples, in insertion order.
    async fn list(&self) -> Result<Vec<Sample>, StoreError>;

    /// Store a new sample.
    async fn insert(&self, sample: Sample) -> Result<Sample, StoreError>;

    /// Find a sample by its ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Sample>, StoreError>;

    /// Rename an existing sample. Returns `None` when the ID is unknown.
    async fn update(&self, id: Uuid, name: String) -> Result<Option<Sample>, StoreError>;

    /// Delete a sample. Returns `false` when the ID is unknown.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}
