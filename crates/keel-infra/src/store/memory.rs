//! In-memory sample store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use keel_core::domain::Sample;
use keel_core::error::StoreError;
use keel_core::ports::SampleRepository;

/// Sample store backed by a Vec behind an async RwLock.
///
/// Insertion order is preserved so list pagination is stable. Data is lost
/// on process restart.
pub struct InMemorySampleStore {
    samples: RwLock<Vec<Sample>>,
}

impl InMemorySampleStore {
    pub fn new() -> Self {
        Self {
            samples: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemorySampleStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SampleRepository for InMemorySampleStore {
    async fn list(&self) -> Result<Vec<Sample>, StoreError> {
        Ok(self.samples.read().await.clone())
    }

    async fn insert(&self, sample: Sample) -> Result<Sample, StoreError> {
        let mut samples = self.samples.write().await;
        samples.push(sample.clone());
        Ok(sample)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Sample>, StoreError> {
        let samples = self.samples.read().await;
        Ok(samples.iter().find(|s| s.id == id).cloned())
    }

    async fn update(&self, id: Uuid, name: String) -> Result<Option<Sample>, StoreError> {
        let mut samples = self.samples.write().await;
        match samples.iter_mut().find(|s| s.id == id) {
            Some(sample) => {
                sample.name = name;
                Ok(Some(sample.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut samples = self.samples.write().await;
        let before = samples.len();
        samples.retain(|s| s.id != id);
        Ok(samples.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_then_find() {
        let store = InMemorySampleStore::new();
        let sample = store.insert(Sample::new("First".into())).await.unwrap();

        let found = store.find_by_id(sample.id).await.unwrap();
        assert_eq!(found, Some(sample));
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = InMemorySampleStore::new();
        store.insert(Sample::new("a".into())).await.unwrap();
        store.insert(Sample::new("b".into())).await.unwrap();
        store.insert(Sample::new("c".into())).await.unwrap();

        let names: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn update_renames_existing_samples() {
        let store = InMemorySampleStore::new();
        let sample = store.insert(Sample::new("old".into())).await.unwrap();

        let updated = store.update(sample.id, "new".into()).await.unwrap();
        assert_eq!(updated.unwrap().name, "new");

        let missing = store.update(Uuid::new_v4(), "x".into()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn delete_reports_whether_anything_was_removed() {
        let store = InMemorySampleStore::new();
        let sample = store.insert(Sample::new("gone".into())).await.unwrap();

        assert!(store.delete(sample.id).await.unwrap());
        assert!(!store.delete(sample.id).await.unwrap());
        assert!(store.list().await.unwrap().is_empty());
    }
}
