use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sample entity - the toy resource exposed by the starter API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub id: Uuid,
    pub name: String,
}

impl Sample {
    /// Create a new sample with a generated ID.
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
        }
    }
}
