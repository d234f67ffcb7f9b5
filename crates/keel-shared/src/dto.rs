//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Path parameters for single-sample routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleIdParams {
    pub id: Uuid,
}

/// Request to create a sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSampleRequest {
    pub name: String,
}

/// Request to rename a sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSampleRequest {
    pub name: String,
}

/// Pagination query for list endpoints. Values arrive as query strings and
/// are coerced to numbers during validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// One sample on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleResponse {
    pub id: Uuid,
    pub name: String,
}

/// Payload for the single-sample endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplePayload {
    pub sample: SampleResponse,
}

/// Pagination metadata computed from page, limit, and total count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u32,
    pub total_pages: u32,
    pub total_count: usize,
}

impl PaginationMeta {
    pub fn new(page: u32, limit: u32, total_count: usize) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            (total_count as u32).div_ceil(limit)
        };
        Self {
            page,
            total_pages,
            total_count,
        }
    }
}

/// Payload for the sample list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplesPayload {
    pub samples: Vec<SampleResponse>,
    #[serde(flatten)]
    pub meta: PaginationMeta,
}

/// Payload for the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthPayload {
    pub timestamp: String,
    pub version: String,
}
