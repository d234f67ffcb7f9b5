//! # Keel Shared
//!
//! Wire types shared between the server and API clients: request/response
//! DTOs, the success envelope, and the error body shape.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorBody, ErrorIssue};
