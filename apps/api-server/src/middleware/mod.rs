//! Middleware modules.

pub mod cache_control;
pub mod error;
pub mod language;
pub mod rate_limit;
pub mod request_id;
pub mod validate;
