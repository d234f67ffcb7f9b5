//! # Keel Infrastructure
//!
//! Concrete implementations of the ports defined in `keel-core`:
//! the in-memory sample store, the embedded JSON locale catalog, and the
//! in-process rate limiter.

pub mod locale;
pub mod rate_limit;
pub mod store;

pub use locale::JsonCatalog;
pub use rate_limit::{InMemoryRateLimiter, RateLimitConfig};
pub use store::InMemorySampleStore;
