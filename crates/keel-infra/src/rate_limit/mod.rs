//! Rate limiting backends.

mod memory;

pub use memory::{InMemoryRateLimiter, RateLimitConfig};
