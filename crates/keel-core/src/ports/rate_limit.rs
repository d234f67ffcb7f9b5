//! Rate limiting port.

use std::time::Duration;

/// Outcome of a rate limit check.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitDecision {
    pub allowed: bool,
    /// How long the caller should wait before retrying. Zero when allowed.
    pub retry_after: Duration,
}

/// Rate limiter trait - abstraction over rate limiting backends.
///
/// Checks are synchronous: the in-process limiter never blocks, and callers
/// sit on the request hot path.
pub trait RateLimiter: Send + Sync {
    /// Check whether the request identified by `key` (typically a client IP)
    /// is allowed, updating the counter.
    fn check(&self, key: &str) -> RateLimitDecision;
}
