//! In-process keyed rate limiter using the governor crate.

use std::num::NonZeroU32;
use std::time::Duration;

use governor::clock::DefaultClock;
use governor::state::keyed::DefaultKeyedStateStore;
use governor::{Quota, RateLimiter as GovernorRateLimiter};

use keel_core::ports::{RateLimitDecision, RateLimiter};

type KeyedLimiter = GovernorRateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>;

/// Rate limiter configuration.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests per window, per key.
    pub max_requests: u32,
    /// Window duration.
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 100,
            window: Duration::from_secs(15 * 60),
        }
    }
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_requests: std::env::var("RATE_LIMIT_MAX_REQUESTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_requests),
            window: Duration::from_secs(
                std::env::var("RATE_LIMIT_WINDOW_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.window.as_secs())
                    .max(1),
            ),
        }
    }
}

/// Per-key (client IP) rate limiter using the GCRA algorithm.
///
/// Limits are per-process, not distributed across instances.
pub struct InMemoryRateLimiter {
    limiter: KeyedLimiter,
}

impl InMemoryRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let max_requests = NonZeroU32::new(config.max_requests.max(1)).expect("non-zero");
        // A zero window would make the quota period zero.
        let window = config.window.max(Duration::from_secs(1));
        let quota = Quota::with_period(window / max_requests.get())
            .expect("valid quota")
            .allow_burst(max_requests);

        Self {
            limiter: KeyedLimiter::keyed(quota),
        }
    }
}

impl RateLimiter for InMemoryRateLimiter {
    fn check(&self, key: &str) -> RateLimitDecision {
        match self.limiter.check_key(&key.to_string()) {
            Ok(_) => RateLimitDecision {
                allowed: true,
                retry_after: Duration::ZERO,
            },
            Err(not_until) => RateLimitDecision {
                allowed: false,
                retry_after: not_until.wait_time_from(governor::clock::Clock::now(
                    &DefaultClock::default(),
                )),
            },
        }
    }
}
