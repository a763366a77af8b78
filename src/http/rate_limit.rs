//! Client-side request throttling
//!
//! The character API is public and unauthenticated. A full listing walk is
//! several dozen back-to-back requests, so the walk can be held to a token
//! bucket (governor) configured under `api.rate_limit`.

use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::debug;

type DirectLimiter = Governor<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>;

/// Throttle settings as written in the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimiterConfig {
    /// Sustained request rate
    pub requests_per_second: u32,
    /// Requests allowed back to back before the rate applies
    pub burst_size: u32,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self::new(10, 10)
    }
}

impl RateLimiterConfig {
    pub fn new(requests_per_second: u32, burst_size: u32) -> Self {
        Self {
            requests_per_second,
            burst_size,
        }
    }

    /// Governor quota for these settings; zero values count as one
    pub fn quota(&self) -> Quota {
        let rate = NonZeroU32::new(self.requests_per_second).unwrap_or(NonZeroU32::MIN);
        let burst = NonZeroU32::new(self.burst_size).unwrap_or(NonZeroU32::MIN);
        Quota::per_second(rate).allow_burst(burst)
    }
}

/// Shared token bucket; clones draw from the same bucket
#[derive(Clone)]
pub struct RateLimiter {
    bucket: Arc<DirectLimiter>,
}

impl RateLimiter {
    pub fn new(config: &RateLimiterConfig) -> Self {
        Self {
            bucket: Arc::new(Governor::direct(config.quota())),
        }
    }

    /// Take one permit, sleeping until the bucket refills if it is empty
    pub async fn wait(&self) {
        if self.bucket.check().is_ok() {
            return;
        }
        debug!("Request rate limit reached, waiting for a permit");
        self.bucket.until_ready().await;
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn test_config_from_yaml() {
        let config: RateLimiterConfig =
            serde_yaml::from_str("requests_per_second: 4\nburst_size: 2\n").unwrap();
        assert_eq!(config, RateLimiterConfig::new(4, 2));
        assert_eq!(RateLimiterConfig::default(), RateLimiterConfig::new(10, 10));
    }

    #[test]
    fn test_zero_values_clamp_to_one() {
        let quota = RateLimiterConfig::new(0, 0).quota();
        assert_eq!(quota.burst_size().get(), 1);
        assert_eq!(quota.replenish_interval(), Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_wait_is_immediate_within_burst() {
        let limiter = RateLimiter::new(&RateLimiterConfig::new(1, 3));
        let started = Instant::now();
        for _ in 0..3 {
            limiter.wait().await;
        }
        assert!(started.elapsed() < Duration::from_millis(500));
    }

    #[tokio::test]
    async fn test_wait_blocks_once_burst_is_spent() {
        let limiter = RateLimiter::new(&RateLimiterConfig::new(20, 1));
        limiter.wait().await;

        let started = Instant::now();
        limiter.clone().wait().await;
        assert!(started.elapsed() >= Duration::from_millis(30));
    }
}
