//! HTTP client module
//!
//! Provides the HTTP client shared by the listing walk and the detail fetch.
//!
//! # Features
//!
//! - **URL Resolution**: Relative references are resolved against a base URL (RFC 3986)
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **No Retries**: The first failure is surfaced to the caller as-is

mod client;
mod rate_limit;

pub use client::{default_user_agent, HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use rate_limit::{RateLimiter, RateLimiterConfig};

#[cfg(test)]
mod tests;
