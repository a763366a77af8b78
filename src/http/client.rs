//! HTTP client used by both fetchers
//!
//! A thin wrapper over reqwest that handles:
//! - Resolution of relative references against a base URL
//! - Optional client-side rate limiting
//! - The user agent
//!
//! Status codes are not interpreted here. The pagination walk and the
//! single-resource fetch map non-success statuses to different errors, so
//! the raw [`Response`] is handed back to them.

use super::rate_limit::{RateLimiter, RateLimiterConfig};
use crate::error::Result;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL relative references are resolved against
    pub base_url: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Rate limiter configuration
    pub rate_limit: Option<RateLimiterConfig>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            rate_limit: None,
            user_agent: default_user_agent(),
        }
    }
}

/// User agent sent when none is configured
pub fn default_user_agent() -> String {
    format!("character-browser/{}", env!("CARGO_PKG_VERSION"))
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set rate limiter
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Disable rate limiting
    pub fn no_rate_limit(mut self) -> Self {
        self.config.rate_limit = None;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP client with optional rate limiting
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    rate_limiter: Option<RateLimiter>,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);

        Ok(Self {
            client,
            config,
            rate_limiter,
        })
    }

    /// Issue one GET request and return the response whatever its status
    pub async fn get(&self, url: &str) -> Result<Response> {
        let full_url = self.build_url(url)?;

        if let Some(ref limiter) = self.rate_limiter {
            limiter.wait().await;
        }

        let response = self.client.get(full_url.as_str()).send().await?;
        debug!("GET {} -> {}", full_url, response.status().as_u16());
        Ok(response)
    }

    /// Resolve `reference` to an absolute URL
    ///
    /// Absolute URLs pass through. Anything else is joined onto the base
    /// URL following RFC 3986, so `page2` replaces the last path segment,
    /// `/page2` replaces the whole path and `?page=2` keeps the path.
    pub fn build_url(&self, reference: &str) -> Result<Url> {
        match Url::parse(reference) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let base = self
                    .config
                    .base_url
                    .as_deref()
                    .ok_or(url::ParseError::RelativeUrlWithoutBase)?;
                Ok(Url::parse(base)?.join(reference)?)
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}
