//! Application configuration
//!
//! Every field has a default, so an empty YAML document (or no file at all)
//! yields a working configuration pointed at the public character API.

use crate::error::{Error, Result};
use crate::http::{default_user_agent, RateLimiterConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Listing endpoint of the public character API
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api/character";

/// Delay between selecting a card and opening its detail view
pub const DEFAULT_NAVIGATION_DELAY_MS: u64 = 2000;

/// Upper bound accepted for the navigation delay
const MAX_NAVIGATION_DELAY_MS: u64 = 60_000;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete application configuration loaded from YAML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Navigation settings
    #[serde(default)]
    pub navigation: NavigationConfig,
}

impl AppConfig {
    /// Load and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::config(format!("Config file '{}' not found", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        debug!("Loaded config from {}", path.display());
        Self::from_yaml_str(&content)
    }

    /// Parse and validate a configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to an empty mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges and URL syntax
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "api.base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(Error::config("api.timeout_secs must be greater than zero"));
        }

        if self.navigation.delay_ms > MAX_NAVIGATION_DELAY_MS {
            return Err(Error::config(format!(
                "navigation.delay_ms must be at most {MAX_NAVIGATION_DELAY_MS}"
            )));
        }

        Ok(())
    }
}

// ============================================================================
// API Config
// ============================================================================

/// Remote API settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Listing endpoint; detail requests append `/{id}`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Optional client-side throttle
    #[serde(default)]
    pub rate_limit: Option<RateLimiterConfig>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            rate_limit: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

// ============================================================================
// Navigation Config
// ============================================================================

/// Navigation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Delay before a selected card opens its detail view
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

impl NavigationConfig {
    /// The configured delay as a [`Duration`]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

fn default_delay_ms() -> u64 {
    DEFAULT_NAVIGATION_DELAY_MS
}
