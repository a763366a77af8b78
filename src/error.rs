//! Error types for the character browser
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Cancellation is deliberately absent: a cancelled fetch is reported as
//! [`crate::pagination::FetchOutcome::Cancelled`], not as a failure.

use thiserror::Error;

/// The main error type for the character browser
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid character id '{value}'")]
    InvalidId { value: String },

    // ============================================================================
    // Network Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status while walking the listing pages
    #[error("Failed with status {status}")]
    HttpStatus { status: u16 },

    /// Non-success status while fetching a single character
    #[error("fetch failed")]
    FetchFailed { status: u16 },

    // ============================================================================
    // Data Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid id error
    pub fn invalid_id(value: impl Into<String>) -> Self {
        Self::InvalidId {
            value: value.into(),
        }
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status } | Error::FetchFailed { status } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for the character browser
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::HttpStatus { status: 500 };
        assert_eq!(err.to_string(), "Failed with status 500");

        let err = Error::FetchFailed { status: 404 };
        assert_eq!(err.to_string(), "fetch failed");

        let err = Error::invalid_id("abc");
        assert_eq!(err.to_string(), "Invalid character id 'abc'");
    }

    #[test]
    fn test_status() {
        assert_eq!(Error::HttpStatus { status: 503 }.status(), Some(503));
        assert_eq!(Error::FetchFailed { status: 404 }.status(), Some(404));
        assert_eq!(Error::config("x").status(), None);

        let parse = serde_json::from_str::<u32>("nope").unwrap_err();
        assert_eq!(Error::JsonParse(parse).status(), None);
    }
}
