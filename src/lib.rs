// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Character Browser
//!
//! Front-end for a paginated character REST API.
//!
//! ## Features
//!
//! - **Cursor Pagination**: Follows `info.next` until the collection is complete
//! - **Cooperative Cancellation**: Unmounting a view stops the walk between requests
//! - **Single Fetch**: Load one character by id
//! - **Views**: Listing with live search and delete, detail view, delayed navigation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use character_browser::{AppConfig, CancelToken, CharacterApi, CharacterSource, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = AppConfig::default();
//!     let api = CharacterApi::new(&config.api)?;
//!
//!     let cancel = CancelToken::new();
//!     if let Some(all) = api.fetch_all(&cancel).await?.completed() {
//!         println!("{} characters", all.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                       CLI (list/show/browse)              │
//! └───────────────────────────────────────────────────────────┘
//!                               │
//! ┌───────────────┬─────────────┴─────────┬───────────────────┐
//! │   Listing     │       Detail          │    Navigation     │
//! │ search/delete │  load by id           │ delayed, cancel   │
//! └───────────────┴─────────────┬─────────┴───────────────────┘
//!                               │ CharacterSource
//! ┌──────────────┬──────────────┴───────┬──────────────────────┐
//! │  Pagination  │   HTTP client        │   Cancellation       │
//! │  info.next   │   rate limit         │   CancelToken        │
//! └──────────────┴──────────────────────┴──────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Cooperative cancellation
pub mod cancel;

/// HTTP client with rate limiting
pub mod http;

/// Cursor pagination
pub mod pagination;

/// Character data source
pub mod api;

/// Application configuration
pub mod config;

/// Listing, detail and navigation state
pub mod view;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use api::{CharacterApi, CharacterSource};
pub use cancel::CancelToken;
pub use config::AppConfig;
pub use pagination::{fetch_all_pages, FetchOutcome};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
