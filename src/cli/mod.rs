//! CLI module
//!
//! Terminal front-end for the character browser.
//!
//! # Commands
//!
//! - `list` - Fetch every page, apply deletions and a search, print the listing
//! - `show` - Fetch and print one character
//! - `browse` - Interactive session with delayed card navigation

mod browse;
mod commands;
mod render;
mod runner;

pub use browse::{run_browser, BrowseCommand, Browser, Flow};
pub use commands::{Cli, Commands, OutputFormat};
pub use render::{card, render_detail, render_listing, LISTING_TITLE};
pub use runner::Runner;
