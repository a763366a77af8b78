//! View sessions module
//!
//! Session-scoped view state and the pure operations over it.
//!
//! # Overview
//!
//! - `ListingSession` - Idle → Loading → Loaded | Failed, search and delete
//! - `DetailSession` - Loading → Loaded | Failed, re-entered on id change
//! - `search` / `remove` - Pure derivations over a collection
//! - `Navigator` / `Router` - Delayed card navigation and history

mod detail;
mod filter;
mod listing;
pub mod navigation;

pub use detail::{DetailSession, DetailState};
pub use filter::{remove, search};
pub use listing::{ListingSession, ListingState};
pub use navigation::{FiredNavigation, Navigator, Route, Router};
