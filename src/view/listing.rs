//! Listing session
//!
//! Owns the collection fetched on mount, the live search query and the
//! session's cancel token. The collection is only ever filled by the page
//! walk and shrunk by [`ListingSession::delete`].

use super::filter::{remove, search};
use crate::api::CharacterSource;
use crate::cancel::CancelToken;
use crate::pagination::FetchOutcome;
use crate::types::{Character, CharacterCollection, CharacterId};
use tracing::{debug, warn};

/// Lifecycle of a listing session
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListingState {
    /// Created, not yet mounted
    #[default]
    Idle,
    /// Page walk in progress
    Loading,
    /// Every page fetched
    Loaded(CharacterCollection),
    /// The walk failed; holds the message shown to the user
    Failed(String),
}

/// State of one mounted listing view
#[derive(Debug, Default)]
pub struct ListingSession {
    state: ListingState,
    query: String,
    cancel: CancelToken,
}

impl ListingSession {
    /// Create an idle session
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state
    pub fn state(&self) -> &ListingState {
        &self.state
    }

    /// Handle that tears the session down from elsewhere
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Tear the session down; an in-flight load will not commit
    pub fn unmount(&self) {
        self.cancel.cancel();
    }

    /// Whether the session was torn down
    pub fn is_unmounted(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Load every character from `source`
    ///
    /// Runs at most once per session; later calls are ignored. If the session
    /// is unmounted while loading, nothing is committed and the state stays
    /// `Loading`.
    pub async fn mount(&mut self, source: &dyn CharacterSource) {
        if self.state != ListingState::Idle {
            warn!("Listing session already mounted, ignoring");
            return;
        }

        self.state = ListingState::Loading;
        let result = source.fetch_all(&self.cancel).await;

        if self.cancel.is_cancelled() {
            debug!("Listing session unmounted during load, discarding result");
            return;
        }

        match result {
            Ok(FetchOutcome::Completed(collection)) => {
                debug!("Listing loaded with {} characters", collection.len());
                self.state = ListingState::Loaded(collection);
            }
            Ok(FetchOutcome::Cancelled) => {}
            Err(e) => {
                warn!(status = ?e.status(), "Listing load failed: {e}");
                self.state = ListingState::Failed(e.to_string());
            }
        }
    }

    /// The full collection, once loaded
    pub fn collection(&self) -> Option<&[Character]> {
        match &self.state {
            ListingState::Loaded(collection) => Some(collection),
            _ => None,
        }
    }

    /// The failure message, if the load failed
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ListingState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Whether the page walk is still running
    pub fn is_loading(&self) -> bool {
        matches!(self.state, ListingState::Idle | ListingState::Loading)
    }

    /// Current search query
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the search query
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// The collection filtered by the current query
    pub fn visible(&self) -> Vec<Character> {
        self.collection()
            .map(|c| search(c, &self.query))
            .unwrap_or_default()
    }

    /// Look a loaded character up by id
    pub fn find(&self, id: CharacterId) -> Option<&Character> {
        self.collection()?.iter().find(|c| c.id == id)
    }

    /// Remove a character from the local collection
    ///
    /// Returns whether an entry was removed. Does nothing before loading.
    pub fn delete(&mut self, id: CharacterId) -> bool {
        if let ListingState::Loaded(collection) = &mut self.state {
            let before = collection.len();
            *collection = remove(collection.as_slice(), id);
            return collection.len() < before;
        }
        false
    }
}
