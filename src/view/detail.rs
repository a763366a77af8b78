//! Detail session
//!
//! One character, fetched once per identifier. Changing the identifier puts
//! the session back into `Loading`.

use crate::api::CharacterSource;
use crate::cancel::CancelToken;
use crate::types::{Character, CharacterId};
use tracing::{debug, warn};

/// Lifecycle of a detail session
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Loaded(Character),
    Failed(String),
}

/// State of one mounted detail view
#[derive(Debug)]
pub struct DetailSession {
    id: CharacterId,
    state: DetailState,
    cancel: CancelToken,
}

impl DetailSession {
    /// Create a session for `id`, waiting to load
    pub fn new(id: CharacterId) -> Self {
        Self {
            id,
            state: DetailState::Loading,
            cancel: CancelToken::new(),
        }
    }

    /// Identifier this session shows
    pub fn id(&self) -> CharacterId {
        self.id
    }

    /// Current lifecycle state
    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// The loaded character, if any
    pub fn character(&self) -> Option<&Character> {
        match &self.state {
            DetailState::Loaded(character) => Some(character),
            _ => None,
        }
    }

    /// The failure message, if the fetch failed
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            DetailState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Handle that tears the session down from elsewhere
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Tear the session down; an in-flight fetch will not commit
    pub fn unmount(&self) {
        self.cancel.cancel();
    }

    /// Point the session at another character
    ///
    /// Returns `true` when the id changed and a reload is due.
    pub fn set_id(&mut self, id: CharacterId) -> bool {
        if id == self.id {
            return false;
        }
        self.id = id;
        self.state = DetailState::Loading;
        true
    }

    /// Fetch the current character from `source`
    pub async fn load(&mut self, source: &dyn CharacterSource) {
        self.state = DetailState::Loading;
        let result = source.fetch_one(self.id).await;

        if self.cancel.is_cancelled() {
            debug!("Detail session for {} unmounted, discarding result", self.id);
            return;
        }

        self.state = match result {
            Ok(character) => DetailState::Loaded(character),
            Err(e) => {
                warn!(status = ?e.status(), "Detail load for {} failed: {e}", self.id);
                DetailState::Failed(e.to_string())
            }
        };
    }
}
