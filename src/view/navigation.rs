//! Routes, history and delayed card navigation
//!
//! Selecting a card does not navigate immediately: a timer is armed and the
//! transition to the detail route fires after the configured delay. Timers
//! are keyed by selection, so a newer selection, an explicit cancel or
//! dropping the [`Navigator`] disarms the pending one.

use crate::cancel::CancelToken;
use crate::error::{Error, Result};
use crate::types::CharacterId;
use std::fmt;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

// ============================================================================
// Routes
// ============================================================================

/// A view the front-end can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Listing,
    /// `/character/{id}`
    Detail(CharacterId),
}

impl Route {
    /// Map a path to a route
    pub fn parse(path: &str) -> Result<Self> {
        let trimmed = path.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Ok(Route::Listing);
        }

        match trimmed.strip_prefix("/character/") {
            Some(id) => Ok(Route::Detail(id.parse()?)),
            None => Err(Error::Other(format!("No route matches '{path}'"))),
        }
    }

    /// Path this route is served at
    pub fn path(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Listing => f.write_str("/"),
            Route::Detail(id) => write!(f, "/character/{id}"),
        }
    }
}

/// Navigation history; the bottom entry is always the listing
#[derive(Debug, Clone)]
pub struct Router {
    history: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            history: vec![Route::Listing],
        }
    }
}

impl Router {
    /// Start at the listing
    pub fn new() -> Self {
        Self::default()
    }

    /// Route currently shown
    pub fn current(&self) -> Route {
        self.history.last().copied().unwrap_or(Route::Listing)
    }

    /// Navigate forward to `route`
    pub fn push(&mut self, route: Route) {
        debug!("Navigating to {route}");
        self.history.push(route);
    }

    /// Navigate back one step and return the route now shown
    ///
    /// Going back from the listing stays on the listing.
    pub fn back(&mut self) -> Route {
        if self.history.len() > 1 {
            self.history.pop();
        }
        self.current()
    }

    /// Number of entries in the history
    pub fn depth(&self) -> usize {
        self.history.len()
    }
}

// ============================================================================
// Delayed Navigation
// ============================================================================

/// A navigation timer that elapsed
///
/// Hand it back to [`Navigator::confirm`], which drops it if the selection
/// was cancelled in the meantime.
#[derive(Debug)]
pub struct FiredNavigation {
    id: CharacterId,
    token: CancelToken,
}

impl FiredNavigation {
    /// The selected character
    pub fn id(&self) -> CharacterId {
        self.id
    }
}

#[derive(Debug)]
struct PendingNavigation {
    id: CharacterId,
    token: CancelToken,
    handle: JoinHandle<()>,
}

/// Arms and disarms card navigation timers
#[derive(Debug)]
pub struct Navigator {
    delay: Duration,
    tx: mpsc::UnboundedSender<FiredNavigation>,
    pending: Option<PendingNavigation>,
}

impl Navigator {
    /// Create a navigator and the receiver its timers fire into
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<FiredNavigation>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let navigator = Self {
            delay,
            tx,
            pending: None,
        };
        (navigator, rx)
    }

    /// Delay between selection and navigation
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Select a card and arm its navigation timer
    ///
    /// Any previously pending selection is cancelled first. Must be called
    /// from within a tokio runtime.
    pub fn select_and_navigate(&mut self, id: CharacterId) {
        if let Some(previous) = self.cancel_pending() {
            debug!("Selection of {id} replaces pending navigation to {previous}");
        }

        let token = CancelToken::new();
        let delay = self.delay;
        let tx = self.tx.clone();
        let task_token = token.clone();

        let handle = tokio::spawn(async move {
            tokio::select! {
                () = tokio::time::sleep(delay) => {
                    if !task_token.is_cancelled() {
                        // The receiver may be gone if the front-end exited
                        let _ = tx.send(FiredNavigation { id, token: task_token });
                    }
                }
                () = task_token.cancelled() => {}
            }
        });

        self.pending = Some(PendingNavigation { id, token, handle });
    }

    /// Disarm the unconfirmed selection, returning its id
    ///
    /// Covers a timer that already fired but whose navigation has not been
    /// confirmed: its token is cancelled, so [`Navigator::confirm`] drops it.
    pub fn cancel_pending(&mut self) -> Option<CharacterId> {
        let pending = self.pending.take()?;
        pending.token.cancel();
        pending.handle.abort();
        Some(pending.id)
    }

    /// Disarm the unconfirmed selection only if it targets `id`
    pub fn cancel_if_pending(&mut self, id: CharacterId) -> bool {
        if self.pending.as_ref().map(|p| p.id) != Some(id) {
            return false;
        }
        self.cancel_pending().is_some()
    }

    /// Id of the selection whose timer has not elapsed yet
    pub fn pending_id(&self) -> Option<CharacterId> {
        self.pending
            .as_ref()
            .filter(|p| !p.token.is_cancelled() && !p.handle.is_finished())
            .map(|p| p.id)
    }

    /// Turn an elapsed timer into a route, unless it was cancelled
    pub fn confirm(&mut self, fired: FiredNavigation) -> Option<Route> {
        if fired.token.is_cancelled() {
            debug!("Dropping cancelled navigation to {}", fired.id);
            return None;
        }

        if self
            .pending
            .as_ref()
            .is_some_and(|p| p.id == fired.id)
        {
            self.pending = None;
        }
        Some(Route::Detail(fired.id))
    }
}

impl Drop for Navigator {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
