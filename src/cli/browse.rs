//! Interactive browsing session
//!
//! Reads user intents line by line and feeds them into the listing session,
//! the detail session and the navigator. Card navigation is delayed, so the
//! loop also listens for elapsed navigation timers.

use super::commands::OutputFormat;
use super::render::{render_detail, render_listing};
use crate::api::CharacterSource;
use crate::cancel::CancelToken;
use crate::error::{Error, Result};
use crate::types::CharacterId;
use crate::view::{DetailSession, FiredNavigation, ListingSession, Navigator, Route, Router};
use std::io::Write;
use std::str::FromStr;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::debug;

const HELP: &str = "\
Commands:
  search <text>   filter the listing by name (no text clears the filter)
  delete <id>     remove a card from the listing
  open <id>       open a card's detail view after the navigation delay
  cancel          cancel a pending open
  back            return to the previous view
  list            show the current view again
  help            show this help
  quit            leave";

/// One user intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Search(String),
    Delete(CharacterId),
    Open(CharacterId),
    Cancel,
    Back,
    List,
    Help,
    Quit,
}

impl FromStr for BrowseCommand {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "search" | "s" => Ok(Self::Search(rest.to_string())),
            "delete" | "d" => Ok(Self::Delete(rest.parse()?)),
            "open" | "o" => Ok(Self::Open(rest.parse()?)),
            "cancel" => Ok(Self::Cancel),
            "back" | "b" => Ok(Self::Back),
            "list" | "l" => Ok(Self::List),
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            _ => Err(Error::Other(format!(
                "Unknown command '{verb}', type 'help' for a list"
            ))),
        }
    }
}

/// Whether the loop keeps reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Front-end state for one interactive session
pub struct Browser<'a> {
    source: &'a dyn CharacterSource,
    format: OutputFormat,
    listing: ListingSession,
    detail: Option<DetailSession>,
    router: Router,
    navigator: Navigator,
}

impl<'a> Browser<'a> {
    /// Create a browser and the receiver its navigation timers fire into
    pub fn new(
        source: &'a dyn CharacterSource,
        format: OutputFormat,
        delay: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<FiredNavigation>) {
        let (navigator, fired) = Navigator::new(delay);
        let browser = Self {
            source,
            format,
            listing: ListingSession::new(),
            detail: None,
            router: Router::new(),
            navigator,
        };
        (browser, fired)
    }

    /// Route currently shown
    pub fn route(&self) -> Route {
        self.router.current()
    }

    /// The listing session
    pub fn listing(&self) -> &ListingSession {
        &self.listing
    }

    /// Handle that unmounts the listing from elsewhere
    pub fn listing_token(&self) -> CancelToken {
        self.listing.cancel_token()
    }

    /// Load the listing and render it
    pub async fn mount(&mut self) -> Result<String> {
        self.listing.mount(self.source).await;
        self.render()
    }

    /// Tear every session down
    pub fn unmount(&mut self) {
        self.navigator.cancel_pending();
        self.listing.unmount();
        if let Some(detail) = self.detail.take() {
            detail.unmount();
        }
    }

    /// Render the current route
    pub fn render(&self) -> Result<String> {
        match (self.router.current(), &self.detail) {
            (Route::Detail(_), Some(detail)) => render_detail(detail, self.format),
            _ => render_listing(&self.listing, self.format),
        }
    }

    /// Apply one user intent
    pub async fn handle(&mut self, command: BrowseCommand) -> Result<(Flow, String)> {
        let text = match command {
            BrowseCommand::Search(query) => {
                self.listing.set_query(query);
                self.render_listing_or_note("Search updated")?
            }
            BrowseCommand::Delete(id) => {
                if self.listing.delete(id) {
                    let mut text = String::new();
                    if self.navigator.cancel_if_pending(id) {
                        text.push_str(&format!("Cancelled pending navigation to #{id}\n"));
                    }
                    text.push_str(&self.render_listing_or_note(&format!("Deleted #{id}"))?);
                    text
                } else {
                    format!("No character #{id} in the listing")
                }
            }
            BrowseCommand::Open(id) => self.open(id),
            BrowseCommand::Cancel => match self.navigator.cancel_pending() {
                Some(id) => format!("Cancelled navigation to #{id}"),
                None => "No navigation pending".to_string(),
            },
            BrowseCommand::Back => {
                self.navigator.cancel_pending();
                if let Some(detail) = self.detail.take() {
                    detail.unmount();
                }
                self.router.back();
                self.render()?
            }
            BrowseCommand::List => self.render()?,
            BrowseCommand::Help => HELP.to_string(),
            BrowseCommand::Quit => return Ok((Flow::Quit, String::new())),
        };
        Ok((Flow::Continue, text))
    }

    /// Apply an elapsed navigation timer; `None` when it was cancelled
    pub async fn on_fired(&mut self, fired: FiredNavigation) -> Result<Option<String>> {
        let Some(route) = self.navigator.confirm(fired) else {
            return Ok(None);
        };
        let Route::Detail(id) = route else {
            return Ok(None);
        };

        self.router.push(route);
        let detail = self.detail.get_or_insert_with(|| DetailSession::new(id));
        detail.set_id(id);
        detail.load(self.source).await;
        self.render().map(Some)
    }

    fn open(&mut self, id: CharacterId) -> String {
        if self.router.current() != Route::Listing {
            return "Go back to the listing first".to_string();
        }
        let Some(character) = self.listing.find(id) else {
            return format!("No character #{id} in the listing");
        };

        let message = format!(
            "Opening #{id} ({}) in {} ms, type 'cancel' to stay",
            character.name,
            self.navigator.delay().as_millis()
        );
        self.navigator.select_and_navigate(id);
        message
    }

    fn render_listing_or_note(&self, note: &str) -> Result<String> {
        if self.router.current() == Route::Listing {
            render_listing(&self.listing, self.format)
        } else {
            Ok(note.to_string())
        }
    }
}

/// Run an interactive session over `input`, writing views to `out`
///
/// Ends on `quit`, end of input or Ctrl-C. Ctrl-C during the initial load
/// unmounts the listing before any result is committed.
pub async fn run_browser<R, W>(
    source: &dyn CharacterSource,
    format: OutputFormat,
    delay: Duration,
    input: R,
    out: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let (mut browser, mut fired) = Browser::new(source, format, delay);
    let token = browser.listing_token();

    writeln!(out, "Loading characters...")?;
    let mounted = tokio::select! {
        text = browser.mount() => Some(text?),
        _ = tokio::signal::ctrl_c() => {
            token.cancel();
            None
        }
    };
    let Some(text) = mounted else {
        debug!("Interrupted during load");
        return Ok(());
    };
    writeln!(out, "{text}")?;

    let mut lines = input.lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    // ignore blank input
                } else {
                    match line.parse::<BrowseCommand>() {
                        Ok(command) => {
                            let (flow, text) = browser.handle(command).await?;
                            if flow == Flow::Quit {
                                break;
                            }
                            writeln!(out, "{text}")?;
                        }
                        Err(e) => writeln!(out, "{e}")?,
                    }
                }
            }
            Some(navigation) = fired.recv() => {
                if let Some(text) = browser.on_fired(navigation).await? {
                    writeln!(out, "{text}")?;
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
        out.flush()?;
    }

    browser.unmount();
    Ok(())
}
