//! Terminal rendering of the view sessions

use super::commands::OutputFormat;
use crate::error::Result;
use crate::types::Character;
use crate::view::{DetailSession, DetailState, ListingSession, ListingState};
use serde_json::json;
use std::fmt::Write as _;

/// Title shown above the listing
pub const LISTING_TITLE: &str = "Rick and Morty Characters";

/// Render the listing view
pub fn render_listing(session: &ListingSession, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty_listing(session)),
        OutputFormat::Json => {
            let value = match session.state() {
                ListingState::Idle | ListingState::Loading => json!({ "loading": true }),
                ListingState::Failed(message) => json!({ "error": message }),
                ListingState::Loaded(_) => {
                    let visible = session.visible();
                    json!({
                        "query": session.query(),
                        "count": visible.len(),
                        "characters": visible,
                    })
                }
            };
            Ok(serde_json::to_string_pretty(&value)?)
        }
    }
}

fn pretty_listing(session: &ListingSession) -> String {
    match session.state() {
        ListingState::Idle | ListingState::Loading => "Loading characters...".to_string(),
        ListingState::Failed(message) => format!("Error: {message}"),
        ListingState::Loaded(_) => {
            let visible = session.visible();
            let mut out = format!("{LISTING_TITLE} ({})", visible.len());
            if !session.query().is_empty() {
                let _ = write!(out, "  [search: \"{}\"]", session.query());
            }
            for character in &visible {
                out.push('\n');
                out.push_str(&card(character));
            }
            out
        }
    }
}

/// One listing card
pub fn card(character: &Character) -> String {
    format!(
        "  #{:<4} {:<32} {}",
        character.id, character.name, character.image
    )
}

/// Render the detail view
pub fn render_detail(session: &DetailSession, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(match session.state() {
            DetailState::Loading => "Loading character details...".to_string(),
            DetailState::Failed(message) => format!("Error: {message}"),
            DetailState::Loaded(character) => detail_panel(character),
        }),
        OutputFormat::Json => {
            let value = match session.state() {
                DetailState::Loading => json!({ "loading": true }),
                DetailState::Failed(message) => json!({ "error": message }),
                DetailState::Loaded(character) => serde_json::to_value(character)?,
            };
            Ok(serde_json::to_string_pretty(&value)?)
        }
    }
}

fn detail_panel(character: &Character) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", character.name);
    let _ = writeln!(out, "  Image:    {}", character.image);
    let _ = writeln!(out, "  Status:   {}", character.status);
    let _ = writeln!(out, "  Species:  {}", character.species);
    let _ = writeln!(out, "  Gender:   {}", character.gender);
    let _ = writeln!(out, "  Origin:   {}", character.origin_name());
    let _ = write!(out, "  Location: {}", character.location_name());
    out
}
