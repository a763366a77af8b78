//! Common types used throughout the character browser
//!
//! This module contains the records served by the character API and the
//! page envelope that wraps listing responses.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// Client-local, ordered set of characters owned by one listing session
pub type CharacterCollection = Vec<Character>;

// ============================================================================
// Identifiers
// ============================================================================

/// Server-assigned character identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub u32);

impl CharacterId {
    /// Raw numeric value
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CharacterId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.parse::<u32>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(Error::invalid_id(s)),
        }
    }
}

impl From<u32> for CharacterId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

// ============================================================================
// Character
// ============================================================================

/// Life status of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    Alive,
    Dead,
    #[default]
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Alive => "Alive",
            Status::Dead => "Dead",
            Status::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Gender of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
    Genderless,
    #[default]
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::Genderless => "Genderless",
            Gender::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Named reference to a location (origin or last known location)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Location {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Resource URL; the API sends an empty string when unknown
    #[serde(default)]
    pub url: Option<String>,
}

impl Location {
    /// Create a location reference without a URL
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }

    /// The resource URL, treating an empty string as absent
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }
}

/// A character record as served by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Unique, stable identifier
    pub id: CharacterId,
    /// Display name
    pub name: String,
    /// Avatar image URL
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub species: String,
    /// Sub-species or variant
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub origin: Option<Location>,
    /// Last known location
    #[serde(default)]
    pub location: Option<Location>,
    /// Episode URLs the character appears in
    #[serde(default)]
    pub episode: Vec<String>,
    /// Canonical resource URL
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

impl Character {
    /// Create a character with only an id and a name
    pub fn new(id: impl Into<CharacterId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: String::new(),
            status: Status::default(),
            species: String::new(),
            kind: String::new(),
            gender: Gender::default(),
            origin: None,
            location: None,
            episode: Vec::new(),
            url: None,
            created: None,
        }
    }

    /// Origin name, empty when the relation is missing
    pub fn origin_name(&self) -> &str {
        self.origin.as_ref().map_or("", |l| l.name.as_str())
    }

    /// Location name, empty when the relation is missing
    pub fn location_name(&self) -> &str {
        self.location.as_ref().map_or("", |l| l.name.as_str())
    }
}

// ============================================================================
// Page Envelope
// ============================================================================

/// Pagination metadata of a listing response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total number of records across all pages
    #[serde(default)]
    pub count: Option<u64>,
    /// Total number of pages
    #[serde(default)]
    pub pages: Option<u32>,
    /// URL of the next page, `None` on the last page
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page
    #[serde(default)]
    pub prev: Option<String>,
}

/// One page of a listing response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub info: PageInfo,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// The next-page pointer, treating an empty string as end of pagination
    pub fn next_url(&self) -> Option<&str> {
        self.info.next.as_deref().filter(|u| !u.is_empty())
    }
}
