//! Character API client
//!
//! Binds the HTTP client and the page walker to the character endpoints:
//! the listing at `{base_url}` and the detail at `{base_url}/{id}`.

use crate::cancel::CancelToken;
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::pagination::{fetch_all_pages, FetchOutcome};
use crate::types::{Character, CharacterCollection, CharacterId};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// Source of character data consumed by the view sessions
#[async_trait]
pub trait CharacterSource: Send + Sync {
    /// Fetch every character across all listing pages
    async fn fetch_all(&self, cancel: &CancelToken) -> Result<FetchOutcome<CharacterCollection>>;

    /// Fetch a single character by id
    async fn fetch_one(&self, id: CharacterId) -> Result<Character>;
}

/// HTTP-backed [`CharacterSource`]
#[derive(Debug, Clone)]
pub struct CharacterApi {
    client: HttpClient,
    base_url: String,
}

impl CharacterApi {
    /// Build an API client from configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = HttpClientConfig::builder()
            .base_url(config.base_url.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone());

        builder = match &config.rate_limit {
            Some(limit) => builder.rate_limit(limit.clone()),
            None => builder.no_rate_limit(),
        };

        let client = HttpClient::with_config(builder.build())?;
        Ok(Self::with_client(client, config.base_url.clone()))
    }

    /// Wrap an existing HTTP client
    pub fn with_client(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Listing endpoint, where the page walk starts
    pub fn listing_url(&self) -> &str {
        &self.base_url
    }

    /// Detail endpoint for one character
    pub fn detail_url(&self, id: CharacterId) -> String {
        format!("{}/{id}", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CharacterSource for CharacterApi {
    async fn fetch_all(&self, cancel: &CancelToken) -> Result<FetchOutcome<CharacterCollection>> {
        fetch_all_pages(&self.client, &self.base_url, cancel).await
    }

    async fn fetch_one(&self, id: CharacterId) -> Result<Character> {
        let url = self.detail_url(id);
        let response = self.client.get(&url).await?;
        let status = response.status();
        if !status.is_success() {
            warn!("Fetching character {id} failed with status {}", status.as_u16());
            return Err(Error::FetchFailed {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let character: Character = serde_json::from_str(&body)?;
        debug!("Fetched character {id}: {}", character.name);
        Ok(character)
    }
}
