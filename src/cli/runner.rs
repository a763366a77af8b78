//! CLI runner - executes commands

use super::browse::run_browser;
use super::commands::{Cli, Commands};
use super::render::{render_detail, render_listing};
use crate::api::CharacterApi;
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::types::CharacterId;
use crate::view::{DetailSession, ListingSession};
use std::time::Duration;
use tokio::io::BufReader;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        let api = CharacterApi::new(&config.api)?;

        match &self.cli.command {
            Commands::List { search, delete } => self.list(&api, search.as_deref(), delete).await,
            Commands::Show { id } => self.show(&api, id).await,
            Commands::Browse { delay_ms } => {
                let delay = delay_ms.map_or_else(|| config.navigation.delay(), Duration::from_millis);
                self.browse(&api, delay).await
            }
        }
    }

    /// Resolve configuration: file (or defaults), then flag overrides
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut config = match &self.cli.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config.api.base_url.clone_from(base_url);
            config.validate()?;
        }

        debug!("Using API at {}", config.api.base_url);
        Ok(config)
    }

    async fn list(&self, api: &CharacterApi, search: Option<&str>, delete: &[u32]) -> Result<()> {
        let mut session = ListingSession::new();
        session.mount(api).await;

        if let Some(message) = session.error() {
            return Err(Error::Other(message.to_string()));
        }

        for id in delete {
            if !session.delete(CharacterId(*id)) {
                info!("No character #{id} to delete");
            }
        }
        if let Some(query) = search {
            session.set_query(query);
        }

        println!("{}", render_listing(&session, self.cli.format)?);
        Ok(())
    }

    async fn show(&self, api: &CharacterApi, id: &str) -> Result<()> {
        let id: CharacterId = id.parse()?;
        let mut session = DetailSession::new(id);
        session.load(api).await;

        if let Some(message) = session.error() {
            return Err(Error::Other(message.to_string()));
        }

        println!("{}", render_detail(&session, self.cli.format)?);
        Ok(())
    }

    async fn browse(&self, api: &CharacterApi, delay: Duration) -> Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = std::io::stdout();
        run_browser(api, self.cli.format, delay, stdin, &mut stdout).await
    }
}
