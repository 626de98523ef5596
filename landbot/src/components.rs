//! Component factory: builds the command engine and the handler chain from config. Isolates
//! assembly logic from the runner.

use std::sync::Arc;

use anyhow::{Context, Result};
use handler_chain::HandlerChain;
use landbot_commands::{CommandAliases, CommandRouter, NameResolver, RhymeResolver, SongCatalog};
use landbot_core::Bot;
use landbot_telegram::BotIdentity;
use rhyme_client::{DatamuseClient, RimichkaClient};
use tracing::{info, instrument};

use crate::config::EngineConfig;
use crate::handlers::{CommandHandler, SelfMessageFilter, TriggerHandler};

/// Read-only engine state shared by every message task.
#[derive(Clone)]
pub struct EngineComponents {
    pub router: Arc<CommandRouter>,
}

/// Loads the catalog, validates the alias tables and wires both rhyme providers into the router.
#[instrument(skip(config))]
pub fn build_engine(config: &EngineConfig) -> Result<EngineComponents> {
    let catalog = match &config.catalog_path {
        Some(path) => SongCatalog::from_path(path)
            .with_context(|| format!("Failed to load song catalog from {}", path.display()))?,
        None => SongCatalog::builtin().context("Bundled song catalog is invalid")?,
    };
    info!(
        songs = catalog.len(),
        quotes = catalog.quotes().len(),
        source = ?config.catalog_path,
        "Song catalog loaded"
    );

    let aliases = CommandAliases::standard().context("Command alias tables overlap")?;

    let latin = DatamuseClient::new(&config.datamuse_base_url, config.rhyme_timeout)
        .context("Failed to create Datamuse client")?;
    let cyrillic = RimichkaClient::new(&config.rimichka_base_url, config.rhyme_timeout)
        .context("Failed to create Rimichka client")?;
    info!(
        datamuse = %config.datamuse_base_url,
        rimichka = %config.rimichka_base_url,
        timeout_secs = config.rhyme_timeout.as_secs(),
        "Rhyme providers configured"
    );

    let rhymes = RhymeResolver::new(Arc::new(latin), Arc::new(cyrillic));
    let names = NameResolver::new(Arc::new(catalog));
    let router = CommandRouter::new(config.command_prefix, aliases, rhymes, names);

    Ok(EngineComponents {
        router: Arc::new(router),
    })
}

/// Builds the per-message chain: own-message filter → trigger reply → command routing.
pub fn build_handler_chain(
    components: &EngineComponents,
    bot: Arc<dyn Bot>,
    identity: BotIdentity,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(SelfMessageFilter::new(identity)))
        .add_handler(Arc::new(TriggerHandler::new(bot)))
        .add_handler(Arc::new(CommandHandler::new(components.router.clone())))
}
