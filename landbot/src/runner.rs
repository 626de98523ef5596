//! Runtime entry points: the Telegram bot loop and one-shot offline commands.

use std::sync::Arc;

use anyhow::Result;
use landbot_core::{init_tracing, Bot};
use landbot_telegram::{run_repl, BotIdentity, TelegramBotAdapter};
use tracing::{info, instrument};

use crate::cli::Commands;
use crate::components::{build_engine, build_handler_chain};
use crate::config::{BotConfig, EngineConfig};

/// Main entry: validate config, init logging, build the engine and handler chain, then run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(prefix = %config.engine().command_prefix, "Initializing bot");

    let components = build_engine(config.engine())?;
    let teloxide_bot = config.telegram().build_bot()?;
    let reply_bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let identity: BotIdentity = Arc::default();
    let handler_chain = build_handler_chain(&components, reply_bot.clone(), identity.clone());

    info!("Bot started successfully");

    run_repl(teloxide_bot, handler_chain, reply_bot, identity).await
}

/// Runs one offline CLI command against the engine and returns the lines to print.
pub async fn run_offline(config: &EngineConfig, command: Commands) -> Result<Vec<String>> {
    config.validate()?;
    let components = build_engine(config)?;
    let router = &components.router;

    let lines = match command {
        Commands::Run { .. } => anyhow::bail!("`run` starts the chat bot; use run_bot"),
        Commands::Route { message } => router.respond(&message.join(" ")).await?,
        Commands::Rhyme { term, max } => {
            vec![router.rhymes().resolve(&term.to_lowercase(), max).await]
        }
        Commands::Song { query } => vec![router.names().resolve(&query.join(" "))],
    };
    Ok(lines)
}
