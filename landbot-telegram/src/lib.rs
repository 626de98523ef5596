//! # landbot-telegram
//!
//! Telegram gateway layer: adapters, [`landbot_core::Bot`] implementation, gateway config, REPL runner.
//! Handles only Telegram connectivity and handler-chain execution; command logic lives in
//! landbot-commands.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::{run_repl, BotIdentity};
