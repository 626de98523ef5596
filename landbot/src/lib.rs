//! # landbot
//!
//! Chat command responder. Wires the command engine (landbot-commands), the rhyme clients
//! (rhyme-client) and the handler chain onto the Telegram gateway (landbot-telegram).
//! Loads config from env and runs the REPL, or answers single messages from the CLI.

pub mod cli;
pub mod components;
pub mod config;
pub mod handlers;
pub mod runner;

pub use cli::{Cli, Commands};
pub use components::{build_engine, build_handler_chain, EngineComponents};
pub use config::{BotConfig, EngineConfig};
pub use handlers::{CommandHandler, SelfMessageFilter, TriggerHandler};
pub use runner::{run_bot, run_offline};
