//! # landbot-core
//!
//! Core types and traits for the chat responder: [`Bot`], [`Handler`], message and user types,
//! the error type and tracing initialization. Transport-agnostic; used by landbot-telegram,
//! handler-chain and the landbot application.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, Result};
pub use logger::{init_cli_tracing, init_tracing};
pub use types::{Chat, ChatKind, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User};
