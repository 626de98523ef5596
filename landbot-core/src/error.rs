//! Error type shared by handlers and bot transports.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    /// The transport failed to deliver an outgoing message.
    #[error("Send failed: {0}")]
    Send(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BotError>;
