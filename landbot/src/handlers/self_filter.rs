//! Drops messages authored by the bot itself.

use async_trait::async_trait;
use landbot_core::{Handler, Message, Result};
use landbot_telegram::BotIdentity;
use tracing::debug;

/// Stops the chain in `before()` when the author is the bot. Until the identity is known every
/// message passes.
pub struct SelfMessageFilter {
    identity: BotIdentity,
}

impl SelfMessageFilter {
    pub fn new(identity: BotIdentity) -> Self {
        Self { identity }
    }
}

#[async_trait]
impl Handler for SelfMessageFilter {
    async fn before(&self, message: &Message) -> Result<bool> {
        let own_id = *self.identity.read().await;
        if own_id == Some(message.author.id) {
            debug!(user_id = message.author.id, "Ignoring own message");
            return Ok(false);
        }
        Ok(true)
    }
}
