//! Keyword trigger reply, sent independently of command handling.

use std::sync::Arc;

use async_trait::async_trait;
use landbot_commands::trigger::trigger_reply;
use landbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use tracing::{info, warn};

/// Sends the trigger reply straight through the bot and lets the chain continue, so a message
/// can earn both the trigger reply and a command reply. A failed send is logged and skipped.
pub struct TriggerHandler {
    bot: Arc<dyn Bot>,
}

impl TriggerHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for TriggerHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if let Some(reply) = trigger_reply(&message.text) {
            info!(user_id = message.author.id, chat_id = message.chat.id, "Trigger word seen");
            if let Err(e) = self.bot.reply_to(message, reply).await {
                warn!(error = %e, chat_id = message.chat.id, "Failed to send trigger reply");
            }
        }
        Ok(HandlerResponse::Continue)
    }
}
