//! Command routing handler: turns a recognized command into the chain's `Reply`.

use std::sync::Arc;

use async_trait::async_trait;
use landbot_commands::CommandRouter;
use landbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{info, warn};

pub struct CommandHandler {
    router: Arc<CommandRouter>,
}

impl CommandHandler {
    pub fn new(router: Arc<CommandRouter>) -> Self {
        Self { router }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    /// `Reply` for an answered command, `Continue` when there is nothing to say, `Stop` (no reply)
    /// for a command with an invalid argument.
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        match self.router.route(&message.text).await {
            Ok(Some(reply)) => {
                info!(user_id = message.author.id, reply_len = reply.len(), "Command answered");
                Ok(HandlerResponse::Reply(reply))
            }
            Ok(None) => Ok(HandlerResponse::Continue),
            Err(e) => {
                warn!(
                    user_id = message.author.id,
                    text = %message.text,
                    error = %e,
                    "Rejected command argument"
                );
                Ok(HandlerResponse::Stop)
            }
        }
    }
}
