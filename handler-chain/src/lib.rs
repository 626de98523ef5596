//! # Handler chain
//!
//! Runs a sequence of handlers for each inbound message. Each handler has optional
//! before/handle/after: all `before` run in order (any `false` stops the chain), then `handle`
//! runs until one returns Stop or Reply, then all `after` run in reverse order with the final response.

use landbot_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Chain of handlers: before (all) → handle (until Stop/Reply) → after (reverse).
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs all before → handle until Stop/Reply → all after in reverse. Returns the first Stop or Reply, or Continue.
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, message_id = message.id))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        debug!(user_id = message.author.id, handlers = self.handlers.len(), "step: handler_chain started");

        for h in &self.handlers {
            let name = std::any::type_name_of_val(h.as_ref());
            if !h.before(message).await? {
                info!(user_id = message.author.id, handler = %name, "step: before returned false, chain stopped");
                return Ok(HandlerResponse::Stop);
            }
        }

        let mut final_response = HandlerResponse::Continue;
        for h in &self.handlers {
            let name = std::any::type_name_of_val(h.as_ref());
            let response = match h.handle(message).await {
                Ok(response) => response,
                Err(e) => {
                    warn!(user_id = message.author.id, handler = %name, error = %e, "step: handler failed");
                    return Err(e);
                }
            };
            debug!(handler = %name, response = ?response, "Handler processed");

            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    let reply_len = match &response {
                        HandlerResponse::Reply(s) => Some(s.len()),
                        _ => None,
                    };
                    info!(
                        user_id = message.author.id,
                        handler = %name,
                        reply_len = ?reply_len,
                        "step: handler chain stopped by handler"
                    );
                    final_response = response;
                    break;
                }
                HandlerResponse::Continue | HandlerResponse::Ignore => {}
            }
        }

        for h in self.handlers.iter().rev() {
            h.after(message, &final_response).await?;
        }

        debug!(user_id = message.author.id, response = ?final_response, "step: handler_chain finished");

        Ok(final_response)
    }
}

// Unit/integration tests live in tests/handler_chain_test.rs
