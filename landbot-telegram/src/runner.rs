//! REPL runner: converts teloxide messages to core::Message, passes them to the HandlerChain and
//! sends a final `Reply` back to the originating chat.

use std::sync::Arc;

use anyhow::Result;
use handler_chain::HandlerChain;
use landbot_core::{Bot as CoreBot, HandlerResponse, ToCoreMessage};
use teloxide::prelude::*;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// The bot's own Telegram user id, filled in from `get_me` before the REPL starts.
pub type BotIdentity = Arc<tokio::sync::RwLock<Option<i64>>>;

/// Starts the REPL with the given teloxide Bot and HandlerChain.
/// Calls get_me() first and records the bot's user id in `identity`; each message is converted
/// to core::Message and handled in its own spawned task.
#[instrument(skip(bot, handler_chain, reply_bot, identity))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    reply_bot: Arc<dyn CoreBot>,
    identity: BotIdentity,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            *identity.write().await = Some(me.user.id.0 as i64);
            info!(bot_id = me.user.id.0, username = ?me.user.username, "Bot identity set before repl");
        }
        Err(e) => warn!(error = %e, "get_me failed; own messages cannot be filtered"),
    }

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();
        let reply_bot = reply_bot.clone();

        async move {
            if msg.text().is_none() {
                return respond(());
            }
            let core_msg = TelegramMessageWrapper(&msg).to_core();
            info!(
                user_id = core_msg.author.id,
                chat_id = core_msg.chat.id,
                text = %core_msg.text,
                "Received message"
            );

            tokio::spawn(async move {
                match chain.handle(&core_msg).await {
                    Ok(HandlerResponse::Reply(text)) => {
                        if let Err(e) = reply_bot.reply_to(&core_msg, &text).await {
                            error!(error = %e, chat_id = core_msg.chat.id, "Failed to send reply");
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        error!(error = %e, user_id = core_msg.author.id, "Handler chain failed");
                    }
                }
            });

            respond(())
        }
    })
    .await;

    Ok(())
}
