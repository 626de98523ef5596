//! teloxide → landbot_core conversions.

use landbot_core::{Chat, ChatKind, Message, ToCoreMessage, ToCoreUser, User};

pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            display_name: self.0.full_name(),
            is_bot: self.0.is_bot,
        }
    }
}

/// Posts without an author (anonymous channel posts) get user id 0.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> TelegramMessageWrapper<'a> {
    fn chat_kind(&self) -> ChatKind {
        let chat = &self.0.chat;
        if chat.is_private() {
            ChatKind::Private
        } else if chat.is_channel() {
            ChatKind::Channel
        } else {
            ChatKind::Group
        }
    }
}

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let author = match self.0.from.as_ref() {
            Some(user) => TelegramUserWrapper(user).to_core(),
            None => User {
                id: 0,
                display_name: String::new(),
                is_bot: false,
            },
        };
        Message {
            id: self.0.id.0,
            author,
            chat: Chat {
                id: self.0.chat.id.0,
                kind: self.chat_kind(),
            },
            text: self.0.text().unwrap_or_default().to_string(),
            received_at: self.0.date,
        }
    }
}
