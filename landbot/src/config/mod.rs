//! Bot configuration: TelegramConfig (gateway) + EngineConfig (command engine and logging).

mod bot_config;
mod engine;


pub use bot_config::BotConfig;
pub use engine::EngineConfig;
