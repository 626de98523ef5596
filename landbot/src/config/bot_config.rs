//! BotConfig: TelegramConfig + EngineConfig. Use load() for env-based loading.

use anyhow::Result;
use landbot_telegram::TelegramConfig;

use super::EngineConfig;

/// Full config for running the chat bot.
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub engine: EngineConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::load(token)?;
        let engine = EngineConfig::load()?;
        Ok(Self { telegram, engine })
    }

    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        self.engine.validate()
    }

    pub fn telegram(&self) -> &TelegramConfig {
        &self.telegram
    }

    pub fn engine(&self) -> &EngineConfig {
        &self.engine
    }

    pub fn bot_token(&self) -> &str {
        &self.telegram.bot_token
    }

    pub fn log_file(&self) -> &str {
        &self.engine.log_file
    }
}
