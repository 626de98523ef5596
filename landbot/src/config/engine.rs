//! Engine config: command prefix, rhyme services, song catalog, logging. Loaded from env.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use rhyme_client::{DatamuseClient, RimichkaClient};

/// Everything the command engine needs; none of it is Telegram-specific.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// COMMAND_PREFIX
    pub command_prefix: char,
    /// DATAMUSE_BASE_URL
    pub datamuse_base_url: String,
    /// RIMICHKA_BASE_URL
    pub rimichka_base_url: String,
    /// RHYME_TIMEOUT_SECS
    pub rhyme_timeout: Duration,
    /// SONG_CATALOG_PATH; None uses the bundled catalog
    pub catalog_path: Option<PathBuf>,
    /// LOG_FILE
    pub log_file: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            command_prefix: '.',
            datamuse_base_url: DatamuseClient::DEFAULT_BASE_URL.to_string(),
            rimichka_base_url: RimichkaClient::DEFAULT_BASE_URL.to_string(),
            rhyme_timeout: rhyme_client::DEFAULT_TIMEOUT,
            catalog_path: None,
            log_file: "logs/landbot.log".to_string(),
        }
    }
}

impl EngineConfig {
    /// Load from environment variables; unset variables keep their defaults.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let command_prefix = match env::var("COMMAND_PREFIX") {
            Ok(raw) => parse_prefix(&raw)?,
            Err(_) => defaults.command_prefix,
        };
        let datamuse_base_url =
            env::var("DATAMUSE_BASE_URL").unwrap_or(defaults.datamuse_base_url);
        let rimichka_base_url =
            env::var("RIMICHKA_BASE_URL").unwrap_or(defaults.rimichka_base_url);
        let rhyme_timeout = match env::var("RHYME_TIMEOUT_SECS") {
            Ok(raw) => Duration::from_secs(raw.trim().parse().map_err(|_| {
                anyhow::anyhow!("RHYME_TIMEOUT_SECS must be a whole number of seconds: {}", raw)
            })?),
            Err(_) => defaults.rhyme_timeout,
        };
        let catalog_path = env::var("SONG_CATALOG_PATH").ok().map(PathBuf::from);
        let log_file = env::var("LOG_FILE").unwrap_or(defaults.log_file);

        Ok(Self {
            command_prefix,
            datamuse_base_url,
            rimichka_base_url,
            rhyme_timeout,
            catalog_path,
            log_file,
        })
    }

    /// Validate config (prefix shape, service URLs, timeout). Call after load to fail fast.
    pub fn validate(&self) -> Result<()> {
        check_prefix(self.command_prefix)?;
        for (name, url) in [
            ("DATAMUSE_BASE_URL", &self.datamuse_base_url),
            ("RIMICHKA_BASE_URL", &self.rimichka_base_url),
        ] {
            if reqwest::Url::parse(url).is_err() {
                anyhow::bail!("{} is not a valid URL: {}", name, url);
            }
        }
        if self.rhyme_timeout.is_zero() {
            anyhow::bail!("RHYME_TIMEOUT_SECS must be greater than zero");
        }
        Ok(())
    }
}

fn parse_prefix(raw: &str) -> Result<char> {
    let mut chars = raw.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => check_prefix(c).map(|_| c),
        _ => anyhow::bail!("COMMAND_PREFIX must be exactly one character, got {:?}", raw),
    }
}

fn check_prefix(c: char) -> Result<()> {
    if c.is_alphanumeric() || c.is_whitespace() {
        anyhow::bail!("COMMAND_PREFIX must be a symbol, got {:?}", c);
    }
    Ok(())
}
