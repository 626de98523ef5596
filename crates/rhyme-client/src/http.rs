//! Shared HTTP client construction for the rhyme services.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::RhymeClientError;

/// Per-request timeout used when callers do not configure one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub(crate) fn build_client(timeout: Duration) -> Result<Client, RhymeClientError> {
    Ok(Client::builder()
        .timeout(timeout)
        .user_agent(concat!("landbot/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// Joins `base` and `path`, tolerating a trailing slash on the base.
pub(crate) fn endpoint(base: &str, path: &str) -> Result<Url, RhymeClientError> {
    let joined = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    Url::parse(&joined).map_err(|_| RhymeClientError::BaseUrl(base.to_string()))
}
