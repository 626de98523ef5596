//! Rimichka (http://rimichka.com) rhyme lookup for Bulgarian (Cyrillic) terms.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{info, warn};

use crate::http::{build_client, endpoint};
use crate::{RhymeClientError, RhymeProvider};

/// `GET {base}/?word={term}&json=1`; results are ranked by `pri`, highest first.
#[derive(Debug, Clone)]
pub struct RimichkaClient {
    client: Client,
    lookup_url: Url,
}

#[derive(Debug, Deserialize)]
struct RimichkaWord {
    wrd: String,
    pri: f64,
}

impl RimichkaClient {
    pub const DEFAULT_BASE_URL: &'static str = "http://rimichka.com";

    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RhymeClientError> {
        Ok(Self {
            client: build_client(timeout)?,
            lookup_url: endpoint(base_url, "")?,
        })
    }

    /// Fetches rhymes sorted by priority, surfacing every failure.
    pub async fn try_fetch(&self, term: &str) -> Result<Vec<String>, RhymeClientError> {
        let response = self
            .client
            .get(self.lookup_url.clone())
            .query(&[("word", term), ("json", "1")])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RhymeClientError::Status(status));
        }
        let mut words: Vec<RimichkaWord> = response.json().await?;
        // Stable: equal priorities keep service order.
        words.sort_by(|a, b| b.pri.total_cmp(&a.pri));
        Ok(words.into_iter().map(|w| w.wrd).collect())
    }
}

#[async_trait]
impl RhymeProvider for RimichkaClient {
    fn name(&self) -> &str {
        "rimichka"
    }

    async fn fetch_rhymes(&self, term: &str) -> Vec<String> {
        match self.try_fetch(term).await {
            Ok(words) => {
                info!(provider = "rimichka", term = %term, count = words.len(), "Fetched rhymes");
                words
            }
            Err(e) => {
                warn!(provider = "rimichka", term = %term, error = %e, "Rhyme lookup failed");
                Vec::new()
            }
        }
    }
}
