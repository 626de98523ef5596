//! Datamuse (https://www.datamuse.com/api/) rhyme lookup for Latin-script terms.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{info, warn};

use crate::http::{build_client, endpoint};
use crate::{RhymeClientError, RhymeProvider};

/// `GET {base}/words?rel_rhy={term}`; results are used in the order the service returns them.
#[derive(Debug, Clone)]
pub struct DatamuseClient {
    client: Client,
    words_url: Url,
}

#[derive(Debug, Deserialize)]
struct DatamuseWord {
    word: String,
}

impl DatamuseClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.datamuse.com";

    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RhymeClientError> {
        Ok(Self {
            client: build_client(timeout)?,
            words_url: endpoint(base_url, "words")?,
        })
    }

    /// Fetches rhymes, surfacing every failure.
    pub async fn try_fetch(&self, term: &str) -> Result<Vec<String>, RhymeClientError> {
        let response = self
            .client
            .get(self.words_url.clone())
            .query(&[("rel_rhy", term)])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RhymeClientError::Status(status));
        }
        let words: Vec<DatamuseWord> = response.json().await?;
        Ok(words.into_iter().map(|w| w.word).collect())
    }
}

#[async_trait]
impl RhymeProvider for DatamuseClient {
    fn name(&self) -> &str {
        "datamuse"
    }

    async fn fetch_rhymes(&self, term: &str) -> Vec<String> {
        match self.try_fetch(term).await {
            Ok(words) => {
                info!(provider = "datamuse", term = %term, count = words.len(), "Fetched rhymes");
                words
            }
            Err(e) => {
                warn!(provider = "datamuse", term = %term, error = %e, "Rhyme lookup failed");
                Vec::new()
            }
        }
    }
}
