//! # rhyme-client
//!
//! Remote rhyme dictionaries behind one [`RhymeProvider`] trait:
//! - [`DatamuseClient`] for Latin-script (English) terms.
//! - [`RimichkaClient`] for Cyrillic-script (Bulgarian) terms.
//!
//! Both expose a fallible `try_fetch` and implement the trait as a fail-soft wrapper: transport
//! errors, non-success statuses and malformed payloads all become an empty list.

mod datamuse;
mod error;
mod http;
mod rimichka;

pub use datamuse::DatamuseClient;
pub use error::RhymeClientError;
pub use http::DEFAULT_TIMEOUT;
pub use rimichka::RimichkaClient;

use async_trait::async_trait;

/// A remote rhyme lookup. Implementations never fail: any error yields an empty list.
#[async_trait]
pub trait RhymeProvider: Send + Sync {
    /// Short provider name for logs.
    fn name(&self) -> &str;

    /// Returns rhymes for `term` in provider order (best first where the provider ranks).
    async fn fetch_rhymes(&self, term: &str) -> Vec<String>;
}
