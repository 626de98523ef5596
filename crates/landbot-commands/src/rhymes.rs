//! Rhyme lookup across the Latin and Cyrillic providers.

use std::sync::Arc;

use rhyme_client::RhymeProvider;
use tracing::{debug, info};

use crate::script::{classify, Script};
use crate::translit::{transliterate, Direction};

pub const NO_RHYME_MESSAGE: &str = "Е туй вече не мога да го изримувам.";

/// Chooses a provider by the term's script. A Latin term that finds nothing may be a Bulgarian
/// word typed in Latin letters ("maimunitsa"), so it is retried once, transliterated, against
/// the Cyrillic provider.
#[derive(Clone)]
pub struct RhymeResolver {
    latin: Arc<dyn RhymeProvider>,
    cyrillic: Arc<dyn RhymeProvider>,
}

impl RhymeResolver {
    pub fn new(latin: Arc<dyn RhymeProvider>, cyrillic: Arc<dyn RhymeProvider>) -> Self {
        Self { latin, cyrillic }
    }

    /// All rhymes for `term`, after the single fallback if it applied.
    pub async fn lookup(&self, term: &str) -> Vec<String> {
        match classify(term) {
            Script::Cyrillic => self.cyrillic.fetch_rhymes(term).await,
            Script::Latin => {
                let rhymes = self.latin.fetch_rhymes(term).await;
                if !rhymes.is_empty() {
                    return rhymes;
                }
                let fallback = transliterate(term, Direction::ToCyrillic);
                info!(
                    term = %term,
                    fallback = %fallback,
                    provider = self.cyrillic.name(),
                    "No Latin rhymes, retrying as Cyrillic"
                );
                self.cyrillic.fetch_rhymes(&fallback).await
            }
        }
    }

    /// Reply text: up to `max_results` rhymes as quoted lines, or [`NO_RHYME_MESSAGE`].
    pub async fn resolve(&self, term: &str, max_results: usize) -> String {
        let rhymes = self.lookup(term).await;
        debug!(term = %term, found = rhymes.len(), max_results, "Rhyme lookup finished");
        render_rhymes(&rhymes, max_results).unwrap_or_else(|| NO_RHYME_MESSAGE.to_string())
    }
}

/// `> word` per line for the first `max_results` rhymes; `None` when nothing is left to show.
pub fn render_rhymes(rhymes: &[String], max_results: usize) -> Option<String> {
    let shown: Vec<String> = rhymes
        .iter()
        .take(max_results)
        .map(|rhyme| format!("> {}", rhyme))
        .collect();
    if shown.is_empty() {
        None
    } else {
        Some(shown.join("\n"))
    }
}
