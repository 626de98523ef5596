//! Free-text song name → catalog entry resolution.

use std::sync::Arc;

use tracing::debug;

use crate::catalog::SongCatalog;
use crate::script::starts_with_cyrillic;
use crate::translit::{transliterate, Direction};

pub const NOT_FOUND_MESSAGE: &str = "хм? пробвай пак";
pub const DISAMBIGUATION_HEADER: &str = "Може би имахте предвид:";

/// Outcome of matching one query against the catalog. Indices are catalog positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// A canonical name matched; scanning stopped there.
    Exact(usize),
    /// Only aliases matched; candidates in catalog order, never empty.
    Partial(Vec<usize>),
    NoMatch,
}

/// Catalog names are stored in Latin script, so queries typed in Cyrillic are transliterated
/// before matching.
pub fn normalize_query(query: &str) -> String {
    let query = query.trim();
    let query = if starts_with_cyrillic(query) {
        transliterate(query, Direction::ToLatin)
    } else {
        query.to_string()
    };
    query.to_lowercase()
}

#[derive(Debug, Clone)]
pub struct NameResolver {
    catalog: Arc<SongCatalog>,
}

impl NameResolver {
    pub fn new(catalog: Arc<SongCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &SongCatalog {
        &self.catalog
    }

    /// First canonical match wins outright; alias matches before it are dropped.
    pub fn match_name(&self, query: &str) -> MatchResult {
        let query = normalize_query(query);
        let mut candidates = Vec::new();
        for (index, song) in self.catalog.songs().iter().enumerate() {
            if song.canonical() == query {
                return MatchResult::Exact(index);
            }
            if song.aliases().iter().any(|alias| *alias == query) {
                candidates.push(index);
            }
        }
        if candidates.is_empty() {
            MatchResult::NoMatch
        } else {
            MatchResult::Partial(candidates)
        }
    }

    /// Reply text for a name query: a url, a disambiguation list, or the not-found message.
    pub fn resolve(&self, query: &str) -> String {
        let result = self.match_name(query);
        debug!(query = %query, result = ?result, "Resolved song name");
        let songs = self.catalog.songs();
        match result {
            MatchResult::Exact(index) => songs[index].url().to_string(),
            MatchResult::Partial(indices) if indices.len() == 1 => songs[indices[0]].url().to_string(),
            MatchResult::Partial(indices) => {
                let mut lines = vec![DISAMBIGUATION_HEADER.to_string()];
                lines.extend(
                    indices
                        .iter()
                        .map(|&i| format!("[{}]({})", songs[i].canonical(), songs[i].url())),
                );
                lines.join("\n")
            }
            MatchResult::NoMatch => NOT_FOUND_MESSAGE.to_string(),
        }
    }
}
