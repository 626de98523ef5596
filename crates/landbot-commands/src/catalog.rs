//! Song catalog: ordered entries (canonical name, aliases, url) plus the quote list used by the
//! test command.
//!
//! The catalog is read once at startup, validated, and shared read-only afterwards.

use std::path::Path;

use rand::seq::SliceRandom;
use serde::Deserialize;

use crate::error::CatalogError;

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// One song: `names[0]` is the canonical name, the rest are aliases.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SongEntry {
    names: Vec<String>,
    url: String,
}

impl SongEntry {
    /// Builds an entry. Validation happens when the entry is put into a [`SongCatalog`].
    pub fn new<S: Into<String>>(names: Vec<S>, url: impl Into<String>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            url: url.into(),
        }
    }

    pub fn canonical(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or_default()
    }

    pub fn aliases(&self) -> &[String] {
        self.names.get(1..).unwrap_or(&[])
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    songs: Vec<SongEntry>,
    #[serde(default)]
    quotes: Vec<String>,
}

/// Validated, immutable song catalog.
#[derive(Debug, Clone)]
pub struct SongCatalog {
    songs: Vec<SongEntry>,
    quotes: Vec<String>,
}

impl SongCatalog {
    /// Validates and normalizes entries: names are trimmed and lowercased, every entry needs a
    /// name and a url, and canonical names must be unique. Aliases may repeat across entries.
    pub fn new(songs: Vec<SongEntry>, quotes: Vec<String>) -> Result<Self, CatalogError> {
        let mut normalized: Vec<SongEntry> = Vec::with_capacity(songs.len());
        for (index, song) in songs.into_iter().enumerate() {
            if song.names.is_empty() {
                return Err(CatalogError::NoNames(index));
            }
            let names: Vec<String> = song
                .names
                .iter()
                .map(|n| n.trim().to_lowercase())
                .collect();
            if names.iter().any(String::is_empty) {
                return Err(CatalogError::EmptyName { index });
            }
            let url = song.url.trim().to_string();
            if url.is_empty() {
                return Err(CatalogError::EmptyUrl(names[0].clone()));
            }
            if normalized.iter().any(|s| s.canonical() == names[0]) {
                return Err(CatalogError::DuplicateCanonical(names[0].clone()));
            }
            normalized.push(SongEntry { names, url });
        }
        Ok(Self {
            songs: normalized,
            quotes,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.songs, file.quotes)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The catalog bundled with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    pub fn songs(&self) -> &[SongEntry] {
        &self.songs
    }

    pub fn get(&self, index: usize) -> Option<&SongEntry> {
        self.songs.get(index)
    }

    pub fn quotes(&self) -> &[String] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// A uniformly random song url; `None` for an empty catalog.
    pub fn random_url(&self) -> Option<&str> {
        self.songs
            .choose(&mut rand::thread_rng())
            .map(SongEntry::url)
    }

    /// A uniformly random quote; `None` when there are no quotes.
    pub fn random_quote(&self) -> Option<&str> {
        self.quotes
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = SongCatalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        assert!(!catalog.quotes().is_empty());
        assert_eq!(catalog.songs()[0].canonical(), "fmi");
    }

    #[test]
    fn test_names_are_normalized() {
        let catalog = SongCatalog::new(
            vec![SongEntry::new(vec!["  Alpha ", "A"], " u1 ")],
            Vec::new(),
        )
        .unwrap();

        let entry = catalog.get(0).unwrap();
        assert_eq!(entry.canonical(), "alpha");
        assert_eq!(entry.aliases(), ["a"]);
        assert_eq!(entry.url(), "u1");
    }

    #[test]
    fn test_duplicate_canonical_is_rejected() {
        let err = SongCatalog::new(
            vec![
                SongEntry::new(vec!["alpha"], "u1"),
                SongEntry::new(vec!["ALPHA", "a"], "u2"),
            ],
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCanonical(name) if name == "alpha"));
    }

    #[test]
    fn test_shared_aliases_are_allowed() {
        let catalog = SongCatalog::new(
            vec![
                SongEntry::new(vec!["alpha", "a"], "u1"),
                SongEntry::new(vec!["beta", "a"], "u2"),
            ],
            Vec::new(),
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_invalid_entries_are_rejected() {
        let no_names: Vec<&str> = Vec::new();
        assert!(matches!(
            SongCatalog::new(vec![SongEntry::new(no_names, "u")], Vec::new()),
            Err(CatalogError::NoNames(0))
        ));
        assert!(matches!(
            SongCatalog::new(vec![SongEntry::new(vec!["x", " "], "u")], Vec::new()),
            Err(CatalogError::EmptyName { index: 0 })
        ));
        assert!(matches!(
            SongCatalog::new(vec![SongEntry::new(vec!["x"], "")], Vec::new()),
            Err(CatalogError::EmptyUrl(_))
        ));
    }

    #[test]
    fn test_from_json_str_rejects_bad_shape() {
        assert!(matches!(
            SongCatalog::from_json_str(r#"{"songs": [{"names": "x"}]}"#),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{"songs": [{"names": ["kon"], "url": "https://example.org/kon"}]}"#,
        )
        .unwrap();

        let catalog = SongCatalog::from_path(&path).unwrap();

        assert_eq!(catalog.len(), 1);
        assert!(catalog.quotes().is_empty());
        assert_eq!(catalog.random_url(), Some("https://example.org/kon"));
        assert_eq!(catalog.random_quote(), None);
    }

    #[test]
    fn test_from_path_missing_file() {
        assert!(matches!(
            SongCatalog::from_path("/nonexistent/catalog.json"),
            Err(CatalogError::Io(_))
        ));
    }

    #[test]
    fn test_random_picks_come_from_catalog() {
        let catalog = SongCatalog::builtin().unwrap();
        for _ in 0..20 {
            let url = catalog.random_url().unwrap();
            assert!(catalog.songs().iter().any(|s| s.url() == url));
            let quote = catalog.random_quote().unwrap();
            assert!(catalog.quotes().iter().any(|q| q == quote));
        }
    }
}
