//! Test doubles shared by the engine integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use landbot_commands::{
    CommandAliases, CommandRouter, NameResolver, RhymeResolver, SongCatalog, SongEntry,
};
use rhyme_client::RhymeProvider;

/// Provider that answers from a fixed table and records every term it was asked for.
#[derive(Default)]
pub struct RecordingProvider {
    name: &'static str,
    answers: HashMap<String, Vec<String>>,
    calls: Mutex<Vec<String>>,
}

impl RecordingProvider {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    pub fn answer(mut self, term: &str, rhymes: &[&str]) -> Self {
        self.answers
            .insert(term.to_string(), rhymes.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RhymeProvider for RecordingProvider {
    fn name(&self) -> &str {
        self.name
    }

    async fn fetch_rhymes(&self, term: &str) -> Vec<String> {
        self.calls.lock().unwrap().push(term.to_string());
        self.answers.get(term).cloned().unwrap_or_default()
    }
}

pub fn test_catalog() -> Arc<SongCatalog> {
    Arc::new(
        SongCatalog::new(
            vec![
                SongEntry::new(vec!["alpha", "a"], "u1"),
                SongEntry::new(vec!["beta", "a"], "u2"),
                SongEntry::new(vec!["fmi", "faculty"], "u3"),
            ],
            vec!["quote one".to_string(), "quote two".to_string()],
        )
        .unwrap(),
    )
}

pub struct Fixture {
    pub router: CommandRouter,
    pub latin: Arc<RecordingProvider>,
    pub cyrillic: Arc<RecordingProvider>,
}

pub fn fixture(latin: RecordingProvider, cyrillic: RecordingProvider) -> Fixture {
    let latin = Arc::new(latin);
    let cyrillic = Arc::new(cyrillic);
    let rhymes = RhymeResolver::new(latin.clone(), cyrillic.clone());
    let names = NameResolver::new(test_catalog());
    let router = CommandRouter::new('.', CommandAliases::standard().unwrap(), rhymes, names);
    Fixture {
        router,
        latin,
        cyrillic,
    }
}
