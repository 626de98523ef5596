//! Provider selection and fallback behavior of [`landbot_commands::RhymeResolver`].

mod common;

use std::sync::Arc;

use common::RecordingProvider;
use landbot_commands::rhymes::NO_RHYME_MESSAGE;
use landbot_commands::RhymeResolver;

fn resolver(latin: &Arc<RecordingProvider>, cyrillic: &Arc<RecordingProvider>) -> RhymeResolver {
    RhymeResolver::new(latin.clone(), cyrillic.clone())
}

/// **Test: a Cyrillic term goes only to the Cyrillic provider, with no fallback.**
#[tokio::test]
async fn cyrillic_term_queries_only_cyrillic_provider() {
    let latin = Arc::new(RecordingProvider::new("latin").answer("кон", &["wrong"]));
    let cyrillic = Arc::new(RecordingProvider::new("cyrillic").answer("кон", &["слон", "балкон"]));

    let reply = resolver(&latin, &cyrillic).resolve("кон", 10).await;

    assert_eq!(reply, "> слон\n> балкон");
    assert!(latin.calls().is_empty());
    assert_eq!(cyrillic.calls(), vec!["кон"]);
}

/// **Test: a Cyrillic term with no rhymes does not fall back to the Latin provider.**
#[tokio::test]
async fn empty_cyrillic_result_has_no_fallback() {
    let latin = Arc::new(RecordingProvider::new("latin"));
    let cyrillic = Arc::new(RecordingProvider::new("cyrillic"));

    let reply = resolver(&latin, &cyrillic).resolve("ъъъ", 10).await;

    assert_eq!(reply, NO_RHYME_MESSAGE);
    assert!(latin.calls().is_empty());
    assert_eq!(cyrillic.calls().len(), 1);
}

/// **Test: a Latin term answered by the Latin provider never reaches the Cyrillic provider.**
#[tokio::test]
async fn latin_hit_skips_fallback() {
    let latin = Arc::new(RecordingProvider::new("latin").answer("robot", &["abbot", "cabot", "sabot"]));
    let cyrillic = Arc::new(RecordingProvider::new("cyrillic"));

    let reply = resolver(&latin, &cyrillic).resolve("robot", 2).await;

    assert_eq!(reply, "> abbot\n> cabot");
    assert_eq!(latin.calls(), vec!["robot"]);
    assert!(cyrillic.calls().is_empty());
}

/// **Test: a Latin miss retries exactly once against the Cyrillic provider with the transliterated term.**
#[tokio::test]
async fn latin_miss_falls_back_once_with_transliteration() {
    let latin = Arc::new(RecordingProvider::new("latin"));
    let cyrillic = Arc::new(RecordingProvider::new("cyrillic").answer("маимуница", &["улица", "столица"]));

    let reply = resolver(&latin, &cyrillic).resolve("maimunitsa", 10).await;

    assert_eq!(reply, "> улица\n> столица");
    assert_eq!(latin.calls(), vec!["maimunitsa"]);
    assert_eq!(cyrillic.calls(), vec!["маимуница"]);
}

/// **Test: both providers empty gives the fixed message, after one call each.**
#[tokio::test]
async fn both_empty_returns_fixed_message() {
    let latin = Arc::new(RecordingProvider::new("latin"));
    let cyrillic = Arc::new(RecordingProvider::new("cyrillic"));

    let reply = resolver(&latin, &cyrillic).resolve("xyzzy123", 10).await;

    assert_eq!(reply, NO_RHYME_MESSAGE);
    assert_eq!(latin.calls().len(), 1);
    assert_eq!(cyrillic.calls().len(), 1);
}

/// **Test: max_results = 0 always yields the fixed message, even with rhymes available.**
#[tokio::test]
async fn zero_max_results_returns_fixed_message() {
    let latin = Arc::new(RecordingProvider::new("latin").answer("robot", &["abbot"]));
    let cyrillic = Arc::new(RecordingProvider::new("cyrillic").answer("кон", &["слон"]));
    let resolver = resolver(&latin, &cyrillic);

    assert_eq!(resolver.resolve("robot", 0).await, NO_RHYME_MESSAGE);
    assert_eq!(resolver.resolve("кон", 0).await, NO_RHYME_MESSAGE);
}
