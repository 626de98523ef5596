//! End-to-end routing through [`landbot_commands::CommandRouter`] with recording providers.

mod common;

use common::{fixture, RecordingProvider};
use landbot_commands::names::NOT_FOUND_MESSAGE;
use landbot_commands::trigger::TRIGGER_REPLY;
use landbot_commands::{Command, CommandError, RhymeQuery, DEFAULT_MAX_RHYMES};

fn empty_fixture() -> common::Fixture {
    fixture(RecordingProvider::new("latin"), RecordingProvider::new("cyrillic"))
}

// --- parse ---

/// **Test: `.rh robot 3` is a rhyme command for "robot" capped at 3.**
#[test]
fn parse_rhyme_with_count() {
    let f = empty_fixture();
    assert_eq!(
        f.router.parse(".rh robot 3").unwrap(),
        Some(Command::Rhyme(RhymeQuery {
            term: "robot".to_string(),
            max_results: 3
        }))
    );
}

#[test]
fn parse_rhyme_default_count_and_lowercase() {
    let f = empty_fixture();
    assert_eq!(
        f.router.parse(".RHYME Robot").unwrap(),
        Some(Command::Rhyme(RhymeQuery {
            term: "robot".to_string(),
            max_results: DEFAULT_MAX_RHYMES
        }))
    );
}

/// **Test: Cyrillic command names are transliterated before alias lookup; arguments are not.**
#[test]
fn parse_cyrillic_command_name() {
    let f = empty_fixture();
    assert_eq!(
        f.router.parse(".римувай кон").unwrap(),
        Some(Command::Rhyme(RhymeQuery {
            term: "кон".to_string(),
            max_results: DEFAULT_MAX_RHYMES
        }))
    );
    assert_eq!(
        f.router.parse(".поздрав фми").unwrap(),
        Some(Command::Song("фми".to_string()))
    );
    assert_eq!(f.router.parse(".помощ").unwrap(), Some(Command::Help));
}

#[test]
fn parse_without_prefix_is_not_a_command() {
    let f = empty_fixture();
    assert_eq!(f.router.parse("rh robot").unwrap(), None);
    assert_eq!(f.router.parse("hello .rh robot").unwrap(), None);
    assert_eq!(f.router.parse("").unwrap(), None);
    assert_eq!(f.router.parse("   ").unwrap(), None);
}

#[test]
fn parse_unknown_command_is_not_a_command() {
    let f = empty_fixture();
    assert_eq!(f.router.parse(".dance").unwrap(), None);
    assert_eq!(f.router.parse(".").unwrap(), None);
}

#[test]
fn parse_rhyme_without_term_is_ignored() {
    let f = empty_fixture();
    assert_eq!(f.router.parse(".rh").unwrap(), None);
}

/// **Test: a non-integer or negative count is an input error, not a silent default.**
#[test]
fn parse_rhyme_with_bad_count_is_an_error() {
    let f = empty_fixture();
    let err = f.router.parse(".rhyme robot notanumber").unwrap_err();
    assert!(matches!(err, CommandError::InvalidCount { ref raw, .. } if raw == "notanumber"));
    assert!(f.router.parse(".rh robot -3").is_err());
}

#[test]
fn parse_test_help_and_link_families() {
    let f = empty_fixture();
    assert_eq!(f.router.parse(".ping").unwrap(), Some(Command::Test));
    assert_eq!(f.router.parse("..").unwrap(), Some(Command::Test));
    assert_eq!(f.router.parse(".?").unwrap(), Some(Command::Help));
    assert_eq!(f.router.parse(".song").unwrap(), Some(Command::RandomSong));
    assert_eq!(
        f.router.parse(".link   kon    live").unwrap(),
        Some(Command::Song("kon live".to_string()))
    );
}

// --- route ---

#[tokio::test]
async fn route_rhyme_uses_parsed_term_and_count() {
    let f = fixture(
        RecordingProvider::new("latin").answer("robot", &["abbot", "cabot", "sabot", "jabot"]),
        RecordingProvider::new("cyrillic"),
    );

    let reply = f.router.route(".rh robot 3").await.unwrap();

    assert_eq!(reply.as_deref(), Some("> abbot\n> cabot\n> sabot"));
    assert_eq!(f.latin.calls(), vec!["robot"]);
    assert!(f.cyrillic.calls().is_empty());
}

/// **Test: a count beyond the integer range shows every rhyme instead of failing.**
#[tokio::test]
async fn route_rhyme_with_huge_count_shows_all() {
    let f = fixture(
        RecordingProvider::new("latin").answer("robot", &["abbot", "cabot"]),
        RecordingProvider::new("cyrillic"),
    );

    assert_eq!(
        f.router.parse(".rh robot 99999999999999999999").unwrap(),
        Some(Command::Rhyme(RhymeQuery {
            term: "robot".to_string(),
            max_results: usize::MAX
        }))
    );
    let reply = f.router.route(".rh robot 99999999999999999999").await.unwrap();

    assert_eq!(reply.as_deref(), Some("> abbot\n> cabot"));
}

#[tokio::test]
async fn route_without_prefix_has_no_reply() {
    let f = empty_fixture();
    assert_eq!(f.router.route("rh robot").await.unwrap(), None);
    assert!(f.latin.calls().is_empty());
}

#[tokio::test]
async fn route_song_queries() {
    let f = empty_fixture();
    assert_eq!(f.router.route(".l alpha").await.unwrap().as_deref(), Some("u1"));
    assert_eq!(f.router.route(".поздрав фми").await.unwrap().as_deref(), Some("u3"));
    assert_eq!(
        f.router.route(".song a").await.unwrap().as_deref(),
        Some("Може би имахте предвид:\n[alpha](u1)\n[beta](u2)")
    );
    assert_eq!(
        f.router.route(".song nothing here").await.unwrap().as_deref(),
        Some(NOT_FOUND_MESSAGE)
    );
}

#[tokio::test]
async fn route_random_song_and_quote_come_from_catalog() {
    let f = empty_fixture();

    let url = f.router.route(".песен").await.unwrap().unwrap();
    assert!(["u1", "u2", "u3"].contains(&url.as_str()));

    let quote = f.router.route(".test").await.unwrap().unwrap();
    assert!(["quote one", "quote two"].contains(&quote.as_str()));
}

#[tokio::test]
async fn route_help_uses_prefix() {
    let f = empty_fixture();
    let help = f.router.route(".help").await.unwrap().unwrap();
    assert!(help.contains("`.rhyme robot 22`"));
    assert!(!help.contains("{p}"));
    assert!(help.contains("https://allexks.github.io/landbot/"));
}

// --- respond ---

/// **Test: the trigger reply fires without a command prefix.**
#[tokio::test]
async fn respond_trigger_without_command() {
    let f = empty_fixture();
    assert_eq!(f.router.respond("bafta!").await.unwrap(), vec![TRIGGER_REPLY]);
    assert!(f.router.respond("hello").await.unwrap().is_empty());
}

#[tokio::test]
async fn respond_trigger_then_command() {
    let f = empty_fixture();
    let replies = f.router.respond(".l alpha bafta").await.unwrap();
    assert_eq!(replies, vec![TRIGGER_REPLY.to_string(), NOT_FOUND_MESSAGE.to_string()]);
}
