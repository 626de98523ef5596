//! Message → command recognition and dispatch.
//!
//! A command is a message whose first whitespace-separated token starts with the prefix
//! character. The rest of that token is the command name; it is transliterated to Latin before
//! alias lookup so names typed in Cyrillic (`.римувай`) resolve like their Latin aliases.

use std::num::IntErrorKind;

use tracing::{debug, info};

use crate::aliases::{CommandAliases, CommandKind};
use crate::error::CommandError;
use crate::names::NameResolver;
use crate::rhymes::RhymeResolver;
use crate::translit::{transliterate, Direction};
use crate::trigger::trigger_reply;

pub const DEFAULT_MAX_RHYMES: usize = 10;

const HELP_TEMPLATE: &str = "И ето пак команда с '{p}' се задава.
LandBot-a я вижда и веднага отговаря.

Ето някои примери:
* `{p}rhyme robot`
Ще дам няколко рими на 'robot'.
* `{p}rhyme robot 22`
Ще дам най-много 22 рими на 'robot'.
* `{p}римувай кон`
Ще дам няколко рими на 'кон'.
* `{p}поздрав фми`
Ще пратя в чата песента 'ФМИ' (демек линк към YouTube видеото).
* `{p}link live`
Ще пратя всички лайв ландкор изгъзици.
* `{p}песен`
Ще пратя случайно-избрана песен.
* `{p}test`
Ще те разсмея. Може би. Нз. Ама при всеки случай ще разбереш дали съм онлайн.
* `{p}help`
Ще напиша това, което четеш сега.

Повече инфо винаги има тук: https://allexks.github.io/landbot/.
Очаква се да мога да правя и още неща в бъдеще.
Приятно ландкориране.";

/// Rhyme request: a single-token term and how many rhymes to show at most.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RhymeQuery {
    pub term: String,
    pub max_results: usize,
}

/// A recognized command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Test,
    Rhyme(RhymeQuery),
    Help,
    /// Link command with a name query (remaining tokens joined by single spaces).
    Song(String),
    /// Link command without arguments.
    RandomSong,
}

pub struct CommandRouter {
    prefix: char,
    aliases: CommandAliases,
    rhymes: RhymeResolver,
    names: NameResolver,
}

impl CommandRouter {
    pub fn new(prefix: char, aliases: CommandAliases, rhymes: RhymeResolver, names: NameResolver) -> Self {
        Self {
            prefix,
            aliases,
            rhymes,
            names,
        }
    }

    pub fn prefix(&self) -> char {
        self.prefix
    }

    pub fn rhymes(&self) -> &RhymeResolver {
        &self.rhymes
    }

    pub fn names(&self) -> &NameResolver {
        &self.names
    }

    /// Recognizes a command. `Ok(None)` covers both "not a command" and malformed commands
    /// (a rhyme command without a term); a non-numeric rhyme count is an error.
    pub fn parse(&self, text: &str) -> Result<Option<Command>, CommandError> {
        let lowered = text.to_lowercase();
        let mut tokens = lowered.split_whitespace();
        let Some(first) = tokens.next() else {
            return Ok(None);
        };
        let Some(name) = first.strip_prefix(self.prefix) else {
            return Ok(None);
        };
        let name = transliterate(name, Direction::ToLatin);
        let Some(kind) = self.aliases.lookup(&name) else {
            debug!(name = %name, "Unknown command name");
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let command = match kind {
            CommandKind::Test => Command::Test,
            CommandKind::Help => Command::Help,
            CommandKind::Rhyme => {
                let Some(term) = args.first() else {
                    debug!("Rhyme command without a term");
                    return Ok(None);
                };
                let max_results = match args.get(1) {
                    Some(raw) => parse_count(raw)?,
                    None => DEFAULT_MAX_RHYMES,
                };
                Command::Rhyme(RhymeQuery {
                    term: term.to_string(),
                    max_results,
                })
            }
            CommandKind::Link if args.is_empty() => Command::RandomSong,
            CommandKind::Link => Command::Song(args.join(" ")),
        };
        Ok(Some(command))
    }

    /// Reply text for a recognized command; `None` when the command has nothing to say.
    pub async fn dispatch(&self, command: Command) -> Option<String> {
        info!(command = ?command, "Dispatching command");
        let reply = match command {
            Command::Test => self.names.catalog().random_quote().map(str::to_string),
            Command::Rhyme(query) => Some(self.rhymes.resolve(&query.term, query.max_results).await),
            Command::Help => Some(self.help_text()),
            Command::Song(query) => Some(self.names.resolve(&query)),
            Command::RandomSong => self.names.catalog().random_url().map(str::to_string),
        };
        reply.filter(|text| !text.is_empty())
    }

    /// Parses and dispatches one message.
    pub async fn route(&self, text: &str) -> Result<Option<String>, CommandError> {
        match self.parse(text)? {
            Some(command) => Ok(self.dispatch(command).await),
            None => Ok(None),
        }
    }

    /// Every reply one message earns, in send order: the trigger reply, then the command reply.
    pub async fn respond(&self, text: &str) -> Result<Vec<String>, CommandError> {
        let mut replies = Vec::new();
        if let Some(reply) = trigger_reply(text) {
            replies.push(reply.to_string());
        }
        if let Some(reply) = self.route(text).await? {
            replies.push(reply);
        }
        Ok(replies)
    }

    pub fn help_text(&self) -> String {
        HELP_TEMPLATE.replace("{p}", &self.prefix.to_string())
    }
}

/// Counts too large for `usize` saturate; only non-integers and negatives are rejected.
fn parse_count(raw: &str) -> Result<usize, CommandError> {
    match raw.parse::<usize>() {
        Ok(count) => Ok(count),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(usize::MAX),
        Err(source) => Err(CommandError::InvalidCount {
            raw: raw.to_string(),
            source,
        }),
    }
}
