//! Error types for engine configuration and command parsing.

use thiserror::Error;

use crate::aliases::CommandKind;

/// Invalid command alias tables. Raised at startup.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AliasError {
    #[error("alias {token:?} is claimed by both {first:?} and {second:?}")]
    Overlap {
        token: String,
        first: CommandKind,
        second: CommandKind,
    },

    #[error("command family {0:?} has an empty alias")]
    EmptyAlias(CommandKind),

    #[error("command family {0:?} has no aliases")]
    EmptyFamily(CommandKind),
}

/// Invalid song catalog. Raised when loading.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("song #{0} has no names")]
    NoNames(usize),

    #[error("song #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("song {0:?} has an empty url")]
    EmptyUrl(String),

    #[error("canonical name {0:?} is used by more than one song")]
    DuplicateCanonical(String),
}

/// A recognized command with an unusable argument.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("invalid rhyme count {raw:?}: {source}")]
    InvalidCount {
        raw: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
