//! # landbot-commands
//!
//! The command engine behind the chat bot. Turns one inbound message text into an optional
//! reply text:
//!
//! - [`router::CommandRouter`] tokenizes the message, matches the command name against
//!   [`aliases::CommandAliases`] and dispatches.
//! - [`rhymes::RhymeResolver`] picks a rhyme provider by [`script`] and retries once through the
//!   other provider after [`translit`] when a Latin term finds nothing.
//! - [`names::NameResolver`] maps a free-text name onto the [`catalog::SongCatalog`].
//! - [`trigger`] detects the keyword that earns a fixed reply on any message.
//!
//! All configuration objects are immutable after construction and shared by `Arc`.

pub mod aliases;
pub mod catalog;
pub mod error;
pub mod names;
pub mod rhymes;
pub mod router;
pub mod script;
pub mod translit;
pub mod trigger;

pub use aliases::{CommandAliases, CommandKind};
pub use catalog::{SongCatalog, SongEntry};
pub use error::{AliasError, CatalogError, CommandError};
pub use names::{MatchResult, NameResolver};
pub use rhymes::RhymeResolver;
pub use router::{Command, CommandRouter, RhymeQuery, DEFAULT_MAX_RHYMES};
pub use script::Script;
pub use translit::{transliterate, Direction};
