//! Command families and their alias tokens.

use std::collections::HashMap;

use crate::error::AliasError;

/// Logical command a token can name. Declaration order is match precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Test,
    Rhyme,
    Help,
    Link,
}

/// Disjoint alias sets, one per [`CommandKind`]. Construction rejects overlaps, so lookup order
/// never decides the outcome.
#[derive(Debug, Clone)]
pub struct CommandAliases {
    families: Vec<(CommandKind, Vec<String>)>,
    index: HashMap<String, CommandKind>,
}

impl CommandAliases {
    /// Builds the alias table. Tokens are lowercased; a token claimed by two families, an empty
    /// token or an empty family is an error.
    pub fn new<I, S>(families: I) -> Result<Self, AliasError>
    where
        I: IntoIterator<Item = (CommandKind, Vec<S>)>,
        S: AsRef<str>,
    {
        let mut index = HashMap::new();
        let mut stored = Vec::new();
        for (kind, tokens) in families {
            if tokens.is_empty() {
                return Err(AliasError::EmptyFamily(kind));
            }
            let mut normalized = Vec::with_capacity(tokens.len());
            for token in tokens {
                let token = token.as_ref().trim().to_lowercase();
                if token.is_empty() {
                    return Err(AliasError::EmptyAlias(kind));
                }
                if let Some(&first) = index.get(&token) {
                    if first != kind {
                        return Err(AliasError::Overlap { token, first, second: kind });
                    }
                    continue;
                }
                index.insert(token.clone(), kind);
                normalized.push(token);
            }
            stored.push((kind, normalized));
        }
        Ok(Self { families: stored, index })
    }

    /// The bot's built-in command names, validated like any other table.
    pub fn standard() -> Result<Self, AliasError> {
        Self::new(vec![
            (CommandKind::Test, vec!["test", "t", ".", "ping", "pong"]),
            (
                CommandKind::Rhyme,
                vec!["rh", "rhyme", "rhymes", "rimi", "rima", "rimichki", "rimichka", "rimuvay"],
            ),
            (CommandKind::Help, vec!["help", "introduce", "h", "?", "pomosht"]),
            (
                CommandKind::Link,
                vec![
                    "l", "s", "yt", "link", "song", "pesen", "youtube", "pozdrav", "greetings",
                    "greet",
                ],
            ),
        ])
    }

    /// The family `token` belongs to, if any. `token` must already be lowercase.
    pub fn lookup(&self, token: &str) -> Option<CommandKind> {
        self.index.get(token).copied()
    }

    /// Aliases of one family, in declaration order.
    pub fn aliases(&self, kind: CommandKind) -> &[String] {
        self.families
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, tokens)| tokens.as_slice())
            .unwrap_or(&[])
    }
}
