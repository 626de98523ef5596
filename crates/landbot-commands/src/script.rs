//! Writing-script detection for user input.

use unicode_script::{Script as UnicodeScriptKind, UnicodeScript};

/// The two scripts the bot distinguishes. Anything that is not Cyrillic counts as Latin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Latin,
    Cyrillic,
}

fn is_cyrillic(c: char) -> bool {
    c.script() == UnicodeScriptKind::Cyrillic
}

/// True if any character of `text` is Cyrillic.
pub fn contains_cyrillic(text: &str) -> bool {
    text.chars().any(is_cyrillic)
}

/// True if the first character of `text` is Cyrillic.
pub fn starts_with_cyrillic(text: &str) -> bool {
    text.chars().next().is_some_and(is_cyrillic)
}

/// Cyrillic if the text contains at least one Cyrillic character, otherwise Latin.
pub fn classify(text: &str) -> Script {
    if contains_cyrillic(text) {
        Script::Cyrillic
    } else {
        Script::Latin
    }
}
