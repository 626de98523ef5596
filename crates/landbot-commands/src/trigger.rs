//! Keyword trigger: a fixed reply to any message mentioning the word, command or not.

const TRIGGER_WORDS: &[&str] = &["bafta", "бафта"];

pub const TRIGGER_REPLY: &str = "*hahaa*";

/// The fixed reply if `text` contains a trigger word (case-insensitive, anywhere in the text).
pub fn trigger_reply(text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    TRIGGER_WORDS
        .iter()
        .any(|word| lowered.contains(word))
        .then_some(TRIGGER_REPLY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_fires_anywhere() {
        assert_eq!(trigger_reply("bafta!"), Some(TRIGGER_REPLY));
        assert_eq!(trigger_reply(".rh BAFTA"), Some(TRIGGER_REPLY));
        assert_eq!(trigger_reply("ей, Бафта"), Some(TRIGGER_REPLY));
        assert_eq!(trigger_reply("superbaftastic"), Some(TRIGGER_REPLY));
    }

    #[test]
    fn test_trigger_ignores_other_text() {
        assert_eq!(trigger_reply("baft a"), None);
        assert_eq!(trigger_reply(".rh robot"), None);
        assert_eq!(trigger_reply(""), None);
    }
}
