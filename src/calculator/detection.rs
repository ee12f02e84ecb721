//! Key-sequence detection for typed input.
//!
//! Turns a line of text such as `12 + 3 =` or `12+3=` into keypad keys.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use super::error::{CalcError, Result};
use super::keys::Key;

lazy_static! {
    /// Matches strings built only from keypad characters.
    static ref KEYPAD_CHARS: Regex = Regex::new(
        r"^[\d\s\.\+\-−\*/×÷x=%±acAC]+$"
    ).unwrap();

    /// Matches one key inside a run of glued keys.
    /// Multi-character labels come first so `+/-` wins over `+`. The word
    /// aliases `c`, `+-` and `neg` are left out: `5+-3` reads as `5 + - 3`.
    static ref KEY_TOKEN: Regex = Regex::new(
        r"(?i)ac|\+/-|[0-9.]|[-−+×÷*/x=%±]"
    ).unwrap();
}

/// Check if input looks like a sequence of keypad keys.
///
/// This is a fast pre-check; [`tokenize_keys`] still decides.
pub fn looks_like_key_sequence(input: &str) -> bool {
    let trimmed = input.trim();
    !trimmed.is_empty() && KEYPAD_CHARS.is_match(trimmed)
}

/// Split a line into keys using the built-in alphabet.
pub fn tokenize_keys(input: &str) -> Result<Vec<Key>> {
    KeyParser::default().tokenize(input)
}

/// Parser for typed key sequences, with optional user aliases.
#[derive(Clone, Debug, Default)]
pub struct KeyParser {
    aliases: HashMap<String, Key>,
}

impl KeyParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an alias word for a key. The word must be a single token.
    pub fn with_alias(mut self, word: impl Into<String>, key: Key) -> Result<Self> {
        let word = word.into();
        if word.is_empty() || word.chars().any(char::is_whitespace) {
            return Err(CalcError::invalid_alias(word, "must be a single word"));
        }
        self.aliases.insert(word.to_lowercase(), key);
        Ok(self)
    }

    /// Split a line into keys.
    ///
    /// Each whitespace-separated word is an alias, a single key, or a run of
    /// glued keys. The whole line fails if any part is not a key.
    pub fn tokenize(&self, input: &str) -> Result<Vec<Key>> {
        let mut keys = Vec::new();
        for word in input.split_whitespace() {
            if let Some(key) = self.aliases.get(&word.to_lowercase()) {
                keys.push(*key);
                continue;
            }
            if let Ok(key) = word.parse::<Key>() {
                keys.push(key);
                continue;
            }
            scan_glued(word, &mut keys)?;
        }
        Ok(keys)
    }
}

/// Scan a word made of several keys written without spaces.
fn scan_glued(word: &str, keys: &mut Vec<Key>) -> Result<()> {
    let mut end = 0;
    for m in KEY_TOKEN.find_iter(word) {
        if m.start() != end {
            return Err(CalcError::unknown_key(&word[end..]));
        }
        keys.push(m.as_str().parse()?);
        end = m.end();
    }

    if end != word.len() {
        return Err(CalcError::unknown_key(&word[end..]));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::keys::{BinaryOperator, DigitKey, UnaryOperator};

    #[test]
    fn test_spaced_keys() {
        let keys = tokenize_keys("1 + 2 =").unwrap();
        assert_eq!(
            keys,
            vec![
                Key::Digit(DigitKey::One),
                Key::Binary(BinaryOperator::Add),
                Key::Digit(DigitKey::Two),
                Key::Binary(BinaryOperator::Equal),
            ]
        );
    }

    #[test]
    fn test_glued_keys() {
        let keys = tokenize_keys("12+3=").unwrap();
        assert_eq!(keys.len(), 5);
        assert_eq!(keys[2], Key::Binary(BinaryOperator::Add));

        let keys = tokenize_keys("9+/-").unwrap();
        assert_eq!(
            keys,
            vec![
                Key::Digit(DigitKey::Nine),
                Key::Unary(UnaryOperator::ReverseSign)
            ]
        );

        let keys = tokenize_keys("2*3/4").unwrap();
        assert_eq!(keys[1], Key::Binary(BinaryOperator::Multiply));
        assert_eq!(keys[3], Key::Binary(BinaryOperator::Divide));
    }

    #[test]
    fn test_words_and_labels() {
        let keys = tokenize_keys("AC 5 %").unwrap();
        assert_eq!(keys[0], Key::Unary(UnaryOperator::AllClear));
        assert_eq!(keys[2], Key::Unary(UnaryOperator::Percentage));
    }

    #[test]
    fn test_unknown_rejected() {
        assert!(tokenize_keys("1 + two").is_err());
        assert!(tokenize_keys("sqrt(4)").is_err());
        assert!(tokenize_keys("12&3").is_err());
    }

    #[test]
    fn test_word_aliases_need_spaces() {
        let keys = tokenize_keys("9 +-").unwrap();
        assert_eq!(keys[1], Key::Unary(UnaryOperator::ReverseSign));
        let keys = tokenize_keys("5 c").unwrap();
        assert_eq!(keys[1], Key::Unary(UnaryOperator::AllClear));

        let keys = tokenize_keys("9+-").unwrap();
        assert_eq!(
            keys,
            vec![
                Key::Digit(DigitKey::Nine),
                Key::Binary(BinaryOperator::Add),
                Key::Binary(BinaryOperator::Subtract),
            ]
        );
        assert!(tokenize_keys("5c").is_err());
        assert!(tokenize_keys("5neg").is_err());
    }

    #[test]
    fn test_empty_line() {
        assert!(tokenize_keys("").unwrap().is_empty());
        assert!(tokenize_keys("   ").unwrap().is_empty());
    }

    #[test]
    fn test_aliases() {
        let parser = KeyParser::new()
            .with_alias("plus", Key::Binary(BinaryOperator::Add))
            .unwrap()
            .with_alias("Enter", Key::Binary(BinaryOperator::Equal))
            .unwrap();
        let keys = parser.tokenize("1 PLUS 1 enter").unwrap();
        assert_eq!(keys[1], Key::Binary(BinaryOperator::Add));
        assert_eq!(keys[3], Key::Binary(BinaryOperator::Equal));

        assert!(
            KeyParser::new()
                .with_alias("two words", Key::Digit(DigitKey::Two))
                .is_err()
        );
    }

    #[test]
    fn test_looks_like_key_sequence() {
        assert!(looks_like_key_sequence("1 + 2 ="));
        assert!(looks_like_key_sequence("12×3"));
        assert!(looks_like_key_sequence("AC"));
        assert!(!looks_like_key_sequence(""));
        assert!(!looks_like_key_sequence("quit"));
        assert!(!looks_like_key_sequence("hello world"));
    }
}
