//! Word ladder word representation
//!
//! A Word keeps the trimmed text as written alongside a case-folded key used
//! for every comparison.

use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// A dictionary word with its comparison key
///
/// Two words are the same word when their keys are equal, regardless of how
/// they were capitalised or padded.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    key: String,
    len: usize,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word is empty after trimming whitespace")]
    Empty,
}

/// Fold a raw string into its comparison key
///
/// Strips surrounding whitespace and lowercases every character.
///
/// # Examples
/// ```
/// use word_ladder::core::fold;
///
/// assert_eq!(fold("  PiXeL "), "pixel");
/// assert_eq!(fold("   "), "");
/// ```
#[must_use]
pub fn fold(raw: &str) -> String {
    raw.trim().chars().flat_map(char::to_lowercase).collect()
}

impl Word {
    /// Create a new Word from raw text
    ///
    /// # Errors
    /// Returns `WordError::Empty` if nothing is left after trimming.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new(" SMART ").unwrap();
    /// assert_eq!(word.text(), "SMART");
    /// assert_eq!(word.key(), "smart");
    ///
    /// assert!(Word::new("   ").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self, WordError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let key = fold(text);
        let len = key.chars().count();

        Ok(Self {
            text: text.to_string(),
            key,
            len,
        })
    }

    /// Get the trimmed text as originally written
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the case-folded comparison key
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Number of characters in the folded key
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false for a constructed Word
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check whether some raw text names this word
    #[must_use]
    pub fn matches(&self, raw: &str) -> bool {
        fold(raw) == self.key
    }

    /// Check whether this word is exactly one character away from another
    ///
    /// Same result as [`is_one_character_off`](super::is_one_character_off)
    /// without folding either side again.
    #[must_use]
    pub fn is_one_character_off(&self, other: &Self) -> bool {
        self.len == other.len && super::adjacency::keys_one_off(&self.key, &other.key)
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.key(), "crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_keeps_case_in_text() {
        let word = Word::new("CrAnE").unwrap();
        assert_eq!(word.text(), "CrAnE");
        assert_eq!(word.key(), "crane");
    }

    #[test]
    fn word_creation_trims() {
        let word = Word::new("\t pixel \n").unwrap();
        assert_eq!(word.text(), "pixel");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("     "), Err(WordError::Empty));
    }

    #[test]
    fn word_len_counts_characters() {
        let word = Word::new("café").unwrap();
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn word_matches_ignores_case_and_spacing() {
        let word = Word::new("SMART").unwrap();
        assert!(word.matches("smart"));
        assert!(word.matches(" Smart "));
        assert!(!word.matches("start"));
    }

    #[test]
    fn word_one_off() {
        let smart = Word::new("SMART").unwrap();
        let start = Word::new("start").unwrap();
        let stark = Word::new("STARK").unwrap();

        assert!(smart.is_one_character_off(&start));
        assert!(start.is_one_character_off(&stark));
        assert!(!smart.is_one_character_off(&stark));
        assert!(!smart.is_one_character_off(&smart));
    }

    #[test]
    fn word_display() {
        let word = Word::new(" BRAIN").unwrap();
        assert_eq!(format!("{word}"), "BRAIN");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("crane").unwrap();
        let word2 = Word::new("crane ").unwrap();
        let word3 = Word::new("CRANE").unwrap();
        let word4 = Word::new("slate").unwrap();

        assert_eq!(word1, word2);
        assert_eq!(word1, word3); // Case insensitive
        assert_ne!(word1, word4);
    }
}
