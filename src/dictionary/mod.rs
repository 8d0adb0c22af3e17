//! Dictionary of valid ladder words
//!
//! Holds the words a ladder may step through, answers membership queries and
//! finds the one-character neighbours of a word. A dictionary is immutable
//! once built, so one instance can be shared by any number of searches.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

use crate::core::{VisitedSet, Word, fold, keys_one_off};
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Placeholder standing in for the wildcard position of a neighbour pattern
const WILDCARD: char = '\u{0}';

static EMBEDDED: Lazy<Dictionary> = Lazy::new(|| {
    tracing::debug!(entries = DICTIONARY_COUNT, "building embedded dictionary");
    Dictionary::from_words(DICTIONARY.iter().copied())
});

/// Whether the dictionary source could be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryStatus {
    /// Words were loaded (possibly zero of them)
    Loaded,
    /// The source could not be read; the dictionary is empty
    Unavailable { reason: String },
}

/// An ordered set of words with a neighbour index
///
/// Iteration order is the order words were first seen in the source, and
/// neighbour queries return words in that same order.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
    patterns: FxHashMap<String, Vec<usize>>,
    status: DictionaryStatus,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Entries are trimmed, blank entries are skipped and later duplicates
    /// (ignoring case) are dropped.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["COLD", "cord", " CARD", "Cold"]);
    /// assert_eq!(dictionary.len(), 3);
    /// assert!(dictionary.is_valid("card"));
    /// ```
    pub fn from_words<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut index = FxHashMap::default();

        for entry in entries {
            let Ok(word) = Word::new(entry.as_ref()) else {
                continue;
            };
            if index.contains_key(word.key()) {
                continue;
            }
            index.insert(word.key().to_string(), words.len());
            words.push(word);
        }

        let mut patterns: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        for (position, word) in words.iter().enumerate() {
            for pattern in wildcard_patterns(word.key()) {
                patterns.entry(pattern).or_default().push(position);
            }
        }

        Self {
            words,
            index,
            patterns,
            status: DictionaryStatus::Loaded,
        }
    }

    /// Parse a plain-text word list
    ///
    /// Entries may be separated by line breaks, blanks, or both.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::parse("SMART START\nSTARK\n\n  STACK  ");
    /// assert_eq!(dictionary.len(), 4);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.split_whitespace())
    }

    /// An empty dictionary recording why its source could not be read
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            words: Vec::new(),
            index: FxHashMap::default(),
            patterns: FxHashMap::default(),
            status: DictionaryStatus::Unavailable {
                reason: reason.into(),
            },
        }
    }

    /// The compiled-in default dictionary
    ///
    /// Built on first use and shared for the rest of the process.
    #[must_use]
    pub fn embedded() -> &'static Self {
        &EMBEDDED
    }

    #[must_use]
    pub const fn status(&self) -> &DictionaryStatus {
        &self.status
    }

    /// True when the source was read, even if it held no words
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self.status, DictionaryStatus::Loaded)
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate words in dictionary order
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// All words in dictionary order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Look up the dictionary's own spelling of a word
    #[must_use]
    pub fn get(&self, raw: &str) -> Option<&Word> {
        self.get_by_key(&fold(raw))
    }

    pub(crate) fn get_by_key(&self, key: &str) -> Option<&Word> {
        self.index.get(key).map(|&position| &self.words[position])
    }

    /// Check whether a word may appear in a ladder
    ///
    /// True iff the trimmed word is non-empty and matches an entry, ignoring
    /// case.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::embedded();
    /// assert!(dictionary.is_valid("pixel"));
    /// assert!(dictionary.is_valid(" PIxEL "));
    /// assert!(!dictionary.is_valid("eleven"));
    /// assert!(!dictionary.is_valid("   "));
    /// ```
    #[must_use]
    pub fn is_valid(&self, raw: &str) -> bool {
        let key = fold(raw);
        if key.is_empty() {
            tracing::warn!("blank word is never valid");
            return false;
        }
        self.index.contains_key(&key)
    }

    /// Find every word one character away from `raw` that is not excluded
    ///
    /// Results follow dictionary order, which decides which of several
    /// equally short ladders a search returns.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::VisitedSet;
    /// use word_ladder::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::parse("SMART START SPART STARK");
    /// let mut visited = VisitedSet::new();
    ///
    /// let found = dictionary.candidates_one_off("smart", &visited);
    /// assert_eq!(found.len(), 2);
    /// assert_eq!(found[0].text(), "START");
    /// assert_eq!(found[1].text(), "SPART");
    ///
    /// visited.insert("start");
    /// let found = dictionary.candidates_one_off("smart", &visited);
    /// assert_eq!(found.len(), 1);
    /// assert_eq!(found[0].text(), "SPART");
    /// ```
    #[must_use]
    pub fn candidates_one_off(&self, raw: &str, excluding: &VisitedSet) -> Vec<&Word> {
        let key = fold(raw);
        if key.is_empty() {
            tracing::warn!("blank word has no neighbours");
            return Vec::new();
        }
        self.candidates_for_key(&key, excluding)
    }

    /// Neighbours of an already-folded key, in dictionary order
    pub(crate) fn candidates_for_key(&self, key: &str, excluding: &VisitedSet) -> Vec<&Word> {
        let mut positions: Vec<usize> = wildcard_patterns(key)
            .filter_map(|pattern| self.patterns.get(&pattern))
            .flatten()
            .copied()
            .collect();
        positions.sort_unstable();
        positions.dedup();

        positions
            .into_iter()
            .map(|position| &self.words[position])
            .filter(|word| keys_one_off(key, word.key()) && !excluding.contains_word(word))
            .collect()
    }

    /// Count of words per length, shortest first
    #[must_use]
    pub fn lengths(&self) -> BTreeMap<usize, usize> {
        let mut lengths = BTreeMap::new();
        for word in &self.words {
            *lengths.entry(word.len()).or_insert(0) += 1;
        }
        lengths
    }

    /// Words of one length, in dictionary order
    pub fn of_length(&self, len: usize) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(move |word| word.len() == len)
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// One pattern per position, with that position replaced by the wildcard
///
/// Two keys of equal length are one character apart exactly when they share
/// one of these patterns and are not equal.
fn wildcard_patterns(key: &str) -> impl Iterator<Item = String> + '_ {
    let len = key.chars().count();
    (0..len).map(move |hole| {
        key.chars()
            .enumerate()
            .map(|(i, c)| if i == hole { WILDCARD } else { c })
            .collect()
    })
}
