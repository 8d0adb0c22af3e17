//! Words already placed in a search tree

use super::word::{Word, fold};
use rustc_hash::FxHashSet;

/// Set of case-folded keys that a search has already reached
///
/// Owned by a single search. A word in the set is never offered as a
/// candidate again.
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    keys: FxHashSet<String>,
}

impl VisitedSet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record raw text as visited, returning false if it already was
    pub fn insert(&mut self, raw: &str) -> bool {
        self.keys.insert(fold(raw))
    }

    /// Record a word as visited, returning false if it already was
    pub fn insert_word(&mut self, word: &Word) -> bool {
        self.insert_key(word.key())
    }

    pub(crate) fn insert_key(&mut self, key: &str) -> bool {
        if self.keys.contains(key) {
            return false;
        }
        self.keys.insert(key.to_string())
    }

    /// Check whether raw text names a visited word
    #[must_use]
    pub fn contains(&self, raw: &str) -> bool {
        self.keys.contains(&fold(raw))
    }

    /// Check whether a word has been visited
    #[inline]
    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.keys.contains(word.key())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<'a> Extend<&'a Word> for VisitedSet {
    fn extend<I: IntoIterator<Item = &'a Word>>(&mut self, iter: I) {
        for word in iter {
            self.insert_word(word);
        }
    }
}
