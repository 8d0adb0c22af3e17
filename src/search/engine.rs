//! Main word ladder search interface

use super::error::LadderError;
use super::tree::{NodeId, SearchTree};
use crate::core::{VisitedSet, Word, fold, is_one_character_off};
use crate::dictionary::{Dictionary, DictionaryStatus};
use rustc_hash::FxHashSet;

/// Counters describing how much work a search did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Levels of the tree that were expanded
    pub levels: usize,
    /// Nodes created, root included
    pub nodes: usize,
    /// Distinct words reached, start word included
    pub visited: usize,
}

/// A shortest ladder from a start word to an end word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladder {
    words: Vec<String>,
    stats: SearchStats,
}

impl Ladder {
    /// Words from start to end, inclusive
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    /// Number of single-character edits in the ladder
    #[must_use]
    pub fn steps(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Where a search stands after its latest expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// The frontier at this depth is waiting to be expanded
    Expanding { depth: usize },
    /// The end word was reached at this node
    Found(NodeId),
    /// Every reachable word was visited without reaching the end word
    Exhausted,
    /// The configured depth limit was hit first
    DepthLimitReached { depth: usize },
}

impl SearchState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Expanding { .. })
    }
}

/// One breadth-first ladder search
///
/// Owns its own tree and visited set; only the dictionary is shared. The
/// frontier is expanded one whole level at a time, and words found on a
/// level join the visited set only after that level is done, so every node
/// of a level sees the same set of available words.
pub struct Search<'d> {
    dictionary: &'d Dictionary,
    tree: SearchTree<'d>,
    visited: VisitedSet,
    frontier: Vec<NodeId>,
    start: String,
    end: String,
    target: String,
    max_depth: Option<usize>,
    state: SearchState,
    levels: usize,
}

impl<'d> Search<'d> {
    pub(crate) fn new(
        dictionary: &'d Dictionary,
        start: Word,
        end: &str,
        max_depth: Option<usize>,
    ) -> Self {
        let mut visited = VisitedSet::new();
        visited.insert_word(&start);

        Self {
            dictionary,
            start: start.text().to_string(),
            tree: SearchTree::new(start),
            visited,
            frontier: vec![NodeId::ROOT],
            end: end.trim().to_string(),
            target: fold(end),
            max_depth,
            state: SearchState::Expanding { depth: 0 },
            levels: 0,
        }
    }

    #[must_use]
    pub const fn state(&self) -> SearchState {
        self.state
    }

    #[must_use]
    pub const fn tree(&self) -> &SearchTree<'d> {
        &self.tree
    }

    #[must_use]
    pub const fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        SearchStats {
            levels: self.levels,
            nodes: self.tree.len(),
            visited: self.visited.len(),
        }
    }

    /// Dictionary words one character off `word` that this search has not
    /// reached yet
    #[must_use]
    pub fn candidates_one_off(&self, word: &str) -> Vec<&'d Word> {
        self.dictionary.candidates_one_off(word, &self.visited)
    }

    /// Expand the current frontier by one level
    ///
    /// Frontier nodes are expanded in the order they were created. A word
    /// reachable from several of them becomes a child of the first. As soon
    /// as a node produces the end word the search is `Found`; the node's
    /// remaining children are still recorded.
    pub fn step(&mut self) -> SearchState {
        let SearchState::Expanding { depth } = self.state else {
            return self.state;
        };
        if self.max_depth.is_some_and(|max| depth >= max) {
            tracing::debug!(depth, "depth limit reached");
            self.state = SearchState::DepthLimitReached { depth };
            return self.state;
        }

        let dictionary = self.dictionary;
        let frontier = std::mem::take(&mut self.frontier);
        let mut claimed: FxHashSet<&'d str> = FxHashSet::default();
        let mut next = Vec::new();
        let mut found = None;

        for parent in frontier {
            let candidates =
                dictionary.candidates_for_key(self.tree.node(parent).word().key(), &self.visited);

            let first_child = self.tree.len();
            for word in candidates {
                if !claimed.insert(word.key()) {
                    continue;
                }
                let child = self.tree.push_child(parent, word);
                next.push(child);
                if found.is_none() && word.key() == self.target {
                    found = Some(child);
                }
            }
            self.tree.set_children(parent, first_child..self.tree.len());

            if found.is_some() {
                break;
            }
        }

        for key in claimed {
            self.visited.insert_key(key);
        }
        self.levels += 1;

        self.state = if let Some(node) = found {
            tracing::debug!(depth = depth + 1, nodes = self.tree.len(), "end word found");
            SearchState::Found(node)
        } else if next.is_empty() {
            // The end word is never visited before it is found, so an empty
            // frontier is the only way a search runs out of words.
            tracing::debug!(
                visited = self.visited.len(),
                dictionary = dictionary.len(),
                "search space exhausted"
            );
            SearchState::Exhausted
        } else {
            tracing::trace!(depth = depth + 1, frontier = next.len(), "level expanded");
            self.frontier = next;
            SearchState::Expanding { depth: depth + 1 }
        };
        self.state
    }

    /// Expand until the search ends and return the ladder
    ///
    /// # Errors
    ///
    /// Returns `NoPathFound` if the search space runs out, or
    /// `DepthLimitReached` if the depth limit is hit first.
    pub fn run(mut self) -> Result<Ladder, LadderError> {
        loop {
            match self.step() {
                SearchState::Expanding { .. } => {}
                SearchState::Found(node) => {
                    return Ok(Ladder {
                        words: self.tree.path_to(node),
                        stats: self.stats(),
                    });
                }
                SearchState::Exhausted => {
                    return Err(LadderError::NoPathFound {
                        start: self.start,
                        end: self.end,
                    });
                }
                SearchState::DepthLimitReached { depth } => {
                    return Err(LadderError::DepthLimitReached { depth });
                }
            }
        }
    }
}

/// Word ladder solver bound to one dictionary
///
/// Cheap to copy and safe to share across threads; every call builds its own
/// [`Search`].
#[derive(Debug, Clone, Copy)]
pub struct LadderSolver<'d> {
    dictionary: &'d Dictionary,
    max_depth: Option<usize>,
}

impl<'d> LadderSolver<'d> {
    /// Create a solver over the given dictionary
    #[must_use]
    pub const fn new(dictionary: &'d Dictionary) -> Self {
        Self {
            dictionary,
            max_depth: None,
        }
    }

    /// Give up on ladders longer than `max_depth` steps
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    /// See [`Dictionary::is_valid`]
    #[must_use]
    pub fn is_valid(&self, word: &str) -> bool {
        self.dictionary.is_valid(word)
    }

    /// See [`is_one_character_off`](crate::core::is_one_character_off)
    #[must_use]
    #[allow(clippy::unused_self)] // Kept on the solver so callers need one handle
    pub fn is_one_character_off(&self, current: &str, compared_to: &str) -> bool {
        is_one_character_off(current, compared_to)
    }

    /// Every dictionary word one character off `word`
    ///
    /// Outside a search nothing has been visited yet, so nothing is excluded
    /// except `word` itself.
    #[must_use]
    pub fn candidates_one_off(&self, word: &str) -> Vec<&'d Word> {
        self.dictionary.candidates_one_off(word, &VisitedSet::new())
    }

    /// Shortest ladder from `initial` to `end`, or an empty vector
    ///
    /// Failures are logged and never abort the caller; see
    /// [`try_transform`](Self::try_transform) for the reason behind an empty
    /// result.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::dictionary::Dictionary;
    /// use word_ladder::search::LadderSolver;
    ///
    /// let solver = LadderSolver::new(Dictionary::embedded());
    /// assert_eq!(solver.transform("SMART", "STARK"), ["SMART", "START", "STARK"]);
    /// assert_eq!(solver.transform("pixel ", " PIXEL"), ["pixel"]);
    /// assert!(solver.transform("", "pixel").is_empty());
    /// ```
    #[must_use]
    pub fn transform(&self, initial: &str, end: &str) -> Vec<String> {
        match self.try_transform(initial, end) {
            Ok(ladder) => ladder.into_words(),
            Err(e @ LadderError::NoPathFound { .. }) => {
                tracing::info!(error = %e, "no transformation found");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "transform failed");
                Vec::new()
            }
        }
    }

    /// Shortest ladder from `initial` to `end`
    ///
    /// When the two words are the same word the ladder is just the trimmed
    /// `initial`, and no search runs.
    ///
    /// # Errors
    ///
    /// - `DictionaryUnavailable` if the dictionary source could not be read
    /// - `InvalidInput` if either word is blank or not in the dictionary
    /// - `LengthMismatch` if the words have different lengths
    /// - `NoPathFound` / `DepthLimitReached` from the search itself
    pub fn try_transform(&self, initial: &str, end: &str) -> Result<Ladder, LadderError> {
        let search = match self.search(initial, end)? {
            Prepared::Same(ladder) => return Ok(ladder),
            Prepared::Search(search) => search,
        };
        search.run()
    }

    /// Validate both words and set up a search between them
    ///
    /// # Errors
    ///
    /// Same validation errors as [`try_transform`](Self::try_transform).
    pub fn search(&self, initial: &str, end: &str) -> Result<Prepared<'d>, LadderError> {
        if let DictionaryStatus::Unavailable { reason } = self.dictionary.status() {
            return Err(LadderError::DictionaryUnavailable {
                reason: reason.clone(),
            });
        }
        for word in [initial, end] {
            if !self.is_valid(word) {
                return Err(LadderError::InvalidInput {
                    word: word.trim().to_string(),
                });
            }
        }

        let start = Word::new(initial).map_err(|_| LadderError::InvalidInput {
            word: String::new(),
        })?;
        let target = fold(end);

        if start.key() == target {
            tracing::debug!(word = start.text(), "start and end are the same word");
            return Ok(Prepared::Same(Ladder {
                words: vec![start.text().to_string()],
                stats: SearchStats {
                    levels: 0,
                    nodes: 1,
                    visited: 1,
                },
            }));
        }
        if start.len() != target.chars().count() {
            return Err(LadderError::LengthMismatch {
                start: start.text().to_string(),
                end: end.trim().to_string(),
            });
        }

        Ok(Prepared::Search(Search::new(
            self.dictionary,
            start,
            end,
            self.max_depth,
        )))
    }
}

/// A validated request, ready to answer
pub enum Prepared<'d> {
    /// Start and end are the same word; this is the whole ladder
    Same(Ladder),
    /// A search between two different words
    Search(Search<'d>),
}
