//! Word Ladder
//!
//! Finds the shortest chain of dictionary words from a start word to an end
//! word, changing exactly one letter per step.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::dictionary::Dictionary;
//! use word_ladder::search::LadderSolver;
//!
//! let dictionary = Dictionary::parse("COLD CORD CARD WARD WARM");
//! let solver = LadderSolver::new(&dictionary);
//!
//! let ladder = solver.transform("cold", "warm");
//! assert_eq!(ladder, ["cold", "CORD", "CARD", "WARD", "WARM"]);
//! ```

// Core domain types
pub mod core;

// Search engine
pub mod search;

// Word lists
pub mod dictionary;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
