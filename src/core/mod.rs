//! Core domain types for word ladders
//!
//! Words, the one-character adjacency test, and the visited set a search
//! keeps. Everything here is pure and independent of where words come from.

mod adjacency;
mod visited;
mod word;

pub use adjacency::is_one_character_off;
pub(crate) use adjacency::keys_one_off;
pub use visited::VisitedSet;
pub use word::{Word, WordError, fold};
