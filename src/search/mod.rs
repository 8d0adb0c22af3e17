//! Word ladder search
//!
//! Breadth-first search over the one-character-edit graph of a dictionary.
//! A [`LadderSolver`] validates requests and hands each one its own
//! [`Search`], which builds a [`SearchTree`] level by level.

mod engine;
mod error;
mod tree;

pub use engine::{Ladder, LadderSolver, Prepared, Search, SearchState, SearchStats};
pub use error::LadderError;
pub use tree::{NodeId, SearchNode, SearchTree};
