//! Ladder solving command
//!
//! Solves a single start/end pair and returns the ladder with timing.

use crate::dictionary::Dictionary;
use crate::search::{LadderError, LadderSolver, SearchStats};
use std::time::{Duration, Instant};

/// Configuration for solving a ladder
pub struct SolveConfig {
    pub start: String,
    pub end: String,
    pub max_depth: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            max_depth: None,
        }
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Result of solving a ladder
pub struct SolveResult {
    pub start: String,
    pub end: String,
    pub ladder: Vec<String>,
    pub stats: SearchStats,
    pub duration: Duration,
}

impl SolveResult {
    /// Number of single-letter changes in the ladder
    #[must_use]
    pub fn steps(&self) -> usize {
        self.ladder.len().saturating_sub(1)
    }
}

/// Solve one ladder against the given dictionary
///
/// # Errors
///
/// Returns an error if:
/// - Either word is blank or not in the dictionary
/// - The words differ in length
/// - No ladder exists, or none within the depth limit
/// - The dictionary could not be loaded
pub fn solve_ladder(
    config: SolveConfig,
    dictionary: &Dictionary,
) -> Result<SolveResult, LadderError> {
    let mut solver = LadderSolver::new(dictionary);
    if let Some(max_depth) = config.max_depth {
        solver = solver.with_max_depth(max_depth);
    }

    let start_time = Instant::now();
    let ladder = solver.try_transform(&config.start, &config.end)?;
    let duration = start_time.elapsed();

    Ok(SolveResult {
        start: config.start,
        end: config.end,
        stats: ladder.stats(),
        ladder: ladder.into_words(),
        duration,
    })
}
