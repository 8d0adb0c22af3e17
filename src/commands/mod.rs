//! Command implementations

pub mod benchmark;
pub mod neighbors;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, pick_pairs, run_benchmark};
pub use neighbors::{CheckResult, NeighborsResult, OtherWord, check_words, find_neighbors};
pub use simple::run_simple;
pub use solve::{SolveConfig, SolveResult, solve_ladder};
