//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_check_result, print_neighbors_result, print_solve_result,
};
