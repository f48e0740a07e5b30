//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_exhaust_statistics, print_feedback, print_openings_result, print_solve_result,
};
