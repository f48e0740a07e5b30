//! Wordle solving algorithms
//!
//! Letter-coverage scoring, the opening-sequence search, and the solver that
//! applies a [`Strategy`] over a session.

mod engine;
mod error;
pub mod frequency;
pub mod opening;
pub mod strategy;

pub use engine::{MAX_GUESSES, Solver};
pub use error::{SolverError, SolverState};
pub use strategy::{History, PRESETS, Strategy};
