//! Command implementations

pub mod assist;
pub mod exhaust;
pub mod feedback;
pub mod openings;
pub mod solve;

pub use assist::run_assist;
pub use exhaust::{AnswerResult, ExhaustStatistics, run_exhaust};
pub use feedback::feedback;
pub use openings::{OpeningKind, OpeningsConfig, OpeningsResult, find_openings};
pub use solve::{GuessStep, SolveResult, solve_word};
