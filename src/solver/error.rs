//! Solver state and error types

use crate::core::{PatternError, Word, WordError};
use std::fmt;
use thiserror::Error;

/// Where a solving session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverState {
    /// No guesses yet
    Fresh,
    /// At least one guess, not yet solved
    InProgress,
    /// The last feedback was all Match
    Solved,
    /// Six guesses made without solving
    Exhausted,
    /// No candidate is consistent with the recorded feedback
    Stuck,
}

impl SolverState {
    /// Whether the session accepts no further guesses
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted | Self::Stuck)
    }
}

impl fmt::Display for SolverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Fresh => "fresh",
            Self::InProgress => "in progress",
            Self::Solved => "solved",
            Self::Exhausted => "out of guesses",
            Self::Stuck => "stuck",
        };
        f.write_str(label)
    }
}

/// Error type for solver operations
///
/// Every variant is raised before the solver is touched, so a failed call leaves
/// its history and candidates unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("invalid guess: {0}")]
    InvalidGuess(#[from] WordError),
    #[error("{0} is not an accepted guess")]
    UnknownGuess(Word),
    #[error("invalid feedback: {0}")]
    InvalidPattern(#[from] PatternError),
    #[error("no candidates remain; earlier feedback may be wrong")]
    NoCandidatesRemain,
    #[error("no suggestion available")]
    NoSuggestionAvailable,
    #[error("game is over ({0})")]
    GameOver(SolverState),
}
