//! Word solving command
//!
//! Plays a solver against a known answer and returns the solution path.

use crate::core::{Pattern, Word};
use crate::solver::{Solver, SolverError};

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: Word,
    /// Why the solver stopped suggesting before solving, if it did
    pub gave_up: Option<SolverError>,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve `target` by feeding the solver the oracle's feedback for each suggestion
///
/// Runs until the puzzle is solved, the solver runs out of guesses, or it has no
/// suggestion left.
///
/// # Errors
///
/// Returns `SolverError::UnknownGuess` if the target is not an accepted guess of the
/// solver's lexicon.
pub fn solve_word(mut solver: Solver<'_>, target: &Word) -> Result<SolveResult, SolverError> {
    if !solver.lexicon().is_accepted(target) {
        return Err(SolverError::UnknownGuess(target.clone()));
    }

    let mut guesses = Vec::new();
    let mut gave_up = None;

    loop {
        let guess = match solver.next_guess() {
            Ok(guess) => guess,
            Err(SolverError::GameOver(_)) => break,
            Err(err) => {
                gave_up = Some(err);
                break;
            }
        };

        let candidates_before = solver.candidates().len();
        let pattern = Pattern::calculate(guess, target);
        solver.record_guess(guess, pattern)?;

        guesses.push(GuessStep {
            word: guess.clone(),
            pattern,
            candidates_before,
            candidates_after: solver.candidates().len(),
        });

        if pattern.is_perfect() {
            break;
        }
    }

    let success = guesses.last().is_some_and(|step| step.pattern.is_perfect());
    Ok(SolveResult {
        success,
        guesses,
        target: target.clone(),
        gave_up,
    })
}
