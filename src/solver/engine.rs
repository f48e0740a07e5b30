//! Main Wordle solver interface

use super::error::{SolverError, SolverState};
use super::frequency::{LetterFrequencies, select_best_word};
use super::strategy::{History, Strategy};
use crate::core::{Pattern, Word, filter_consistent};
use crate::wordlists::Lexicon;
use log::{debug, info, warn};

/// Guesses allowed per session
pub const MAX_GUESSES: usize = 6;

/// Main Wordle solver
///
/// Holds one session: the recorded history and the words still consistent with
/// it. The candidate set only ever shrinks.
///
/// # Examples
/// ```
/// use wordle_cover::core::{Pattern, Word};
/// use wordle_cover::solver::{Solver, SolverState, Strategy};
/// use wordle_cover::wordlists::Lexicon;
///
/// let words: Vec<Word> = ["crane", "trace", "slate", "proxy"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let lexicon = Lexicon::new(words.clone(), words);
/// let mut solver = Solver::new(&lexicon, Strategy::eager()).unwrap();
///
/// solver.record_input("crane", "OMMXM").unwrap();
/// let guess = solver.suggest_guess().unwrap().clone();
/// assert_eq!(guess.text(), "TRACE");
///
/// solver.record_guess(&guess, Pattern::PERFECT).unwrap();
/// assert_eq!(solver.state(), SolverState::Solved);
/// assert!(solver.suggest_guess().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    lexicon: &'a Lexicon,
    strategy: Strategy,
    candidates: Vec<&'a Word>,
    history: History,
    narrowed: bool,
}

impl<'a> Solver<'a> {
    /// Create a solver over `lexicon`, starting from every accepted guess
    ///
    /// # Errors
    ///
    /// Returns `SolverError::UnknownGuess` if an opening or override word of the
    /// strategy is not an accepted guess.
    pub fn new(lexicon: &'a Lexicon, strategy: Strategy) -> Result<Self, SolverError> {
        if let Some(word) = strategy
            .opening()
            .iter()
            .chain(strategy.override_guesses())
            .find(|word| !lexicon.is_accepted(word))
        {
            return Err(SolverError::UnknownGuess(word.clone()));
        }

        let mut solver = Self {
            lexicon,
            strategy,
            candidates: lexicon.accepted_guesses().iter().collect(),
            history: Vec::new(),
            narrowed: false,
        };
        solver.narrow_if_due();
        Ok(solver)
    }

    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    #[must_use]
    pub const fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Words still consistent with every recorded guess
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, Pattern)] {
        &self.history
    }

    /// Number of guesses recorded so far
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn state(&self) -> SolverState {
        if self
            .history
            .last()
            .is_some_and(|(_, pattern)| pattern.is_perfect())
        {
            SolverState::Solved
        } else if self.candidates.is_empty() {
            SolverState::Stuck
        } else if self.history.len() >= MAX_GUESSES {
            SolverState::Exhausted
        } else if self.history.is_empty() {
            SolverState::Fresh
        } else {
            SolverState::InProgress
        }
    }

    /// The next guess, or `None` once the session is over
    #[must_use]
    pub fn suggest_guess(&self) -> Option<&'a Word> {
        self.next_guess().ok()
    }

    /// The next guess, or the reason there is none
    ///
    /// Overrides for the exact history come first, then the strategy's opening
    /// words, then the highest-coverage word scored against the candidates.
    ///
    /// # Errors
    ///
    /// Returns `NoCandidatesRemain` when stuck, `GameOver` after solving or running
    /// out of guesses, and `NoSuggestionAvailable` if the scorer has nothing to rank.
    pub fn next_guess(&self) -> Result<&'a Word, SolverError> {
        match self.state() {
            SolverState::Stuck => return Err(SolverError::NoCandidatesRemain),
            state @ (SolverState::Solved | SolverState::Exhausted) => {
                return Err(SolverError::GameOver(state));
            }
            SolverState::Fresh | SolverState::InProgress => {}
        }

        if let Some(word) = self
            .strategy
            .override_for(&self.history)
            .and_then(|word| self.lexicon.find(word))
        {
            debug!("Override for turn {}: {word}", self.turn() + 1);
            return Ok(word);
        }

        if let Some(word) = self
            .strategy
            .opening()
            .get(self.turn())
            .and_then(|word| self.lexicon.find(word))
        {
            return Ok(word);
        }

        let table = LetterFrequencies::from_words(self.candidates.iter().copied());
        let best = if self.turn() < self.strategy.explore_turns() {
            let pool: Vec<&'a Word> = self.lexicon.accepted_guesses().iter().collect();
            select_best_word(&pool, &table)
        } else {
            select_best_word(&self.candidates, &table)
        };

        best.map(|(word, _)| word)
            .ok_or(SolverError::NoSuggestionAvailable)
    }

    /// Record a guess and its feedback, shrinking the candidate set
    ///
    /// # Errors
    ///
    /// Returns `UnknownGuess` if `guess` is not an accepted guess, and the same
    /// terminal-state errors as [`next_guess`](Self::next_guess). The solver is
    /// unchanged on error.
    pub fn record_guess(&mut self, guess: &Word, pattern: Pattern) -> Result<(), SolverError> {
        match self.state() {
            SolverState::Stuck => return Err(SolverError::NoCandidatesRemain),
            state @ (SolverState::Solved | SolverState::Exhausted) => {
                return Err(SolverError::GameOver(state));
            }
            SolverState::Fresh | SolverState::InProgress => {}
        }
        if !self.lexicon.is_accepted(guess) {
            return Err(SolverError::UnknownGuess(guess.clone()));
        }

        let before = self.candidates.len();
        self.candidates = filter_consistent(&self.candidates, guess, pattern);
        self.history.push((guess.clone(), pattern));
        self.narrow_if_due();

        debug!(
            "Turn {}: {guess} {pattern} left {} of {before} candidates",
            self.turn(),
            self.candidates.len()
        );
        if self.candidates.is_empty() {
            warn!("No candidates remain after {guess} {pattern}");
        }
        Ok(())
    }

    /// Parse and record a typed guess and `MOX` feedback string
    ///
    /// # Errors
    ///
    /// Returns `InvalidGuess` or `InvalidPattern` for malformed input, otherwise
    /// whatever [`record_guess`](Self::record_guess) returns.
    pub fn record_input(&mut self, guess: &str, pattern: &str) -> Result<(), SolverError> {
        let guess = Word::new(guess.trim())?;
        let pattern: Pattern = pattern.parse()?;
        self.record_guess(&guess, pattern)
    }

    fn narrow_if_due(&mut self) {
        let due = self
            .strategy
            .narrow_after()
            .is_some_and(|turn| self.history.len() >= turn);
        if self.narrowed || !due {
            return;
        }

        let lexicon = self.lexicon;
        self.candidates.retain(|word| lexicon.is_possible_answer(word));
        self.narrowed = true;
        info!(
            "Narrowed to possible answers after {} guesses: {} candidates",
            self.history.len(),
            self.candidates.len()
        );
    }
}
