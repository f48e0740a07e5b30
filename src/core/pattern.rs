//! Wordle feedback pattern calculation and representation
//!
//! A pattern holds one hint per letter of a guess:
//! - `M` = Match (right letter, right position)
//! - `O` = Present (letter occurs in the answer, elsewhere)
//! - `X` = Absent (letter does not occur in the answer)
//!
//! The `MOX` string is the only external encoding of feedback.

use super::Word;
use super::word::WORD_LENGTH;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Hint {
    /// Letter and position are both correct
    Match,
    /// Letter is in the answer, but at a different position
    Present,
    /// Letter is not in the answer
    Absent,
}

impl Hint {
    /// The `MOX` symbol for this hint
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Match => 'M',
            Self::Present => 'O',
            Self::Absent => 'X',
        }
    }

    /// Parse a `MOX` symbol (case-insensitive)
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'M' | 'm' => Some(Self::Match),
            'O' | 'o' => Some(Self::Present),
            'X' | 'x' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Error type for feedback strings that are not five `MOX` symbols
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Pattern must be exactly 5 symbols, got {0}")]
    InvalidLength(usize),
    #[error("Invalid pattern symbol '{0}' (expected M, O or X)")]
    InvalidSymbol(char),
}

/// Feedback pattern for a Wordle guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern([Hint; WORD_LENGTH]);

impl Pattern {
    /// All matches (puzzle solved)
    pub const PERFECT: Self = Self([Hint::Match; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn hints(&self) -> &[Hint; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all `M`)
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// Each position is judged on its own: `M` if the letters are equal, otherwise `O`
    /// if the guessed letter occurs anywhere in the answer, otherwise `X`. Repeated
    /// letters are not budgeted against the answer's letter counts, so this can report
    /// more `O` hints than a stock Wordle board would. Solver tuning depends on this
    /// exact rule; keep it.
    ///
    /// # Examples
    /// ```
    /// use wordle_cover::core::{Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("trace").unwrap();
    /// assert_eq!(Pattern::calculate(&guess, &answer).to_string(), "OMMXM");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut hints = [Hint::Absent; WORD_LENGTH];

        for (hint, (&g, &a)) in hints.iter_mut().zip(guess.chars().iter().zip(answer.chars())) {
            *hint = if g == a {
                Hint::Match
            } else if answer.has_letter(g) {
                Hint::Present
            } else {
                Hint::Absent
            };
        }

        Self(hints)
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    /// Parse a string like `"OMXXM"` (case-insensitive, surrounding whitespace ignored)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.trim().chars().collect();

        if symbols.len() != WORD_LENGTH {
            return Err(PatternError::InvalidLength(symbols.len()));
        }

        let mut hints = [Hint::Absent; WORD_LENGTH];
        for (hint, &symbol) in hints.iter_mut().zip(&symbols) {
            *hint = Hint::from_symbol(symbol).ok_or(PatternError::InvalidSymbol(symbol))?;
        }

        Ok(Self(hints))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for hint in self.0 {
            write!(f, "{}", hint.symbol())?;
        }
        Ok(())
    }
}
