//! Guess selection strategies
//!
//! A strategy is plain data read by the one generic [`Solver`](super::Solver): fixed
//! opening words, overrides keyed on the exact history, how long to explore with
//! the whole guess list, and when to narrow candidates to the possible answers.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Ordered (guess, feedback) pairs of a session so far
pub type History = Vec<(Word, Pattern)>;

/// Named presets accepted by [`Strategy::from_name`]
pub const PRESETS: &[&str] = &[
    "eager",
    "ignore-earliest",
    "audio",
    "audio-lefty",
    "two-cover",
    "three-cover",
];

/// Configuration for a solver
///
/// # Examples
/// ```
/// use wordle_cover::solver::Strategy;
///
/// let strategy = Strategy::from_name("three-cover").unwrap().with_narrow_after(Some(3));
/// let opening: Vec<&str> = strategy.opening().iter().map(|w| w.text()).collect();
///
/// assert_eq!(opening, ["LYRIC", "UPSET", "NOMAD"]);
/// assert_eq!(strategy.narrow_after(), Some(3));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Strategy {
    name: String,
    opening: Vec<Word>,
    overrides: FxHashMap<History, Word>,
    explore_turns: usize,
    narrow_after: Option<usize>,
}

impl Strategy {
    /// Always guess the best-scoring remaining candidate
    #[must_use]
    pub fn eager() -> Self {
        Self {
            name: "eager".to_string(),
            ..Self::default()
        }
    }

    /// Create strategy from name string
    ///
    /// Supported names are listed in [`PRESETS`]. Returns `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let strategy = match name {
            "eager" => Self::eager(),
            "ignore-earliest" => Self::eager().with_explore_turns(2),
            "audio" => Self::eager().with_opening(&["AUDIO"]),
            "audio-lefty" => Self::eager().with_opening(&["AUDIO", "LEFTY"]),
            "two-cover" => Self::eager().with_opening(&["STARN", "LOUIE"]),
            "three-cover" => Self::eager().with_opening(&["LYRIC", "UPSET", "NOMAD"]),
            _ => return None,
        };
        Some(strategy.named(name))
    }

    fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Guess these words, in order, on the first turns
    ///
    /// Entries that are not valid words are skipped.
    #[must_use]
    pub fn with_opening(mut self, words: &[&str]) -> Self {
        self.opening = words.iter().filter_map(|w| Word::new(*w).ok()).collect();
        self
    }

    /// Force `guess` whenever the history is exactly `history`
    #[must_use]
    pub fn with_override(mut self, history: History, guess: Word) -> Self {
        self.overrides.insert(history, guess);
        self
    }

    /// Rank every accepted guess, not just the candidates, for the first `turns` guesses
    #[must_use]
    pub const fn with_explore_turns(mut self, turns: usize) -> Self {
        self.explore_turns = turns;
        self
    }

    /// Restrict candidates to possible answers once `turn` guesses are recorded
    #[must_use]
    pub const fn with_narrow_after(mut self, turn: Option<usize>) -> Self {
        self.narrow_after = turn;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn opening(&self) -> &[Word] {
        &self.opening
    }

    /// The forced guess for exactly this history, if any
    #[must_use]
    pub fn override_for(&self, history: &[(Word, Pattern)]) -> Option<&Word> {
        self.overrides.get(history)
    }

    /// Every forced guess in the override table
    pub fn override_guesses(&self) -> impl Iterator<Item = &Word> {
        self.overrides.values()
    }

    #[must_use]
    pub const fn explore_turns(&self) -> usize {
        self.explore_turns
    }

    #[must_use]
    pub const fn narrow_after(&self) -> Option<usize> {
        self.narrow_after
    }
}
