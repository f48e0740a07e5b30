//! Word lists for Wordle solving
//!
//! Provides embedded word lists compiled into the binary, file loading, and the
//! `Lexicon` that pairs the possible answers with the accepted guesses.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use log::info;
use rustc_hash::{FxHashMap, FxHashSet};
use std::io;
use std::path::Path;
use thiserror::Error;

/// Which word list an operation draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceSet {
    /// Only words that can be the answer
    PossibleAnswers,
    /// Every word the game accepts as a guess
    AcceptedGuesses,
}

/// Error type for building a lexicon
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("answer list contains no valid 5-letter words")]
    NoAnswers,
}

/// Immutable pair of word lists
///
/// Both lists are free of duplicates and every possible answer is also an accepted
/// guess.
#[derive(Debug, Clone)]
pub struct Lexicon {
    possible_answers: Vec<Word>,
    accepted_guesses: Vec<Word>,
    index: FxHashMap<Word, usize>,
    answers: FxHashSet<Word>,
}

impl Lexicon {
    /// Build a lexicon, deduplicating both lists in first-seen order
    ///
    /// Answers missing from `guesses` are appended to the accepted guesses.
    ///
    /// # Examples
    /// ```
    /// use wordle_cover::core::Word;
    /// use wordle_cover::wordlists::Lexicon;
    ///
    /// let words = |list: &[&str]| -> Vec<Word> {
    ///     list.iter().map(|w| Word::new(*w).unwrap()).collect()
    /// };
    /// let lexicon = Lexicon::new(words(&["trace", "crane"]), words(&["salet", "crane"]));
    ///
    /// assert_eq!(lexicon.possible_answers().len(), 2);
    /// assert_eq!(lexicon.accepted_guesses().len(), 3);
    /// assert!(lexicon.is_accepted(&Word::new("trace").unwrap()));
    /// ```
    #[must_use]
    pub fn new(answers: Vec<Word>, guesses: Vec<Word>) -> Self {
        let possible_answers = dedup(answers);
        let mut accepted_guesses = dedup(guesses);

        let known: FxHashSet<&Word> = accepted_guesses.iter().collect();
        let missing: Vec<Word> = possible_answers
            .iter()
            .filter(|answer| !known.contains(answer))
            .cloned()
            .collect();
        accepted_guesses.extend(missing);

        let index = accepted_guesses
            .iter()
            .enumerate()
            .map(|(i, word)| (word.clone(), i))
            .collect();
        let answers = possible_answers.iter().cloned().collect();

        Self {
            possible_answers,
            accepted_guesses,
            index,
            answers,
        }
    }

    /// The lexicon compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        let lexicon = Self::new(
            loader::words_from_slice(ANSWERS),
            loader::words_from_slice(ALLOWED),
        );
        info!(
            "Embedded lexicon: {} answers, {} accepted guesses",
            lexicon.possible_answers.len(),
            lexicon.accepted_guesses.len()
        );
        lexicon
    }

    /// Load a lexicon from word files
    ///
    /// Without a guess file the accepted guesses are the answers themselves.
    ///
    /// # Errors
    ///
    /// Returns `LexiconError` if a file cannot be read or the answer file has no
    /// valid words.
    pub fn from_files(answers: &Path, guesses: Option<&Path>) -> Result<Self, LexiconError> {
        let read = |path: &Path| {
            loader::load_from_file(path).map_err(|source| LexiconError::Io {
                path: path.display().to_string(),
                source,
            })
        };

        let answer_words = read(answers)?;
        if answer_words.is_empty() {
            return Err(LexiconError::NoAnswers);
        }
        let guess_words = guesses.map(read).transpose()?.unwrap_or_default();

        let lexicon = Self::new(answer_words, guess_words);
        info!(
            "Loaded lexicon: {} answers, {} accepted guesses",
            lexicon.possible_answers.len(),
            lexicon.accepted_guesses.len()
        );
        Ok(lexicon)
    }

    #[must_use]
    pub fn possible_answers(&self) -> &[Word] {
        &self.possible_answers
    }

    #[must_use]
    pub fn accepted_guesses(&self) -> &[Word] {
        &self.accepted_guesses
    }

    /// The word list named by `set`
    #[must_use]
    pub fn words(&self, set: ReferenceSet) -> &[Word] {
        match set {
            ReferenceSet::PossibleAnswers => &self.possible_answers,
            ReferenceSet::AcceptedGuesses => &self.accepted_guesses,
        }
    }

    /// Check whether `word` is an accepted guess
    #[must_use]
    pub fn is_accepted(&self, word: &Word) -> bool {
        self.index.contains_key(word)
    }

    /// Check whether `word` can be the answer
    #[must_use]
    pub fn is_possible_answer(&self, word: &Word) -> bool {
        self.answers.contains(word)
    }

    /// The lexicon's own copy of `word`, if it is an accepted guess
    #[must_use]
    pub fn find(&self, word: &Word) -> Option<&Word> {
        self.index.get(word).map(|&i| &self.accepted_guesses[i])
    }
}

fn dedup(words: Vec<Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    words
        .into_iter()
        .filter(|word| seen.insert(word.clone()))
        .collect()
}
