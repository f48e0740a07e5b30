//! Consistency of candidate words with observed feedback
//!
//! A word is consistent with `(guess, pattern)` when, position by position:
//! - `M`: the word has the guessed letter at that position
//! - `O`: the word has a different letter there but contains the guessed letter
//! - `X`: the word does not contain the guessed letter at all

use super::{Hint, Pattern, Word};

/// Check whether `word` could be the answer given that `guess` produced `pattern`
///
/// Any violated position makes the whole check fail.
///
/// # Examples
/// ```
/// use wordle_cover::core::{Word, is_consistent};
///
/// let guess = Word::new("crane").unwrap();
/// let pattern = "OMMXM".parse().unwrap();
///
/// assert!(is_consistent(&Word::new("trace").unwrap(), &guess, pattern));
/// assert!(!is_consistent(&Word::new("crane").unwrap(), &guess, pattern));
/// ```
#[must_use]
pub fn is_consistent(word: &Word, guess: &Word, pattern: Pattern) -> bool {
    pattern
        .hints()
        .iter()
        .zip(guess.chars().iter().zip(word.chars()))
        .all(|(hint, (&g, &w))| match hint {
            Hint::Match => w == g,
            Hint::Present => w != g && word.has_letter(g),
            Hint::Absent => !word.has_letter(g),
        })
}

/// Keep the words consistent with `(guess, pattern)`, preserving their order
#[must_use]
pub fn filter_consistent<'w>(words: &[&'w Word], guess: &Word, pattern: Pattern) -> Vec<&'w Word> {
    words
        .iter()
        .copied()
        .filter(|word| is_consistent(word, guess, pattern))
        .collect()
}
