//! Feedback command

use crate::core::{Pattern, Word, WordError};

/// The pattern shown for `guess` when the answer is `answer`
///
/// # Errors
///
/// Returns `WordError` if either input is not a 5-letter word.
pub fn feedback(guess: &str, answer: &str) -> Result<(Word, Pattern), WordError> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    let pattern = Pattern::calculate(&guess, &answer);
    Ok((guess, pattern))
}
