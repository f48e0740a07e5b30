//! Highest-coverage word selection

use super::table::LetterFrequencies;
use crate::core::Word;
use rayon::prelude::*;
use std::cmp::Reverse;

/// Select the word with the highest letter-coverage score
///
/// Ties go to the word that comes first in `pool`. Returns the winning word and its
/// score, or `None` if the pool is empty.
///
/// # Examples
/// ```
/// use wordle_cover::core::Word;
/// use wordle_cover::solver::frequency::{LetterFrequencies, select_best_word};
///
/// let words = vec![
///     Word::new("fuzzy").unwrap(),
///     Word::new("crane").unwrap(),
///     Word::new("trace").unwrap(),
/// ];
/// let refs: Vec<&Word> = words.iter().collect();
/// let table = LetterFrequencies::from_words(&words);
///
/// // CRANE and TRACE tie; CRANE comes first
/// let (best, _) = select_best_word(&refs, &table).unwrap();
/// assert_eq!(best.text(), "CRANE");
/// ```
#[must_use]
pub fn select_best_word<'a>(
    pool: &[&'a Word],
    table: &LetterFrequencies,
) -> Option<(&'a Word, u32)> {
    pool.par_iter()
        .enumerate()
        .map(|(index, &word)| (index, word, table.score_word(word)))
        .min_by_key(|&(index, _, score)| (Reverse(score), index))
        .map(|(_, word, score)| (word, score))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn selects_highest_score() {
        let list = words(&["aaaaa", "crane", "slate", "proxy"]);
        let refs: Vec<&Word> = list.iter().collect();
        let table = LetterFrequencies::from_words(&list);

        // A appears in three words, so CRANE (9) beats SLATE (8)
        let (best, score) = select_best_word(&refs, &table).unwrap();
        assert_eq!(best.text(), "CRANE");
        assert_eq!(score, 9);
    }

    #[test]
    fn ties_go_to_first_in_pool() {
        let list = words(&["crane", "trace", "nacre"]);
        let table = LetterFrequencies::from_words(&list);

        let forward: Vec<&Word> = list.iter().collect();
        let backward: Vec<&Word> = list.iter().rev().collect();

        assert_eq!(select_best_word(&forward, &table).unwrap().0.text(), "CRANE");
        assert_eq!(select_best_word(&backward, &table).unwrap().0.text(), "NACRE");
    }

    #[test]
    fn zero_scores_still_select_first() {
        let list = words(&["fuzzy", "jumpy"]);
        let refs: Vec<&Word> = list.iter().collect();
        let table = LetterFrequencies::from_words(&[]);

        let (best, score) = select_best_word(&refs, &table).unwrap();
        assert_eq!(best.text(), "FUZZY");
        assert_eq!(score, 0);
    }

    #[test]
    fn returns_none_on_empty_pool() {
        let table = LetterFrequencies::default();
        assert!(select_best_word(&[], &table).is_none());
    }
}
