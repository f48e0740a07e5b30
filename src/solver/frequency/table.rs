//! Letter-frequency table and coverage scores
//!
//! The table counts, for each letter, how many reference words contain it at least
//! once. A word (or group of words) scores the sum of the counts of its distinct
//! letters, so letters shared within or across words are only counted once.

use crate::core::{LetterSet, Word};

/// Per-letter count of reference words containing that letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterFrequencies([u32; 26]);

impl LetterFrequencies {
    /// Build the table from a reference set of words
    ///
    /// # Examples
    /// ```
    /// use wordle_cover::core::Word;
    /// use wordle_cover::solver::frequency::LetterFrequencies;
    ///
    /// let words = [Word::new("speed").unwrap(), Word::new("erase").unwrap()];
    /// let table = LetterFrequencies::from_words(&words);
    ///
    /// // Each word counts once per letter, however often the letter repeats
    /// assert_eq!(table.count(b'E'), 2);
    /// assert_eq!(table.count(b'P'), 1);
    /// assert_eq!(table.count(b'Z'), 0);
    /// ```
    pub fn from_words<'w, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'w Word>,
    {
        let mut counts = [0u32; 26];
        for word in words {
            for letter in word.letters().iter() {
                counts[usize::from(letter - b'A')] += 1;
            }
        }
        Self(counts)
    }

    /// Number of reference words containing `letter`
    ///
    /// Returns 0 for bytes outside `A`-`Z`.
    #[must_use]
    pub fn count(&self, letter: u8) -> u32 {
        if letter.is_ascii_uppercase() {
            self.0[usize::from(letter - b'A')]
        } else {
            0
        }
    }

    /// Score a set of distinct letters
    #[must_use]
    pub fn score_letters(&self, letters: LetterSet) -> u32 {
        letters.iter().map(|letter| self.count(letter)).sum()
    }

    /// Score one word over its distinct letters
    #[must_use]
    pub fn score_word(&self, word: &Word) -> u32 {
        self.score_letters(word.letters())
    }

    /// Score several words over the union of their letters
    ///
    /// Never exceeds the sum of the individual word scores; equal to it only when
    /// the words share no letter.
    #[must_use]
    pub fn score_combination(&self, words: &[&Word]) -> u32 {
        self.score_letters(words.iter().map(|w| w.letters()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn reference() -> Vec<Word> {
        ["crane", "trace", "slate", "proxy", "speed"]
            .iter()
            .map(|w| word(w))
            .collect()
    }

    #[test]
    fn counts_are_per_word_not_per_occurrence() {
        let table = LetterFrequencies::from_words(&[word("speed"), word("eerie")]);
        assert_eq!(table.count(b'E'), 2);
        assert_eq!(table.count(b'R'), 1);
        assert_eq!(table.count(b'S'), 1);
    }

    #[test]
    fn counts_from_reference_set() {
        let table = LetterFrequencies::from_words(&reference());
        assert_eq!(table.count(b'A'), 3); // crane, trace, slate
        assert_eq!(table.count(b'E'), 4); // crane, trace, slate, speed
        assert_eq!(table.count(b'R'), 3); // crane, trace, proxy
        assert_eq!(table.count(b'X'), 1);
        assert_eq!(table.count(b'Q'), 0);
        assert_eq!(table.count(b'a'), 0);
    }

    #[test]
    fn empty_reference_scores_zero() {
        let table = LetterFrequencies::from_words(&[]);
        assert_eq!(table.score_word(&word("crane")), 0);
    }

    #[test]
    fn word_score_ignores_repeats() {
        let table = LetterFrequencies::from_words(&reference());
        // S=2 P=2 E=4 D=1; the second E adds nothing
        assert_eq!(table.score_word(&word("speed")), 9);
        assert_eq!(
            table.score_word(&word("speed")),
            table.score_word(&word("deeps"))
        );
    }

    #[test]
    fn combination_score_counts_shared_letters_once() {
        let table = LetterFrequencies::from_words(&reference());
        let crane = word("crane");
        let nacre = word("nacre");
        let trace = word("trace");

        // Anagrams: the union adds nothing over either word
        assert_eq!(
            table.score_combination(&[&crane, &nacre]),
            table.score_word(&crane)
        );
        // TRACE only adds T (2) over CRANE (13)
        assert_eq!(table.score_combination(&[&crane, &trace]), 15);
    }

    #[test]
    fn combination_score_bound() {
        let table = LetterFrequencies::from_words(&reference());
        let words: Vec<Word> = ["crane", "slate", "proxy", "lyric", "upset", "nomad"]
            .iter()
            .map(|w| word(w))
            .collect();

        for a in &words {
            for b in &words {
                let combined = table.score_combination(&[a, b]);
                let sum = table.score_word(a) + table.score_word(b);
                assert!(combined <= sum);
                if a.letters().is_disjoint(b.letters()) {
                    assert_eq!(combined, sum, "{a} and {b} share no letters");
                }
            }
        }

        // Shared letters with non-zero counts make the bound strict
        let crane = word("crane");
        let slate = word("slate");
        assert!(
            table.score_combination(&[&crane, &slate])
                < table.score_word(&crane) + table.score_word(&slate)
        );
    }
}
