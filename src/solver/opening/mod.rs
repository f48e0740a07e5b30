//! Opening-sequence search
//!
//! Finds every 2-word or 3-word combination with the highest combined letter
//! coverage. Words are ranked by their own score, highest first, and the nested
//! loops stop as soon as the sum of the remaining individual scores cannot reach the
//! best combined score seen so far. The combined score of a union never exceeds the
//! sum of its parts, so the cut never drops a tuple that could tie or win.
//!
//! The outer loop runs in parallel. Workers share the best score found so far
//! through an atomic, and per-word results are merged in ranking order, so the
//! output is identical to a sequential run.

mod pairs;
mod triples;

use super::frequency::LetterFrequencies;
use crate::core::{LetterSet, Word};
use indicatif::ProgressBar;
use rustc_hash::FxHashSet;
use std::cmp::{Ordering, Reverse};
use std::sync::atomic::{AtomicU32, Ordering as AtomicOrdering};

/// All co-optimal opening tuples and their shared score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Openings<'w, const N: usize> {
    /// Combined distinct-letter score of every tuple
    pub score: u32,
    /// Tuples in search order (first word has the highest individual score)
    pub tuples: Vec<[&'w Word; N]>,
}

/// Configured opening-sequence search
///
/// # Examples
/// ```
/// use wordle_cover::core::Word;
/// use wordle_cover::solver::frequency::LetterFrequencies;
/// use wordle_cover::solver::opening::OpeningSearch;
///
/// let words: Vec<Word> = ["crane", "lousy", "trace", "slate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let refs: Vec<&Word> = words.iter().collect();
/// let table = LetterFrequencies::from_words(&words);
///
/// let best = OpeningSearch::new(&table).pairs(&refs);
/// assert_eq!(best.score, 19);
/// assert_eq!(best.tuples.len(), 1);
///
/// let [first, second] = best.tuples[0];
/// assert_eq!((first.text(), second.text()), ("TRACE", "LOUSY"));
/// ```
pub struct OpeningSearch<'t> {
    table: &'t LetterFrequencies,
    progress: Option<ProgressBar>,
}

impl<'t> OpeningSearch<'t> {
    /// Search using scores from `table`
    ///
    /// The table is usually built from a narrower reference set (the possible
    /// answers) than the candidates being combined.
    #[must_use]
    pub const fn new(table: &'t LetterFrequencies) -> Self {
        Self {
            table,
            progress: None,
        }
    }

    /// Report progress on `bar`, one tick per first word
    #[must_use]
    pub fn with_progress(mut self, bar: ProgressBar) -> Self {
        self.progress = Some(bar);
        self
    }

    /// Finish and clear the progress bar, if any
    pub fn finish(&self) {
        if let Some(bar) = &self.progress {
            bar.finish_and_clear();
        }
    }

    fn start(&self, len: usize) {
        if let Some(bar) = &self.progress {
            bar.set_length(len as u64);
            bar.set_position(0);
        }
    }

    fn tick(&self) {
        if let Some(bar) = &self.progress {
            bar.inc(1);
        }
    }
}

/// Best word pairs from `candidates`, scored with `table`
#[must_use]
pub fn best_pairs<'w>(candidates: &[&'w Word], table: &LetterFrequencies) -> Openings<'w, 2> {
    OpeningSearch::new(table).pairs(candidates)
}

/// Best word triples from `candidates`, scored with `table`
#[must_use]
pub fn best_triples<'w>(candidates: &[&'w Word], table: &LetterFrequencies) -> Openings<'w, 3> {
    OpeningSearch::new(table).triples(candidates)
}

/// A search item with its letter set and individual score
#[derive(Debug, Clone, Copy)]
struct Ranked<'w> {
    word: &'w Word,
    letters: LetterSet,
    score: u32,
}

/// Score words and sort them by score, highest first
///
/// The sort is stable, so equal scores keep their input order.
fn rank<'w>(words: &[&'w Word], table: &LetterFrequencies) -> Vec<Ranked<'w>> {
    let mut ranked: Vec<Ranked<'w>> = words
        .iter()
        .map(|&word| Ranked {
            word,
            letters: word.letters(),
            score: table.score_word(word),
        })
        .collect();
    ranked.sort_by_key(|r| Reverse(r.score));
    ranked
}

/// Keep the first word for each distinct letter set
///
/// Anagrams (and words differing only in repeated letters) cover exactly the same
/// letters, so one representative per letter set is enough for coverage search.
pub(crate) fn dedup_anagrams<'w>(words: &[&'w Word]) -> Vec<&'w Word> {
    let mut seen: FxHashSet<LetterSet> = FxHashSet::default();
    words
        .iter()
        .copied()
        .filter(|word| seen.insert(word.letters()))
        .collect()
}

/// Running maximum that keeps every tuple reaching it
#[derive(Debug)]
struct Best<T> {
    score: u32,
    tuples: Vec<T>,
}

impl<T> Best<T> {
    const fn new() -> Self {
        Self {
            score: 0,
            tuples: Vec::new(),
        }
    }

    /// Replace the list on a strictly higher score, extend it on an equal one
    fn offer(&mut self, score: u32, tuple: T) {
        match score.cmp(&self.score) {
            Ordering::Greater => {
                self.score = score;
                self.tuples.clear();
                self.tuples.push(tuple);
            }
            Ordering::Equal => self.tuples.push(tuple),
            Ordering::Less => {}
        }
    }

    /// Merge per-worker results, preserving their order
    fn merge(parts: Vec<Self>) -> Self {
        let score = parts.iter().map(|part| part.score).max().unwrap_or(0);
        let tuples = parts
            .into_iter()
            .filter(|part| part.score == score)
            .flat_map(|part| part.tuples)
            .collect();
        Self { score, tuples }
    }
}

/// Best score shared between workers; only ever raised to a score actually reached
struct SharedBound(AtomicU32);

impl SharedBound {
    const fn new() -> Self {
        Self(AtomicU32::new(0))
    }

    /// The pruning bound for a worker whose own best is `local`
    fn get(&self, local: u32) -> u32 {
        local.max(self.0.load(AtomicOrdering::Relaxed))
    }

    fn raise(&self, score: u32) {
        self.0.fetch_max(score, AtomicOrdering::Relaxed);
    }
}
