//! Opening-sequence search command

use crate::core::Word;
use crate::solver::frequency::LetterFrequencies;
use crate::solver::opening::OpeningSearch;
use crate::wordlists::{Lexicon, ReferenceSet};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Number of words per opening sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpeningKind {
    Pairs,
    Triples,
}

impl OpeningKind {
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            Self::Pairs => 2,
            Self::Triples => 3,
        }
    }
}

/// Configuration for an opening search
#[derive(Debug, Clone, Copy)]
pub struct OpeningsConfig {
    pub kind: OpeningKind,
    /// Words whose letters set the frequency weights
    pub reference: ReferenceSet,
    /// Words that may appear in an opening
    pub pool: ReferenceSet,
    /// Only search the first `limit` words of the pool
    pub limit: Option<usize>,
}

impl OpeningsConfig {
    /// Weight by the possible answers, combine any accepted guess
    #[must_use]
    pub const fn new(kind: OpeningKind) -> Self {
        Self {
            kind,
            reference: ReferenceSet::PossibleAnswers,
            pool: ReferenceSet::AcceptedGuesses,
            limit: None,
        }
    }
}

/// Result of an opening search
#[derive(Debug, Clone)]
pub struct OpeningsResult {
    pub kind: OpeningKind,
    pub score: u32,
    /// Every co-optimal opening, in search order
    pub openings: Vec<Vec<Word>>,
    pub pool_size: usize,
    pub duration: Duration,
}

/// Run the opening-sequence search over `lexicon`
#[must_use]
pub fn find_openings(
    lexicon: &Lexicon,
    config: OpeningsConfig,
    show_progress: bool,
) -> OpeningsResult {
    let table = LetterFrequencies::from_words(lexicon.words(config.reference));

    let pool = lexicon.words(config.pool);
    let pool: Vec<&Word> = pool
        .iter()
        .take(config.limit.unwrap_or(pool.len()))
        .collect();

    let mut search = OpeningSearch::new(&table);
    if show_progress {
        let pb = ProgressBar::new(pool.len() as u64);
        if let Ok(style) =
            ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        search = search.with_progress(pb);
    }

    let start = Instant::now();
    let (score, openings) = match config.kind {
        OpeningKind::Pairs => {
            let found = search.pairs(&pool);
            (found.score, owned_tuples(&found.tuples))
        }
        OpeningKind::Triples => {
            let found = search.triples(&pool);
            (found.score, owned_tuples(&found.tuples))
        }
    };
    search.finish();

    OpeningsResult {
        kind: config.kind,
        score,
        openings,
        pool_size: pool.len(),
        duration: start.elapsed(),
    }
}

fn owned_tuples<const N: usize>(tuples: &[[&Word; N]]) -> Vec<Vec<Word>> {
    tuples
        .iter()
        .map(|tuple| tuple.iter().map(|&w| w.clone()).collect())
        .collect()
}
