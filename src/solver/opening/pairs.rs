//! Pair search

use super::{Best, OpeningSearch, Openings, SharedBound, rank};
use crate::core::Word;
use log::debug;
use rayon::prelude::*;

impl OpeningSearch<'_> {
    /// Find every pair of `candidates` with the highest combined score
    ///
    /// Each pair appears once, ordered by individual score. Fewer than two candidates
    /// yield no pairs.
    #[must_use]
    pub fn pairs<'w>(&self, candidates: &[&'w Word]) -> Openings<'w, 2> {
        let ranked = rank(candidates, self.table);
        let bound = SharedBound::new();
        debug!("Searching pairs over {} candidates", ranked.len());
        self.start(ranked.len());

        let parts: Vec<Best<[&'w Word; 2]>> = (0..ranked.len())
            .into_par_iter()
            .map(|i| {
                let first = ranked[i];
                let mut best = Best::new();

                for second in &ranked[i + 1..] {
                    // Scores only fall from here on, so no later second word can reach
                    if first.score + second.score < bound.get(best.score) {
                        break;
                    }
                    let score = self.table.score_letters(first.letters.union(second.letters));
                    best.offer(score, [first.word, second.word]);
                }

                bound.raise(best.score);
                self.tick();
                best
            })
            .collect();

        let best = Best::merge(parts);
        debug!("Best pair score {} shared by {} pairs", best.score, best.tuples.len());

        Openings {
            score: best.score,
            tuples: best.tuples,
        }
    }
}
