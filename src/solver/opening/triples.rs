//! Triple search
//!
//! Runs over one representative per distinct letter set, which merges anagrams and
//! keeps the cubic search tractable on a full guess list.

use super::{Best, OpeningSearch, Openings, SharedBound, dedup_anagrams, rank};
use crate::core::Word;
use log::debug;
use rayon::prelude::*;

impl OpeningSearch<'_> {
    /// Find every triple of `candidates` with the highest combined score
    ///
    /// Candidates sharing a letter set are searched once, through the first of them in
    /// `candidates` order, so each winning triple names that representative.
    #[must_use]
    pub fn triples<'w>(&self, candidates: &[&'w Word]) -> Openings<'w, 3> {
        let representatives = dedup_anagrams(candidates);
        debug!(
            "Anagram reduction: {} candidates -> {} letter sets",
            candidates.len(),
            representatives.len()
        );

        let ranked = rank(&representatives, self.table);
        let bound = SharedBound::new();
        self.start(ranked.len());

        let parts: Vec<Best<[&'w Word; 3]>> = (0..ranked.len())
            .into_par_iter()
            .map(|i| {
                let first = ranked[i];
                let mut best = Best::new();

                for (j, second) in ranked.iter().enumerate().skip(i + 1) {
                    // The third word scores at most as much as the second
                    if first.score + 2 * second.score < bound.get(best.score) {
                        break;
                    }

                    let pair_letters = first.letters.union(second.letters);
                    let pair_score = self.table.score_letters(pair_letters);

                    for third in &ranked[j + 1..] {
                        if pair_score + third.score < bound.get(best.score) {
                            break;
                        }
                        let score = self.table.score_letters(pair_letters.union(third.letters));
                        best.offer(score, [first.word, second.word, third.word]);
                    }
                }

                bound.raise(best.score);
                self.tick();
                best
            })
            .collect();

        let best = Best::merge(parts);
        debug!(
            "Best triple score {} shared by {} triples",
            best.score,
            best.tuples.len()
        );

        Openings {
            score: best.score,
            tuples: best.tuples,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::synthetic_words;
    use super::super::{best_triples, dedup_anagrams};
    use crate::core::{LetterSet, Word};
    use crate::solver::frequency::LetterFrequencies;
    use std::collections::BTreeSet;

    /// Unpruned enumeration of every triple
    fn brute_force<'w>(
        words: &[&'w Word],
        table: &LetterFrequencies,
    ) -> (u32, Vec<[&'w Word; 3]>) {
        let mut all = Vec::new();
        for (i, &a) in words.iter().enumerate() {
            for (j, &b) in words.iter().enumerate().skip(i + 1) {
                for &c in &words[j + 1..] {
                    all.push((table.score_combination(&[a, b, c]), [a, b, c]));
                }
            }
        }
        let max = all.iter().map(|(score, _)| *score).max().unwrap_or(0);
        let tuples = all
            .into_iter()
            .filter(|(score, _)| *score == max)
            .map(|(_, triple)| triple)
            .collect();
        (max, tuples)
    }

    fn as_sets(tuples: &[[&Word; 3]]) -> BTreeSet<BTreeSet<String>> {
        tuples
            .iter()
            .map(|triple| triple.iter().map(|w| w.text().to_string()).collect())
            .collect()
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn pruned_triples_match_brute_force() {
        for seed in 0..25 {
            let words = synthetic_words(seed, 20);
            let refs: Vec<&Word> = words.iter().collect();
            let table = LetterFrequencies::from_words(&words);

            let pruned = best_triples(&refs, &table);

            // Same representatives as the search, without any pruning
            let (score, tuples) = brute_force(&dedup_anagrams(&refs), &table);
            assert_eq!(pruned.score, score, "seed {seed}");
            assert_eq!(as_sets(&pruned.tuples), as_sets(&tuples), "seed {seed}");

            // Merging anagrams never changes the best reachable score
            let (full_score, _) = brute_force(&refs, &table);
            assert_eq!(pruned.score, full_score, "seed {seed}");
        }
    }

    #[test]
    fn pruned_triples_match_brute_force_with_narrow_reference() {
        for seed in 200..210 {
            let words = synthetic_words(seed, 20);
            let refs: Vec<&Word> = words.iter().collect();
            let table = LetterFrequencies::from_words(&words[..6]);

            let pruned = best_triples(&refs, &table);
            let (score, tuples) = brute_force(&dedup_anagrams(&refs), &table);

            assert_eq!(pruned.score, score, "seed {seed}");
            assert_eq!(as_sets(&pruned.tuples), as_sets(&tuples), "seed {seed}");
        }
    }

    #[test]
    fn anagrams_collapse_to_first_representative() {
        let list = words(&[
            "lyric", "upset", "nomad", "setup", "monad", "crane", "stupe",
        ]);
        let refs: Vec<&Word> = list.iter().collect();
        let table = LetterFrequencies::from_words(&list);

        let best = best_triples(&refs, &table);
        assert_eq!(best.tuples.len(), 1);

        let found: BTreeSet<&str> = best.tuples[0].iter().map(|w| w.text()).collect();
        assert_eq!(found, BTreeSet::from(["LYRIC", "UPSET", "NOMAD"]));
    }

    #[test]
    fn disjoint_triple_covers_fifteen_letters() {
        let list = words(&["lyric", "upset", "nomad", "crane", "slate", "proxy"]);
        let refs: Vec<&Word> = list.iter().collect();
        let table = LetterFrequencies::from_words(&list);

        let best = best_triples(&refs, &table);
        for triple in &best.tuples {
            let letters: LetterSet = triple.iter().map(|w| w.letters()).collect();
            assert_eq!(table.score_letters(letters), best.score);
        }
        let cover: LetterSet = [&list[0], &list[1], &list[2]]
            .iter()
            .map(|w| w.letters())
            .collect();
        assert_eq!(cover.len(), 15);
        assert!(best.score >= table.score_letters(cover));
    }

    #[test]
    fn search_is_deterministic() {
        let words = synthetic_words(11, 40);
        let refs: Vec<&Word> = words.iter().collect();
        let table = LetterFrequencies::from_words(&words);

        let first = best_triples(&refs, &table);
        assert!(!first.tuples.is_empty());
        for _ in 0..5 {
            assert_eq!(best_triples(&refs, &table), first);
        }
    }

    #[test]
    fn fewer_than_three_candidates() {
        let list = words(&["crane", "slate"]);
        let refs: Vec<&Word> = list.iter().collect();
        let table = LetterFrequencies::from_words(&list);

        assert!(best_triples(&refs, &table).tuples.is_empty());
    }
}
