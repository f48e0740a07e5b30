//! Exhaustive evaluation
//!
//! Runs the strategy against every possible answer and collects statistics.

use super::solve::solve_word;
use crate::core::Word;
use crate::solver::{Solver, SolverError};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result from solving a single answer
#[derive(Debug, Clone)]
pub struct AnswerResult {
    pub answer: Word,
    pub guesses: Vec<Word>,
    pub success: bool,
}

/// Statistics from an exhaustive run
#[derive(Debug)]
pub struct ExhaustStatistics {
    pub total_words: usize,
    pub solved: usize,
    /// Answers not solved within the guess limit, in answer-list order
    pub failed: Vec<Word>,
    /// Guess count to number of answers solved in that many guesses
    pub guess_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub hardest: Vec<(Word, usize)>,
}

/// Solve every possible answer (or the first `limit` of them) with fresh copies of
/// `solver`
///
/// Answers are solved in parallel; results keep answer-list order.
///
/// # Errors
///
/// Returns the first `SolverError` that stops a run outright, which only happens
/// when a possible answer is missing from the accepted guesses.
pub fn run_exhaust(
    solver: &Solver<'_>,
    limit: Option<usize>,
    show_progress: bool,
) -> Result<ExhaustStatistics, SolverError> {
    let answers = solver.lexicon().possible_answers();
    let answers = &answers[..limit.unwrap_or(answers.len()).min(answers.len())];

    let pb = if show_progress {
        let pb = ProgressBar::new(answers.len() as u64);
        if let Ok(style) = ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        ) {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };
    pb.set_message(solver.strategy().name().to_string());

    let start = Instant::now();
    let results: Vec<AnswerResult> = answers
        .par_iter()
        .map(|answer| -> Result<AnswerResult, SolverError> {
            let result = solve_word(solver.clone(), answer)?;
            pb.inc(1);
            Ok(AnswerResult {
                answer: answer.clone(),
                guesses: result.guesses.into_iter().map(|step| step.word).collect(),
                success: result.success,
            })
        })
        .collect::<Result<_, SolverError>>()?;
    pb.finish_with_message("Complete!");

    let stats = summarize(&results, start.elapsed());
    debug!(
        "Exhaustive run: {}/{} solved in {:.2}s",
        stats.solved,
        stats.total_words,
        stats.total_time.as_secs_f64()
    );
    Ok(stats)
}

fn summarize(results: &[AnswerResult], total_time: Duration) -> ExhaustStatistics {
    let mut guess_distribution = BTreeMap::new();
    let mut failed = Vec::new();
    let mut total_guesses = 0;

    for result in results {
        if result.success {
            *guess_distribution.entry(result.guesses.len()).or_insert(0) += 1;
            total_guesses += result.guesses.len();
        } else {
            failed.push(result.answer.clone());
        }
    }

    let solved = results.len() - failed.len();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    let mut hardest: Vec<(Word, usize)> = results
        .iter()
        .filter(|r| r.success && r.guesses.len() >= 5)
        .map(|r| (r.answer.clone(), r.guesses.len()))
        .collect();
    hardest.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    hardest.truncate(10);

    ExhaustStatistics {
        total_words: results.len(),
        solved,
        failed,
        guess_distribution,
        total_time,
        average_guesses,
        hardest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Strategy;
    use crate::wordlists::Lexicon;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn every_answer_accounted_for() {
        let list = words(&["crane", "trace", "slate", "proxy"]);
        let lexicon = Lexicon::new(list.clone(), list);
        let solver = Solver::new(&lexicon, Strategy::eager()).unwrap();

        let stats = run_exhaust(&solver, None, false).unwrap();

        assert_eq!(stats.total_words, 4);
        assert_eq!(stats.solved + stats.failed.len(), 4);
        assert_eq!(stats.guess_distribution.values().sum::<usize>(), stats.solved);
        // TRACE is the opener, so exactly one answer falls in one guess
        assert_eq!(stats.guess_distribution.get(&1), Some(&1));
    }

    #[test]
    fn limit_caps_answers() {
        let lexicon = Lexicon::embedded();
        let solver = Solver::new(&lexicon, Strategy::from_name("two-cover").unwrap()).unwrap();

        let stats = run_exhaust(&solver, Some(25), false).unwrap();
        assert_eq!(stats.total_words, 25);
        // Two fixed openers that are not answers themselves
        assert!(stats.guess_distribution.keys().all(|&n| n >= 3));
    }

    #[test]
    fn summarize_counts_failures_in_order() {
        let results = vec![
            AnswerResult {
                answer: Word::new("crane").unwrap(),
                guesses: words(&["slate", "crane"]),
                success: true,
            },
            AnswerResult {
                answer: Word::new("fuzzy").unwrap(),
                guesses: words(&["slate"; 6]),
                success: false,
            },
            AnswerResult {
                answer: Word::new("jazzy").unwrap(),
                guesses: words(&["slate"; 6]),
                success: false,
            },
            AnswerResult {
                answer: Word::new("trace").unwrap(),
                guesses: words(&["slate", "proxy", "crane", "trace"]),
                success: true,
            },
        ];

        let stats = summarize(&results, Duration::ZERO);

        assert_eq!(stats.solved, 2);
        assert_eq!(stats.failed, words(&["fuzzy", "jazzy"]));
        assert_eq!(stats.guess_distribution, BTreeMap::from([(2, 1), (4, 1)]));
        assert!((stats.average_guesses - 3.0).abs() < f64::EPSILON);
        assert!(stats.hardest.is_empty());
    }
}
