//! Wordle Cover - CLI
//!
//! Letter-coverage Wordle solver: play against a known or random answer, assist a
//! live game, evaluate a strategy over every answer, or search for opening words.

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand, ValueEnum};
use rand::seq::IndexedRandom;
use std::io;
use std::path::PathBuf;
use wordle_cover::{
    commands::{
        OpeningKind, OpeningsConfig, feedback, find_openings, run_assist, run_exhaust, solve_word,
    },
    core::Word,
    output::{print_exhaust_statistics, print_feedback, print_openings_result, print_solve_result},
    solver::{PRESETS, Solver, Strategy},
    wordlists::{ANSWERS, Lexicon, ReferenceSet, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_cover",
    about = "Wordle solver driven by letter coverage and precomputed opening words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: eager (default), ignore-earliest, audio, audio-lefty, two-cover, three-cover
    #[arg(short, long, global = true, default_value = "eager")]
    strategy: String,

    /// Possible answers, one word per line (default: embedded list)
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Extra accepted guesses, one word per line (default: embedded list)
    #[arg(long, global = true)]
    guesses: Option<PathBuf>,

    /// Restrict candidates to possible answers after this many guesses
    #[arg(long, global = true)]
    narrow_after: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a random (or given) possible answer, showing each guess
    Demo {
        /// Answer to solve instead of a random one
        #[arg(short, long)]
        answer: Option<String>,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts before and after each guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Interactive helper for a game played elsewhere (default)
    Assist,

    /// Run the strategy against every possible answer
    Exhaust {
        /// Limit number of answers to test
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Search for the best-coverage opening pairs or triples
    Openings {
        #[arg(value_enum)]
        kind: KindArg,

        /// Word list whose letters set the weights
        #[arg(long, value_enum, default_value = "answers")]
        reference: SetArg,

        /// Word list the opening words are drawn from
        #[arg(long, value_enum, default_value = "all")]
        pool: SetArg,

        /// Only search the first N words of the pool
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print the feedback pattern for a guess against an answer
    Feedback { guess: String, answer: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Pairs,
    Triples,
}

#[derive(Clone, Copy, ValueEnum)]
enum SetArg {
    /// Possible answers only
    Answers,
    /// Every accepted guess
    All,
}

impl From<KindArg> for OpeningKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Pairs => Self::Pairs,
            KindArg::Triples => Self::Triples,
        }
    }
}

impl From<SetArg> for ReferenceSet {
    fn from(set: SetArg) -> Self {
        match set {
            SetArg::Answers => Self::PossibleAnswers,
            SetArg::All => Self::AcceptedGuesses,
        }
    }
}

/// Load the lexicon from the --answers/--guesses flags, falling back to the
/// embedded lists
fn load_lexicon(cli: &Cli) -> Result<Lexicon> {
    match (&cli.answers, &cli.guesses) {
        (None, None) => Ok(Lexicon::embedded()),
        (Some(answers), guesses) => Ok(Lexicon::from_files(answers, guesses.as_deref())?),
        (None, Some(guesses)) => {
            let extra = loader::load_from_file(guesses)
                .with_context(|| format!("failed to read {}", guesses.display()))?;
            Ok(Lexicon::new(loader::words_from_slice(ANSWERS), extra))
        }
    }
}

fn load_strategy(cli: &Cli) -> Result<Strategy> {
    let strategy = Strategy::from_name(&cli.strategy).ok_or_else(|| {
        anyhow!(
            "unknown strategy '{}' (expected one of: {})",
            cli.strategy,
            PRESETS.join(", ")
        )
    })?;
    Ok(match cli.narrow_after {
        Some(turn) => strategy.with_narrow_after(Some(turn)),
        None => strategy,
    })
}

/// Build a solver for the commands that play a game
fn build_solver<'a>(cli: &Cli, lexicon: &'a Lexicon) -> Result<Solver<'a>> {
    Ok(Solver::new(lexicon, load_strategy(cli)?)?)
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Feedback { guess, answer }) => {
            let (guess, pattern) = feedback(guess, answer)?;
            print_feedback(&guess, pattern);
            Ok(())
        }
        Some(Commands::Openings {
            kind,
            reference,
            pool,
            limit,
        }) => {
            let lexicon = load_lexicon(cli)?;
            let config = OpeningsConfig {
                kind: (*kind).into(),
                reference: (*reference).into(),
                pool: (*pool).into(),
                limit: *limit,
            };
            print_openings_result(&find_openings(&lexicon, config, true));
            Ok(())
        }
        Some(Commands::Demo { answer }) => {
            let lexicon = load_lexicon(cli)?;
            run_demo_command(build_solver(cli, &lexicon)?, answer.as_deref())
        }
        Some(Commands::Solve { word, verbose }) => {
            let lexicon = load_lexicon(cli)?;
            run_solve_command(build_solver(cli, &lexicon)?, word, *verbose)
        }
        Some(Commands::Exhaust { limit }) => {
            let lexicon = load_lexicon(cli)?;
            run_exhaust_command(&build_solver(cli, &lexicon)?, *limit)
        }
        Some(Commands::Assist) | None => {
            let lexicon = load_lexicon(cli)?;
            run_assist_command(build_solver(cli, &lexicon)?)
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    run(&Cli::parse())
}

fn run_demo_command(solver: Solver<'_>, answer: Option<&str>) -> Result<()> {
    let target = match answer {
        Some(text) => Word::new(text)?,
        None => solver
            .lexicon()
            .possible_answers()
            .choose(&mut rand::rng())
            .cloned()
            .ok_or_else(|| anyhow!("no possible answers to choose from"))?,
    };
    run_solve_command(solver, target.text(), false)
}

fn run_solve_command(solver: Solver<'_>, word: &str, verbose: bool) -> Result<()> {
    let target = Word::new(word)?;
    let result = solve_word(solver, &target)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_assist_command(mut solver: Solver<'_>) -> Result<()> {
    println!("Welcome to the Wordle coverage solver!\n");
    let state = run_assist(&mut solver, &mut io::stdin().lock(), &mut io::stdout())?;
    log::debug!("Assist session ended: {state}");
    Ok(())
}

fn run_exhaust_command(solver: &Solver<'_>, limit: Option<usize>) -> Result<()> {
    let total = solver.lexicon().possible_answers().len();
    if total == 0 {
        bail!("the answer list is empty");
    }
    println!(
        "🎯 Testing {} of {total} possible answers",
        limit.map_or(total, |n| n.min(total))
    );

    let stats = run_exhaust(solver, limit, true)?;
    print_exhaust_statistics(solver.strategy().name(), &stats);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn small_answers(name: &str) -> PathBuf {
        let path = std::env::temp_dir()
            .join(format!("wordle_cover_cli_{name}_{}.txt", std::process::id()));
        fs::write(&path, "crane\ntrace\nslate\n").unwrap();
        path
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("wordle_cover").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn openings_ignore_strategy_words() {
        let path = small_answers("openings");
        let path_arg = path.to_str().unwrap();

        let result = run(&cli(&[
            "--answers", path_arg, "-s", "three-cover", "openings", "pairs",
        ]));
        fs::remove_file(&path).unwrap();

        assert!(result.is_ok());
    }

    #[test]
    fn solve_rejects_strategy_outside_lexicon() {
        let path = small_answers("solve");
        let path_arg = path.to_str().unwrap();

        let result = run(&cli(&[
            "--answers", path_arg, "-s", "three-cover", "solve", "crane",
        ]));
        fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }

    #[test]
    fn unknown_strategy_is_an_error() {
        let result = run(&cli(&["-s", "nope", "solve", "crane"]));
        assert!(result.unwrap_err().to_string().contains("unknown strategy"));
    }

    #[test]
    fn default_command_is_assist() {
        assert!(cli(&[]).command.is_none());
        assert!(matches!(
            cli(&["feedback", "crane", "trace"]).command,
            Some(Commands::Feedback { .. })
        ));
    }
}
