//! Display functions for command results

use super::formatters::{create_progress_bar, format_hints, pattern_to_emoji};
use crate::commands::{ExhaustStatistics, OpeningKind, OpeningsResult, SolveResult};
use crate::core::{Pattern, Word};
use crate::solver::MAX_GUESSES;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.text().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nGuess #{}: {} {}",
            i + 1,
            format_hints(&step.word, step.pattern),
            pattern_to_emoji(step.pattern)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else if let Some(reason) = &result.gave_up {
        println!("{}", format!("❌ Hmm, I ran out of ideas: {reason}").red().bold());
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print exhaustive-run statistics
pub fn print_exhaust_statistics(strategy: &str, stats: &ExhaustStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Exhaustive Test: {} ", strategy.bright_yellow().bold());
    println!("{}", "═".repeat(70));

    let percent = |count: usize| {
        if stats.total_words == 0 {
            0.0
        } else {
            count as f64 / stats.total_words as f64 * 100.0
        }
    };

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.2}%)", percent(stats.solved)).green()
    );
    if !stats.failed.is_empty() {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed.len(),
            format!("({:.2}%)", percent(stats.failed.len())).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses).bright_yellow().bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for guesses in 1..=MAX_GUESSES {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!(
            "  {guesses} guesses: {} {count:5} ({:5.2}%)",
            bar.green(),
            percent(count)
        );
    }

    if !stats.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Words (5-6 guesses)".yellow().bold());
        for (word, guesses) in stats.hardest.iter().take(5) {
            println!("  {} ({guesses} guesses)", word.text().yellow());
        }
    }

    if !stats.failed.is_empty() {
        println!("\n❌ {}", "Failed Words".red().bold());
        for chunk in stats.failed.chunks(10) {
            let line: Vec<&str> = chunk.iter().map(Word::text).collect();
            println!("  {}", line.join(", "));
        }
    }
}

/// Print the result of an opening search
pub fn print_openings_result(result: &OpeningsResult) {
    let label = match result.kind {
        OpeningKind::Pairs => "pairs",
        OpeningKind::Triples => "triples",
    };

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", format!("BEST OPENING {}", label.to_uppercase()).bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\nSearched {} words in {:.2}s",
        result.pool_size,
        result.duration.as_secs_f64()
    );
    println!(
        "Found {} best {label} with score {}:",
        result.openings.len(),
        result.score.to_string().bright_yellow().bold()
    );

    for opening in &result.openings {
        let words: Vec<&str> = opening.iter().map(Word::text).collect();
        println!("  {}", words.join(" ").bright_white());
    }
}

/// Print the feedback for one guess
pub fn print_feedback(guess: &Word, pattern: Pattern) {
    println!("{pattern}  {}", format_hints(guess, pattern));
}
