//! Interactive assistant mode
//!
//! Suggests guesses for a game played elsewhere. The player types the guess they
//! actually made and the `MOX` feedback they got back.

use crate::core::{Pattern, Word};
use crate::output::formatters::{format_hints, sorted_word_list};
use crate::solver::{Solver, SolverState};
use std::io::{self, BufRead, Write};

/// Run the assistant until the game ends or input runs out
///
/// An empty guess lists the remaining candidates; `q` or end of input quits.
/// Invalid guesses and feedback strings are re-prompted without touching the
/// solver.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_assist<R: BufRead, W: Write>(
    solver: &mut Solver<'_>,
    input: &mut R,
    out: &mut W,
) -> io::Result<SolverState> {
    writeln!(
        out,
        "Feedback is five letters: M = match, O = wrong position, X = not in the word.\n"
    )?;

    while !solver.state().is_terminal() {
        let turn = solver.turn() + 1;
        let suggestion = match solver.next_guess() {
            Ok(word) => word.text().to_string(),
            Err(err) => {
                writeln!(out, "Hmm, I ran out of ideas ({err}).")?;
                "nothing".to_string()
            }
        };
        writeln!(
            out,
            "{} words satisfy all hints so far.",
            solver.candidates().len()
        )?;

        let Some(guess) = read_guess(solver, turn, &suggestion, input, out)? else {
            return Ok(solver.state());
        };
        let Some(pattern) = read_pattern(input, out)? else {
            return Ok(solver.state());
        };

        if let Err(err) = solver.record_guess(&guess, pattern) {
            writeln!(out, "{err}")?;
            continue;
        }

        if pattern.is_perfect() {
            writeln!(
                out,
                "Success!  The answer is {} (solved in {turn}).",
                format_hints(&guess, pattern)
            )?;
        } else {
            writeln!(out, "Hint: {}", format_hints(&guess, pattern))?;
        }
    }

    match solver.state() {
        SolverState::Stuck => writeln!(
            out,
            "No words satisfy all hints. Some feedback was probably mistyped."
        )?,
        SolverState::Exhausted => writeln!(out, "Oops, I ran out of attempts.")?,
        _ => {}
    }
    Ok(solver.state())
}

fn read_guess<R: BufRead, W: Write>(
    solver: &Solver<'_>,
    turn: usize,
    suggestion: &str,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<Word>> {
    loop {
        write!(
            out,
            "What is your guess #{turn} (I suggest {suggestion})? \
             Press <enter> to see all words that satisfy the existing hints. "
        )?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.as_str() {
            "" => {
                writeln!(out, "These words satisfy all hints so far:")?;
                writeln!(out, "{}", sorted_word_list(solver.candidates()))?;
            }
            "q" | "quit" => return Ok(None),
            text => match Word::new(text) {
                Ok(word) if solver.lexicon().is_accepted(&word) => return Ok(Some(word)),
                Ok(word) => writeln!(out, "{word} is not an accepted guess.  Please type again.")?,
                Err(err) => writeln!(out, "Invalid guess ({err}).  Please type again.")?,
            },
        }
    }
}

fn read_pattern<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<Pattern>> {
    loop {
        write!(out, "What are the hints you got (M/O/X)? ")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.parse::<Pattern>() {
            Ok(pattern) => return Ok(Some(pattern)),
            Err(err) => writeln!(out, "Invalid hints ({err}).  Please type again.")?,
        }
    }
}

/// Next trimmed line, or `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Strategy;
    use crate::wordlists::Lexicon;
    use std::io::Cursor;

    fn small_lexicon() -> Lexicon {
        let list: Vec<Word> = ["crane", "trace", "slate", "proxy"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        Lexicon::new(list.clone(), list)
    }

    fn run(lexicon: &Lexicon, script: &str) -> (SolverState, String) {
        let mut solver = Solver::new(lexicon, Strategy::eager()).unwrap();
        let mut input = Cursor::new(script.as_bytes());
        let mut out = Vec::new();
        let state = run_assist(&mut solver, &mut input, &mut out).unwrap();
        (state, String::from_utf8(out).unwrap())
    }

    #[test]
    fn plays_to_solution() {
        let lexicon = small_lexicon();
        let (state, out) = run(&lexicon, "\ncrane\nommxm\ntrace\nmmmmm\n");

        assert_eq!(state, SolverState::Solved);
        assert!(out.contains("I suggest TRACE"));
        assert!(out.contains("CRANE, PROXY, SLATE, TRACE"));
        assert!(out.contains("1 words satisfy all hints so far."));
        assert!(out.contains("solved in 2"));
    }

    #[test]
    fn reprompts_on_invalid_input() {
        let lexicon = small_lexicon();
        let (state, out) = run(&lexicon, "cr4ne\nfuzzy\ncrane\nMMX\nommxm\n");

        assert_eq!(state, SolverState::InProgress);
        assert!(out.contains("Invalid guess"));
        assert!(out.contains("FUZZY is not an accepted guess"));
        assert!(out.contains("Invalid hints"));
        assert!(out.contains("Hint: "));
    }

    #[test]
    fn reports_stuck_session() {
        let lexicon = small_lexicon();
        let (state, out) = run(&lexicon, "crane\nmmmmx\n");

        assert_eq!(state, SolverState::Stuck);
        assert!(out.contains("No words satisfy all hints"));
    }

    #[test]
    fn quit_leaves_game_fresh() {
        let lexicon = small_lexicon();
        let (state, _) = run(&lexicon, "q\n");
        assert_eq!(state, SolverState::Fresh);
    }
}
