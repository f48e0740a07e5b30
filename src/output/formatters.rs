//! Formatting utilities for terminal output

use crate::core::{Hint, Pattern, Word};
use colored::{ColoredString, Colorize};

/// Format a pattern as emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: Pattern) -> String {
    pattern
        .hints()
        .iter()
        .map(|hint| match hint {
            Hint::Absent => '⬜',
            Hint::Present => '🟨',
            Hint::Match => '🟩',
        })
        .collect()
}

/// Color one guessed letter by its hint
#[must_use]
pub fn colored_letter(letter: u8, hint: Hint) -> ColoredString {
    let text = char::from(letter).to_string();
    match hint {
        Hint::Absent => text.truecolor(127, 127, 127),
        Hint::Present => text.truecolor(255, 255, 0).bold(),
        Hint::Match => text.truecolor(0, 255, 0).bold(),
    }
}

/// Render a guess with each letter colored by its hint
#[must_use]
pub fn format_hints(guess: &Word, pattern: Pattern) -> String {
    guess
        .chars()
        .iter()
        .zip(pattern.hints())
        .map(|(&letter, &hint)| colored_letter(letter, hint).to_string())
        .collect()
}

/// Join words into a comma-separated, alphabetically sorted list
#[must_use]
pub fn sorted_word_list(words: &[&Word]) -> String {
    let mut texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
    texts.sort_unstable();
    texts.join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Clamped to [0, width] below
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_to_emoji_all_gray() {
        let pattern: Pattern = "XXXXX".parse().unwrap();
        assert_eq!(pattern_to_emoji(pattern), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn pattern_to_emoji_all_green() {
        assert_eq!(pattern_to_emoji(Pattern::PERFECT), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn pattern_to_emoji_mixed() {
        let pattern: Pattern = "OMMXM".parse().unwrap();
        assert_eq!(pattern_to_emoji(pattern), "🟨🟩🟩⬜🟩");
    }

    #[test]
    fn format_hints_keeps_letters_in_order() {
        let guess = Word::new("crane").unwrap();
        let formatted = format_hints(&guess, "OMMXM".parse().unwrap());

        let letters: String = formatted.chars().filter(char::is_ascii_uppercase).collect();
        assert_eq!(letters, "CRANE");
    }

    #[test]
    fn sorted_word_list_is_alphabetical() {
        let words: Vec<Word> = ["trace", "crane", "slate"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        let refs: Vec<&Word> = words.iter().collect();
        assert_eq!(sorted_word_list(&refs), "CRANE, SLATE, TRACE");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
