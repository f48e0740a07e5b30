//! Core domain types for Wordle
//!
//! Words, letter sets, feedback patterns and the consistency rules that tie them
//! together. Everything here is pure and has no knowledge of word lists or strategy.

mod constraint;
mod letters;
mod pattern;
mod word;

pub use constraint::{filter_consistent, is_consistent};
pub use letters::LetterSet;
pub use pattern::{Hint, Pattern, PatternError};
pub use word::{WORD_LENGTH, Word, WordError};
