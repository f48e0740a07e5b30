//! Letter-frequency scoring
//!
//! Ranks words by how many reference words share their letters. This is the
//! heuristic behind every suggestion that is not a fixed opening word.

mod selector;
mod table;

pub use selector::select_best_word;
pub use table::LetterFrequencies;
