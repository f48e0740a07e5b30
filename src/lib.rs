//! Wordle Cover
//!
//! A deterministic Wordle solver built on letter coverage: candidates are ranked by
//! how many remaining words share their distinct letters, and opening words are
//! found by a pruned search over pairs and triples.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_cover::core::{Pattern, Word};
//! use wordle_cover::solver::{Solver, Strategy};
//! use wordle_cover::wordlists::Lexicon;
//!
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("trace").unwrap();
//! let pattern = Pattern::calculate(&guess, &answer);
//! assert_eq!(pattern.to_string(), "OMMXM");
//!
//! let lexicon = Lexicon::embedded();
//! let mut solver = Solver::new(&lexicon, Strategy::eager()).unwrap();
//! solver.record_guess(&guess, pattern).unwrap();
//! assert!(solver.candidates().contains(&&answer));
//! ```

// Core domain types
pub mod core;

// Scoring, opening search and the solver
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
