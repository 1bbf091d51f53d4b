//! Wordle game and solver
//!
//! Scores guesses the way Wordle does, duplicate letters included, and
//! narrows a dictionary to the words consistent with the feedback seen so
//! far. Words come from the system dictionaries and can be any length and
//! language.
//!
//! # Quick Start
//!
//! ```rust
//! use wordlet::core::{Verdict, Word};
//!
//! let guess = Word::new("eager").unwrap();
//! let secret = Word::new("dance").unwrap();
//!
//! // DANCE only has one E, so the second E of EAGER comes out absent
//! let verdict = Verdict::compute(&guess, &secret).unwrap();
//! assert_eq!(verdict.to_string(), "?+___");
//! ```

// Core domain types
pub mod core;

// Game sessions
pub mod game;

// Candidate filtering and self-play
pub mod solver;

// Dictionaries and word pools
pub mod wordlist;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
