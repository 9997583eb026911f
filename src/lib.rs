//! Wordle Helper
//!
//! Narrows a dictionary to the words consistent with the turns played so far
//! and ranks the next guesses by the information they are expected to reveal.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_helper::core::{GameState, Turn, Word};
//!
//! // CRANE played, R, A and E located, C somewhere else, N absent
//! let turns = [Turn::parse("c?r!a!ne!").unwrap()];
//! let state = GameState::from_turns(&turns);
//!
//! let dictionary = [Word::new("trace").unwrap(), Word::new("slate").unwrap()];
//! let candidates = state.filter(&dictionary);
//! assert_eq!(candidates.len(), 1);
//! ```

// Error types
pub mod error;

// Core domain types
pub mod core;

// Scoring algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Error, Result};
