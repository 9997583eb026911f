//! Core domain types for Wordle
//!
//! Words, feedback, turns, count constraints and the game state built from them.
//! Everything here is a pure value or a pure function over values.

mod constraint;
mod feedback;
mod state;
mod turn;
mod word;

pub use constraint::{CountConstraint, LetterConstraints};
pub use feedback::{Cell, Mark, evaluate, info_score};
pub use state::{GameState, turn_constraints};
pub use turn::Turn;
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Number of letters in the alphabet (A-Z)
pub const ALPHABET_SIZE: usize = 26;

/// Index of an uppercase ASCII letter in the alphabet
#[inline]
pub(crate) fn letter_index(letter: u8) -> usize {
    usize::from(letter - b'A')
}

#[inline]
pub(crate) fn letter_from_index(index: usize) -> u8 {
    b'A' + index as u8
}
