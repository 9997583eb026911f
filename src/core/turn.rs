//! A played turn: one guess and its full feedback
//!
//! Turns are usually parsed from the compact notation used at the prompt:
//! a letter followed by `?` is Present, by `!` is Exact, an unmarked letter is
//! Absent. Whitespace is ignored.

use super::{Cell, Mark, WORD_LENGTH, Word, evaluate};
use crate::error::{Error, Result};
use std::fmt;

/// One guess with its feedback, covering all positions
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Turn {
    cells: [Cell; WORD_LENGTH],
}

impl Turn {
    /// Create a turn from a list of cells
    ///
    /// # Errors
    /// Returns `Error::Format` if the number of cells is not `WORD_LENGTH`
    /// or a cell holds something other than an uppercase ASCII letter.
    pub fn new(cells: &[Cell]) -> Result<Self> {
        let cells: [Cell; WORD_LENGTH] = cells.try_into().map_err(|_| {
            Error::Format(format!(
                "Expected {WORD_LENGTH} cells but found {}",
                cells.len()
            ))
        })?;
        if let Some(cell) = cells.iter().find(|c| !c.letter.is_ascii_uppercase()) {
            return Err(Error::Format(format!(
                "Invalid letter in cell: {:?}",
                cell.letter as char
            )));
        }
        Ok(Self { cells })
    }

    /// The turn produced by playing `guess` when `answer` is hidden
    #[must_use]
    pub fn from_evaluation(guess: &Word, answer: &Word) -> Self {
        Self {
            cells: evaluate(guess, answer),
        }
    }

    /// Parse a turn from its textual notation
    ///
    /// # Errors
    /// Returns `Error::Format` on a marker without a letter, an unexpected
    /// character, or a letter count other than `WORD_LENGTH`.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::{Mark, Turn};
    ///
    /// let turn = Turn::parse("co?u?rt!").unwrap();
    /// assert_eq!(turn.word().to_string(), "COURT");
    /// assert_eq!(turn.cells()[1].mark, Mark::Present);
    /// assert_eq!(turn.cells()[4].mark, Mark::Exact);
    ///
    /// assert!(Turn::parse("ab?c").is_err());
    /// ```
    pub fn parse(notation: &str) -> Result<Self> {
        let mut cells = Vec::with_capacity(WORD_LENGTH);
        let mut pending: Option<u8> = None;

        for ch in notation.chars() {
            if ch.is_ascii_alphabetic() {
                if let Some(letter) = pending.take() {
                    cells.push(Cell::absent(letter));
                }
                pending = Some(ch.to_ascii_uppercase() as u8);
            } else if ch == '?' || ch == '!' {
                let letter = pending.take().ok_or_else(|| {
                    Error::Format(format!("Marker '{ch}' must follow a letter"))
                })?;
                cells.push(if ch == '?' {
                    Cell::present(letter)
                } else {
                    Cell::exact(letter)
                });
            } else if !ch.is_whitespace() {
                return Err(Error::Format(format!("Unexpected character: {ch}")));
            }
        }
        if let Some(letter) = pending {
            cells.push(Cell::absent(letter));
        }

        Self::new(&cells)
    }

    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[Cell; WORD_LENGTH] {
        &self.cells
    }

    /// The guessed word
    #[must_use]
    pub fn word(&self) -> Word {
        Word::from_letters(self.cells.map(|cell| cell.letter))
    }

    /// Whether every cell is an exact match
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|cell| cell.mark == Mark::Exact)
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.letter as char)?;
            match cell.mark {
                Mark::Exact => write!(f, "!")?,
                Mark::Present => write!(f, "?")?,
                Mark::Absent => {}
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Turn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
