//! Error types shared by the whole crate
//!
//! All conditions are local and recoverable: the caller reports them and the
//! session carries on.

use crate::core::WordError;
use thiserror::Error;

/// Errors raised by parsing, session handling and gated scoring
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed turn notation, wrong word length or unexpected character
    #[error("format error: {0}")]
    Format(String),

    /// An operation needed state that is not there yet (e.g. no turns played)
    #[error("state error: {0}")]
    State(String),

    /// A size-gated operation was invoked outside its allowed range
    #[error("range error: {size} candidates is outside the exclusive range ({min}, {max})")]
    Range { size: usize, min: usize, max: usize },

    /// A word list contained an invalid line
    #[error("invalid word list entry on line {line}: {reason}")]
    WordList { line: usize, reason: String },
}

impl From<WordError> for Error {
    fn from(err: WordError) -> Self {
        Self::Format(err.to_string())
    }
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;
