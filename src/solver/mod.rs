//! Wordle helping algorithms
//!
//! Letter frequencies, scoring strategies and their bucketed rankings, the
//! letter permuter, and the session that runs them after every turn.

mod frequency;
mod permuter;
mod ranking;
pub mod scoring;
mod session;

pub use frequency::{
    FREQUENCY_SIGNIFICANT_DIGITS, LetterFrequencies, round_significant, score_by_letter_frequency,
};
pub use permuter::LetterPermuter;
pub use ranking::{BUCKET_DECIMALS, Bucket, Ranking, round_half_up};
pub use scoring::Strategy;
pub use session::{Report, Scores, Session};
