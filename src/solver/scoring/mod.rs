//! Guess scoring strategies
//!
//! Three independent ways to rank candidate next guesses against the
//! still-possible answers, all producing a normalized [`Ranking`].

mod info;
mod new_info;
mod split;

pub use info::{calculate_info_score, score_by_info};
pub use new_info::{
    NewInfo, NewInfoScores, NewInfoWeights, evaluate_new_information, score_by_new_info,
};
pub use split::{
    SPLIT_MAX_EXCLUSIVE, SPLIT_MIN_EXCLUSIVE, calculate_split_score, check_split_range,
    score_by_split,
};

use crate::core::{GameState, Word};
use crate::error::{Error, Result};
use crate::solver::{LetterFrequencies, Ranking};

/// A scoring strategy selectable at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Summed green/yellow score against the reference words
    Info,
    /// New-information score, unweighted
    NewInfo,
    /// New-information score weighted by letter frequency
    WeightedNewInfo,
    /// How evenly a guess splits the candidates
    Split,
}

impl Strategy {
    /// Create a strategy from its name
    ///
    /// Supported names: "info", "new-info", "weighted", "split"
    ///
    /// # Errors
    /// Returns `Error::Format` for an unknown name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "info" => Ok(Self::Info),
            "new-info" => Ok(Self::NewInfo),
            "weighted" | "weighted-new-info" => Ok(Self::WeightedNewInfo),
            "split" => Ok(Self::Split),
            other => Err(Error::Format(format!("Unknown strategy: {other}"))),
        }
    }
}

/// Rank `guesses` against `candidates` with the chosen strategy
///
/// `frequencies` only matters for [`Strategy::WeightedNewInfo`]; a letter
/// missing from it counts as frequency zero.
///
/// # Errors
/// Returns `Error::Range` when [`Strategy::Split`] is asked to score a
/// candidate count outside its allowed range.
pub fn score(
    strategy: Strategy,
    state: &GameState,
    guesses: &[&Word],
    candidates: &[&Word],
    frequencies: &LetterFrequencies,
) -> Result<Ranking> {
    let weights = NewInfoWeights::default();
    match strategy {
        Strategy::Info => Ok(score_by_info(guesses, candidates)),
        Strategy::NewInfo => {
            Ok(score_by_new_info(state, guesses, candidates, frequencies, &weights).unweighted)
        }
        Strategy::WeightedNewInfo => {
            Ok(score_by_new_info(state, guesses, candidates, frequencies, &weights).weighted)
        }
        Strategy::Split => score_by_split(state, guesses, candidates, None),
    }
}
