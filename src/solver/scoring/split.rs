//! Split-evenness score
//!
//! A good guess leaves about half of the candidates whichever candidate turns
//! out to be the answer. The cost is O(candidates² × guesses), so the score is
//! only computed for a bounded candidate count.

use crate::core::{GameState, Turn, Word};
use crate::error::{Error, Result};
use crate::solver::Ranking;
use indicatif::ProgressBar;
use rayon::prelude::*;

/// Candidate count must be strictly greater than this
pub const SPLIT_MIN_EXCLUSIVE: usize = 2;

/// Candidate count must be strictly less than this
pub const SPLIT_MAX_EXCLUSIVE: usize = 300;

/// Check that a candidate count lies inside `(SPLIT_MIN_EXCLUSIVE, SPLIT_MAX_EXCLUSIVE)`
///
/// # Errors
/// Returns `Error::Range` when it does not.
pub fn check_split_range(size: usize) -> Result<()> {
    if size > SPLIT_MIN_EXCLUSIVE && size < SPLIT_MAX_EXCLUSIVE {
        Ok(())
    } else {
        Err(Error::Range {
            size,
            min: SPLIT_MIN_EXCLUSIVE,
            max: SPLIT_MAX_EXCLUSIVE,
        })
    }
}

/// Raw split score of one guess: `half - mean(|remaining - half|)`
///
/// For each candidate taken as the answer, `remaining` counts the other
/// candidates still possible once `guess` is played.
#[must_use]
pub fn calculate_split_score(state: &GameState, guess: &Word, candidates: &[&Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }
    let total = candidates.len() as f64;
    let half = total / 2.0;

    let deviations: f64 = candidates
        .iter()
        .map(|&answer| {
            let hypothetical = state.with_turn(&Turn::from_evaluation(guess, answer));
            let remaining = candidates
                .iter()
                .filter(|&&other| other != answer && hypothetical.matches(other))
                .count();
            (remaining as f64 - half).abs()
        })
        .sum();

    half - deviations / total
}

/// Rank guesses by how evenly they split the candidates
///
/// `progress`, when given, is advanced once per scored guess.
///
/// # Errors
/// Returns `Error::Range` when the candidate count is outside the allowed range.
pub fn score_by_split(
    state: &GameState,
    guesses: &[&Word],
    candidates: &[&Word],
    progress: Option<&ProgressBar>,
) -> Result<Ranking> {
    check_split_range(candidates.len())?;

    let scores = guesses
        .par_iter()
        .map(|&guess| {
            let score = calculate_split_score(state, guess, candidates);
            if let Some(pb) = progress {
                pb.inc(1);
            }
            (guess.clone(), score)
        })
        .collect();

    Ok(Ranking::normalized(scores))
}
