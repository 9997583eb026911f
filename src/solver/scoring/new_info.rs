//! Weighted new-information score
//!
//! For every hypothetical answer, the constraints a guess would reveal are
//! compared with what the game state already knows. Each letter whose
//! constraint would change adds a weight depending on the kind of change.

use crate::core::{CountConstraint, GameState, Turn, Word, turn_constraints};
use crate::solver::{LetterFrequencies, Ranking};
use rayon::prelude::*;

/// Weights for the kinds of new information a guess can reveal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewInfoWeights {
    /// Letter newly known to be absent
    pub full_exclusion: f64,
    /// Minimum count turned into an exact count
    pub min_to_exact: f64,
    /// Exact count for a letter not constrained before
    pub new_exact: f64,
    /// Minimum count raised
    pub changed_yellow: f64,
    /// Minimum count for a letter not constrained before
    pub new_yellow: f64,
}

impl Default for NewInfoWeights {
    fn default() -> Self {
        Self {
            full_exclusion: 0.5,
            min_to_exact: 0.01,
            new_exact: 1.0,
            changed_yellow: 0.2,
            new_yellow: 0.8,
        }
    }
}

impl NewInfoWeights {
    /// Weight earned when a letter's known constraint `previous` would become `revealed`
    #[must_use]
    pub fn weight(&self, revealed: CountConstraint, previous: Option<CountConstraint>) -> f64 {
        use CountConstraint::{AtLeast, ExactlyEqual};

        if previous == Some(revealed) {
            return 0.0;
        }
        match (revealed, previous) {
            (ExactlyEqual(0), _) => self.full_exclusion,
            (ExactlyEqual(_), Some(AtLeast(_))) => self.min_to_exact,
            (ExactlyEqual(_), None) => self.new_exact,
            (AtLeast(new), Some(AtLeast(old))) if new > old => self.changed_yellow,
            (AtLeast(new), None) if new > 0 => self.new_yellow,
            _ => 0.0,
        }
    }
}

/// Unweighted and frequency-weighted score of one guess
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NewInfo {
    pub unweighted: f64,
    pub weighted: f64,
}

impl std::ops::Add for NewInfo {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            unweighted: self.unweighted + other.unweighted,
            weighted: self.weighted + other.weighted,
        }
    }
}

/// Both rankings produced by the new-information strategy
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewInfoScores {
    pub unweighted: Ranking,
    pub weighted: Ranking,
}

/// New information revealed by playing `guess` if `answer` were hidden
#[must_use]
pub fn evaluate_new_information(
    state: &GameState,
    guess: &Word,
    answer: &Word,
    frequencies: &LetterFrequencies,
    weights: &NewInfoWeights,
) -> NewInfo {
    let revealed = turn_constraints(&Turn::from_evaluation(guess, answer));

    revealed
        .iter()
        .fold(NewInfo::default(), |acc, (letter, constraint)| {
            let increment = weights.weight(constraint, state.constraint_for(letter));
            acc + NewInfo {
                unweighted: increment,
                weighted: increment * frequencies.get(letter),
            }
        })
}

/// Rank guesses by the new information they reveal over all candidate answers
///
/// Guesses may be any dictionary word; `candidates` are the still-possible answers.
#[must_use]
pub fn score_by_new_info(
    state: &GameState,
    guesses: &[&Word],
    candidates: &[&Word],
    frequencies: &LetterFrequencies,
    weights: &NewInfoWeights,
) -> NewInfoScores {
    let totals: Vec<(Word, NewInfo)> = guesses
        .par_iter()
        .map(|&guess| {
            let total = candidates
                .iter()
                .map(|answer| evaluate_new_information(state, guess, answer, frequencies, weights))
                .fold(NewInfo::default(), |acc, info| acc + info);
            (guess.clone(), total)
        })
        .collect();

    let unweighted = totals
        .iter()
        .map(|(word, info)| (word.clone(), info.unweighted))
        .collect();
    let weighted = totals
        .into_iter()
        .map(|(word, info)| (word, info.weighted))
        .collect();

    NewInfoScores {
        unweighted: Ranking::normalized(unweighted),
        weighted: Ranking::normalized(weighted),
    }
}
