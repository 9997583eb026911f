//! Automatic solve command
//!
//! Plays a hidden answer turn by turn, always choosing the helper's best guess.

use crate::core::{Turn, Word};
use crate::error::{Error, Result};
use crate::solver::{Session, Strategy};
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Configuration for solving a word
pub struct SolveConfig {
    pub answer: Word,
    pub first_word: Word,
    /// Ranks the candidates after the first turn
    pub strategy: Strategy,
    pub max_turns: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(answer: Word, first_word: Word) -> Self {
        Self {
            answer,
            first_word,
            strategy: Strategy::WeightedNewInfo,
            max_turns: 6,
        }
    }
}

/// A single played turn
pub struct SolveStep {
    pub turn: Turn,
    pub candidates_after: usize,
}

/// Result of solving a word
pub struct SolveResult {
    pub answer: Word,
    pub steps: Vec<SolveStep>,
    pub success: bool,
}

/// Pick a hidden answer at random, preferring the past results
///
/// Returns `None` when both lists are empty.
pub fn pick_answer<R: Rng + ?Sized>(
    dictionary: &[Word],
    past_results: &[Word],
    rng: &mut R,
) -> Option<Word> {
    let pool = if past_results.is_empty() {
        dictionary
    } else {
        past_results
    };
    pool.choose(rng).cloned()
}

/// Solve `config.answer` with the words of `session`
///
/// The session's turns are replaced by the turns played.
///
/// # Errors
/// Returns `Error::State` when the answer is not in the dictionary.
pub fn solve_word(config: SolveConfig, session: &mut Session) -> Result<SolveResult> {
    if !session.dictionary().contains(&config.answer) {
        return Err(Error::State(format!(
            "{} is not in the dictionary",
            config.answer
        )));
    }
    session.clear();

    let mut steps = Vec::new();
    let mut guess = Some(config.first_word);

    while let Some(word) = guess.take() {
        let turn = Turn::from_evaluation(&word, &config.answer);
        let solved = turn.is_solved();
        session.push(turn.clone());

        let candidates_after = session.candidates().len();
        debug!("Played {turn}, {candidates_after} candidates left");
        steps.push(SolveStep {
            turn,
            candidates_after,
        });

        if solved {
            return Ok(SolveResult {
                answer: config.answer,
                steps,
                success: true,
            });
        }
        if steps.len() < config.max_turns {
            guess = session.best_guess(config.strategy)?;
        }
    }

    Ok(SolveResult {
        answer: config.answer,
        steps,
        success: false,
    })
}
