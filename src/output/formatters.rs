//! Formatting utilities for terminal output

use crate::core::{ALPHABET_SIZE, Cell, CountConstraint, GameState, Mark, Turn};
use crate::solver::Ranking;
use colored::{ColoredString, Colorize};

/// What the letter-info line knows about one letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterStatus {
    pub letter: u8,
    pub constraint: Option<CountConstraint>,
    /// Placed at some position
    pub located: bool,
}

/// Letters A-Z that are not excluded, with what is known about them
#[must_use]
pub fn letter_statuses(state: &GameState) -> Vec<LetterStatus> {
    (b'A'..b'A' + ALPHABET_SIZE as u8)
        .filter_map(|letter| {
            let constraint = state.constraint_for(letter);
            if constraint.is_some_and(CountConstraint::is_excluded) {
                return None;
            }
            Some(LetterStatus {
                letter,
                constraint,
                located: state.known_letters().contains(&Some(letter)),
            })
        })
        .collect()
}

/// Color a feedback cell the way the game shows it
#[must_use]
pub fn colored_cell(cell: &Cell) -> ColoredString {
    let letter = char::from(cell.letter).to_string();
    match cell.mark {
        Mark::Exact => letter.green().bold(),
        Mark::Present => letter.yellow().bold(),
        Mark::Absent => letter.white(),
    }
}

/// A turn as space separated colored letters
#[must_use]
pub fn format_turn(turn: &Turn) -> String {
    turn.cells()
        .iter()
        .map(|cell| colored_cell(cell).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Green when located, yellow when only present, underlined when the count is exact
#[must_use]
pub fn colored_status(status: &LetterStatus) -> ColoredString {
    let letter = char::from(status.letter).to_string();
    let Some(constraint) = status.constraint else {
        return letter.normal();
    };
    let colored = if status.located {
        letter.green()
    } else {
        letter.yellow()
    };
    if constraint.is_exact() {
        colored.underline()
    } else {
        colored
    }
}

/// Every non-excluded letter, colored by what is known about it
#[must_use]
pub fn format_letter_info(state: &GameState) -> String {
    letter_statuses(state)
        .iter()
        .map(|status| colored_status(status).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line per bucket, `score: WORD, WORD`, at most `top` buckets
#[must_use]
pub fn ranking_lines(ranking: &Ranking, top: usize) -> Vec<String> {
    ranking
        .buckets()
        .iter()
        .take(top)
        .map(ToString::to_string)
        .collect()
}
