//! Per-letter feedback and the turn evaluator
//!
//! Derives the marks Wordle shows for a guess against a hidden answer.

use super::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_index};

/// Feedback classification of one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Right letter, right position
    Exact,
    /// Right letter, wrong position
    Present,
    /// No further occurrence of the letter in the answer
    Absent,
}

impl Mark {
    /// Score contribution used by the plain information score
    #[inline]
    #[must_use]
    pub const fn score(self) -> f64 {
        match self {
            Self::Exact => 1.0,
            Self::Present => 0.5,
            Self::Absent => 0.0,
        }
    }
}

/// One position of one guess: a letter and its mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub letter: u8,
    pub mark: Mark,
}

impl Cell {
    #[must_use]
    pub const fn exact(letter: u8) -> Self {
        Self {
            letter,
            mark: Mark::Exact,
        }
    }

    #[must_use]
    pub const fn present(letter: u8) -> Self {
        Self {
            letter,
            mark: Mark::Present,
        }
    }

    #[must_use]
    pub const fn absent(letter: u8) -> Self {
        Self {
            letter,
            mark: Mark::Absent,
        }
    }
}

/// Calculate the cells produced when `guess` is played and `answer` is hidden
///
/// # Algorithm
/// 1. First pass: mark exact matches, collect every unmatched answer letter
/// 2. Second pass, left to right: a pending letter is Present if the unmatched
///    pool still holds it (consuming one occurrence), otherwise Absent
///
/// # Examples
/// ```
/// use wordle_helper::core::{Mark, Word, evaluate};
///
/// let guess = Word::new("crane").unwrap();
/// let answer = Word::new("trace").unwrap();
/// let marks: Vec<Mark> = evaluate(&guess, &answer).iter().map(|c| c.mark).collect();
///
/// assert_eq!(
///     marks,
///     [Mark::Present, Mark::Exact, Mark::Exact, Mark::Absent, Mark::Exact]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &Word, answer: &Word) -> [Cell; WORD_LENGTH] {
    let mut marks = [None; WORD_LENGTH];
    let mut unmatched = [0u8; ALPHABET_SIZE];

    for (i, (&played, &hidden)) in guess.chars().iter().zip(answer.chars()).enumerate() {
        if played == hidden {
            marks[i] = Some(Mark::Exact);
        } else {
            unmatched[letter_index(hidden)] += 1;
        }
    }

    let mut cells = [Cell::absent(b'A'); WORD_LENGTH];
    for (i, &played) in guess.chars().iter().enumerate() {
        let mark = marks[i].unwrap_or_else(|| {
            let pool = &mut unmatched[letter_index(played)];
            if *pool > 0 {
                *pool -= 1;
                Mark::Present
            } else {
                Mark::Absent
            }
        });
        cells[i] = Cell {
            letter: played,
            mark,
        };
    }
    cells
}

/// Scalar score of an evaluation: Exact = 1, Present = 0.5, Absent = 0
#[must_use]
pub fn info_score(guess: &Word, answer: &Word) -> f64 {
    evaluate(guess, answer).iter().map(|cell| cell.mark.score()).sum()
}
