//! Game state derived from the turn history
//!
//! The state is never edited in place by callers: it is rebuilt by folding every
//! played turn, or extended into a new hypothetical state for scoring.

use super::{CountConstraint, LetterConstraints, Mark, Turn, WORD_LENGTH, Word, letter_index};

/// Everything the turn history reveals about the hidden answer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    known: [Option<u8>; WORD_LENGTH],
    forbidden: [u32; WORD_LENGTH],
    constraints: LetterConstraints,
}

/// Fold the cells of a single turn into per-letter constraints
///
/// Each letter starts at `AtLeast(0)` and is updated once per cell it occupies.
#[must_use]
pub fn turn_constraints(turn: &Turn) -> LetterConstraints {
    let mut constraints = LetterConstraints::new();
    for cell in turn.cells() {
        constraints.register(cell.letter, cell.mark);
    }
    constraints
}

impl GameState {
    /// Build the state for a full turn history
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::{GameState, Turn, Word};
    ///
    /// let turns = [Turn::parse("c?r!a!ne!").unwrap()];
    /// let state = GameState::from_turns(&turns);
    ///
    /// assert!(state.matches(&Word::new("trace").unwrap()));
    /// assert!(!state.matches(&Word::new("crane").unwrap()));
    /// ```
    #[must_use]
    pub fn from_turns(turns: &[Turn]) -> Self {
        let mut state = Self::default();
        for turn in turns {
            state.apply(turn);
        }
        state
    }

    /// A new state with one more turn folded in
    #[must_use]
    pub fn with_turn(&self, turn: &Turn) -> Self {
        let mut state = self.clone();
        state.apply(turn);
        state
    }

    fn apply(&mut self, turn: &Turn) {
        for (i, cell) in turn.cells().iter().enumerate() {
            if cell.mark == Mark::Exact {
                self.known[i] = Some(cell.letter);
            } else {
                self.forbidden[i] |= 1 << letter_index(cell.letter);
            }
        }
        self.constraints.merge_all(&turn_constraints(turn));
    }

    /// Whether a word is consistent with everything known so far
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        let positions_ok = word.chars().iter().enumerate().all(|(i, &letter)| {
            self.known[i].is_none_or(|known| known == letter) && !self.is_forbidden(i, letter)
        });
        positions_ok
            && self
                .constraints
                .iter()
                .all(|(letter, constraint)| constraint.matches(word.count_of(letter)))
    }

    /// Whether `letter` has been ruled out at `position`
    #[inline]
    #[must_use]
    pub fn is_forbidden(&self, position: usize, letter: u8) -> bool {
        self.forbidden[position] & (1 << letter_index(letter)) != 0
    }

    /// Letters known by position
    #[inline]
    #[must_use]
    pub const fn known_letters(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.known
    }

    /// The merged count constraint of every letter seen so far
    #[inline]
    #[must_use]
    pub const fn constraints(&self) -> &LetterConstraints {
        &self.constraints
    }

    #[inline]
    #[must_use]
    pub fn constraint_for(&self, letter: u8) -> Option<CountConstraint> {
        self.constraints.get(letter)
    }

    /// Filter a word list down to the words consistent with this state
    #[must_use]
    pub fn filter<'a>(&self, words: &'a [Word]) -> Vec<&'a Word> {
        words.iter().filter(|word| self.matches(word)).collect()
    }
}
