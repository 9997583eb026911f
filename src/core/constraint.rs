//! Letter occurrence constraints
//!
//! Knowledge about how often one letter occurs in the hidden answer evolves as:
//!
//! ```text
//! AtLeast(0) --Absent--> ExactlyEqual(0)                  (letter excluded)
//! AtLeast(k) --Exact/Present--> AtLeast(k + 1)
//! AtLeast(k) --Absent--> ExactlyEqual(k)                  (count known)
//! ```
//!
//! `ExactlyEqual` is terminal and absorbs anything it is merged with.

use super::{ALPHABET_SIZE, Mark, letter_from_index, letter_index};
use std::fmt;

/// Knowledge state for one letter's occurrence count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountConstraint {
    /// The letter occurs at least this many times
    AtLeast(u8),
    /// The letter occurs exactly this many times
    ExactlyEqual(u8),
}

impl Default for CountConstraint {
    fn default() -> Self {
        Self::AtLeast(0)
    }
}

impl CountConstraint {
    /// Derive the next constraint from one more observation of the letter in a turn
    ///
    /// An Absent mark pins the count to what has been located so far. Any other
    /// mark raises the threshold by one; an `ExactlyEqual` is raised as well,
    /// which only happens for inconsistent feedback.
    #[must_use]
    pub const fn update(self, mark: Mark) -> Self {
        match (self, mark) {
            (Self::AtLeast(n) | Self::ExactlyEqual(n), Mark::Absent) => Self::ExactlyEqual(n),
            (Self::AtLeast(n), _) => Self::AtLeast(n + 1),
            (Self::ExactlyEqual(n), _) => Self::ExactlyEqual(n + 1),
        }
    }

    /// Combine with a constraint learned elsewhere, keeping the stricter knowledge
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::CountConstraint::{AtLeast, ExactlyEqual};
    ///
    /// assert_eq!(AtLeast(1).merge(AtLeast(2)), AtLeast(2));
    /// assert_eq!(AtLeast(3).merge(ExactlyEqual(1)), ExactlyEqual(1));
    /// assert_eq!(ExactlyEqual(1).merge(AtLeast(3)), ExactlyEqual(1));
    /// ```
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Self::ExactlyEqual(_), _) => self,
            (Self::AtLeast(_), Self::ExactlyEqual(_)) => other,
            (Self::AtLeast(a), Self::AtLeast(b)) => Self::AtLeast(a.max(b)),
        }
    }

    /// Whether a word holding the letter `observed` times satisfies the constraint
    #[inline]
    #[must_use]
    pub const fn matches(self, observed: u8) -> bool {
        match self {
            Self::AtLeast(n) => observed >= n,
            Self::ExactlyEqual(n) => observed == n,
        }
    }

    /// The count carried by the constraint (minimum or exact)
    #[inline]
    #[must_use]
    pub const fn count(self) -> u8 {
        match self {
            Self::AtLeast(n) | Self::ExactlyEqual(n) => n,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_exact(self) -> bool {
        matches!(self, Self::ExactlyEqual(_))
    }

    /// Whether the letter is known not to occur at all
    #[inline]
    #[must_use]
    pub const fn is_excluded(self) -> bool {
        matches!(self, Self::ExactlyEqual(0))
    }
}

impl fmt::Display for CountConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtLeast(n) => write!(f, "count >= {n}"),
            Self::ExactlyEqual(n) => write!(f, "count = {n}"),
        }
    }
}

/// One optional constraint per letter of the alphabet
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LetterConstraints {
    slots: [Option<CountConstraint>; ALPHABET_SIZE],
}

impl LetterConstraints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded constraint for a letter, if any
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<CountConstraint> {
        self.slots[letter_index(letter)]
    }

    pub fn insert(&mut self, letter: u8, constraint: CountConstraint) {
        self.slots[letter_index(letter)] = Some(constraint);
    }

    /// Fold one observation of a letter into its constraint, seeding at `AtLeast(0)`
    pub fn register(&mut self, letter: u8, mark: Mark) {
        let slot = &mut self.slots[letter_index(letter)];
        *slot = Some(slot.unwrap_or_default().update(mark));
    }

    /// Merge a constraint into the one already recorded for the letter
    pub fn merge(&mut self, letter: u8, constraint: CountConstraint) {
        let slot = &mut self.slots[letter_index(letter)];
        *slot = Some(slot.map_or(constraint, |current| current.merge(constraint)));
    }

    /// Merge every constraint of `other` into this map
    pub fn merge_all(&mut self, other: &Self) {
        for (letter, constraint) in other.iter() {
            self.merge(letter, constraint);
        }
    }

    /// Iterate over `(letter, constraint)` pairs in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (u8, CountConstraint)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|c| (letter_from_index(i), c)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::CountConstraint::{AtLeast, ExactlyEqual};
    use super::*;

    const SAMPLES: [CountConstraint; 6] = [
        AtLeast(0),
        AtLeast(1),
        AtLeast(3),
        ExactlyEqual(0),
        ExactlyEqual(1),
        ExactlyEqual(2),
    ];

    #[test]
    fn update_absent_pins_count() {
        assert_eq!(AtLeast(0).update(Mark::Absent), ExactlyEqual(0));
        assert_eq!(AtLeast(2).update(Mark::Absent), ExactlyEqual(2));
        assert_eq!(ExactlyEqual(1).update(Mark::Absent), ExactlyEqual(1));
    }

    #[test]
    fn update_seen_raises_threshold() {
        assert_eq!(AtLeast(0).update(Mark::Present), AtLeast(1));
        assert_eq!(AtLeast(1).update(Mark::Exact), AtLeast(2));
        // inconsistent input: exact count is raised too
        assert_eq!(ExactlyEqual(1).update(Mark::Present), ExactlyEqual(2));
    }

    #[test]
    fn merge_is_idempotent() {
        for c in SAMPLES {
            assert_eq!(c.merge(c), c);
        }
    }

    #[test]
    fn exact_wins_over_minimum_in_any_order() {
        for n in 0..=3 {
            for m in 0..=5 {
                assert_eq!(ExactlyEqual(n).merge(AtLeast(m)), ExactlyEqual(n));
                assert_eq!(AtLeast(m).merge(ExactlyEqual(n)), ExactlyEqual(n));
            }
        }
    }

    #[test]
    fn merge_keeps_larger_minimum() {
        assert_eq!(AtLeast(1).merge(AtLeast(3)), AtLeast(3));
        assert_eq!(AtLeast(3).merge(AtLeast(1)), AtLeast(3));
    }

    #[test]
    fn matches_observed_counts() {
        assert!(AtLeast(0).matches(0));
        assert!(AtLeast(2).matches(3));
        assert!(!AtLeast(2).matches(1));
        assert!(ExactlyEqual(1).matches(1));
        assert!(!ExactlyEqual(1).matches(2));
        assert!(ExactlyEqual(0).matches(0));
    }

    #[test]
    fn letter_constraints_register_folds_turn() {
        // E?E? then a gray E: exactly two E's
        let mut constraints = LetterConstraints::new();
        constraints.register(b'E', Mark::Present);
        constraints.register(b'E', Mark::Exact);
        constraints.register(b'E', Mark::Absent);
        constraints.register(b'Z', Mark::Absent);

        assert_eq!(constraints.get(b'E'), Some(ExactlyEqual(2)));
        assert_eq!(constraints.get(b'Z'), Some(ExactlyEqual(0)));
        assert_eq!(constraints.get(b'A'), None);
        assert_eq!(constraints.len(), 2);
    }

    #[test]
    fn letter_constraints_merge_all() {
        let mut running = LetterConstraints::new();
        running.insert(b'A', AtLeast(1));
        running.insert(b'B', ExactlyEqual(0));

        let mut turn = LetterConstraints::new();
        turn.insert(b'A', ExactlyEqual(1));
        turn.insert(b'C', AtLeast(2));
        running.merge_all(&turn);

        let collected: Vec<_> = running.iter().collect();
        assert_eq!(
            collected,
            [
                (b'A', ExactlyEqual(1)),
                (b'B', ExactlyEqual(0)),
                (b'C', AtLeast(2))
            ]
        );
    }
}
