//! Letter frequency calculation
//!
//! Relative frequency of each letter over a word collection, optionally with
//! already-known occurrences subtracted so that only new information counts.

use super::ranking::{Ranking, from_decimal, to_decimal};
use crate::core::{LetterConstraints, WORD_LENGTH, Word};
use rust_decimal::{Decimal, RoundingStrategy};
use rustc_hash::FxHashMap;

/// Significant digits kept for every frequency
pub const FREQUENCY_SIGNIFICANT_DIGITS: u32 = 7;

/// Round half-up to a number of significant digits
#[must_use]
pub fn round_significant(value: f64, digits: u32) -> f64 {
    if value == 0.0 {
        return value;
    }
    to_decimal(value)
        .and_then(|d| round_decimal_significant(d, digits))
        .unwrap_or(value)
}

fn round_decimal_significant(value: Decimal, digits: u32) -> Option<f64> {
    value
        .round_sf_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero)
        .and_then(from_decimal)
}

/// `count / total` computed exactly, then rounded to the kept significant digits
fn frequency_ratio(count: i64, total: i64) -> f64 {
    Decimal::from(count)
        .checked_div(Decimal::from(total))
        .and_then(|ratio| round_decimal_significant(ratio, FREQUENCY_SIGNIFICANT_DIGITS))
        .unwrap_or(count as f64 / total as f64)
}

/// Relative frequency per letter; letters never seen have frequency zero
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LetterFrequencies {
    by_letter: FxHashMap<u8, f64>,
}

impl LetterFrequencies {
    /// Frequencies of the letters in `words`
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Word;
    /// use wordle_helper::solver::LetterFrequencies;
    ///
    /// let words = [Word::new("abide").unwrap(), Word::new("aback").unwrap()];
    /// let frequencies = LetterFrequencies::calculate(&words);
    ///
    /// assert!((frequencies.get(b'A') - 0.3).abs() < 1e-9);
    /// assert!(frequencies.get(b'Z').abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn calculate<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        Self::calculate_subtracting(words, &LetterConstraints::new())
    }

    /// Frequencies of the letters in `words`, minus the occurrences `known` already accounts for
    ///
    /// Every non-zero constraint count is subtracted once per word from both the
    /// letter's count and the total. A letter whose adjusted count drops below zero,
    /// or any letter when the adjusted total is not positive, gets frequency zero.
    #[must_use]
    pub fn calculate_subtracting<'a, I>(words: I, known: &LetterConstraints) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let mut counts: FxHashMap<u8, i64> = FxHashMap::default();
        let mut word_count: i64 = 0;
        for word in words {
            word_count += 1;
            for &letter in word.chars() {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }

        let mut total = WORD_LENGTH as i64 * word_count;
        for (letter, constraint) in known.iter() {
            let subtrahend = i64::from(constraint.count()) * word_count;
            if subtrahend != 0 {
                *counts.entry(letter).or_insert(0) -= subtrahend;
                total -= subtrahend;
            }
        }

        let by_letter = counts
            .into_iter()
            .map(|(letter, count)| {
                let frequency = if total <= 0 || count < 0 {
                    0.0
                } else {
                    frequency_ratio(count, total)
                };
                (letter, frequency)
            })
            .collect();
        Self { by_letter }
    }

    /// Frequency of a letter, zero when it never occurred
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> f64 {
        self.by_letter.get(&letter).copied().unwrap_or(0.0)
    }

    /// `(letter, frequency)` pairs, most frequent first
    #[must_use]
    pub fn sorted(&self) -> Vec<(u8, f64)> {
        let mut pairs: Vec<(u8, f64)> = self.by_letter.iter().map(|(&l, &f)| (l, f)).collect();
        pairs.sort_by(|(l1, f1), (l2, f2)| f2.total_cmp(f1).then(l1.cmp(l2)));
        pairs
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_letter.is_empty()
    }
}

/// Score words by the summed frequency of their letters, grouped without normalizing
#[must_use]
pub fn score_by_letter_frequency(frequencies: &LetterFrequencies, words: &[Word]) -> Ranking {
    Ranking::grouped(
        words
            .iter()
            .map(|word| {
                let score: f64 = word.chars().iter().map(|&l| frequencies.get(l)).sum();
                (word.clone(), round_significant(score, FREQUENCY_SIGNIFICANT_DIGITS))
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CountConstraint;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn frequency_of_two_words() {
        let list = words(&["ABIDE", "ABACK"]);
        let frequencies = LetterFrequencies::calculate(&list);

        assert!((frequencies.get(b'A') - 0.3).abs() < 1e-9);
        assert!((frequencies.get(b'B') - 0.2).abs() < 1e-9);
        assert!((frequencies.get(b'K') - 0.1).abs() < 1e-9);
    }

    #[test]
    fn frequencies_sum_to_one() {
        let list = words(&["CRANE", "SLATE", "TRACE", "GRAZE"]);
        let frequencies = LetterFrequencies::calculate(&list);
        let total: f64 = frequencies.sorted().iter().map(|(_, f)| f).sum();
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn known_counts_are_subtracted() {
        let list = words(&["ABIDE", "ABACK"]);
        let mut known = LetterConstraints::new();
        known.insert(b'A', CountConstraint::AtLeast(1));
        known.insert(b'Z', CountConstraint::ExactlyEqual(0));

        let frequencies = LetterFrequencies::calculate_subtracting(&list, &known);
        // A: 3 - 2 = 1 over 10 - 2 = 8
        assert!((frequencies.get(b'A') - 0.125).abs() < 1e-9);
        assert!((frequencies.get(b'B') - 0.25).abs() < 1e-9);
    }

    #[test]
    fn negative_adjusted_count_is_zero() {
        let list = words(&["ABIDE"]);
        let mut known = LetterConstraints::new();
        known.insert(b'Z', CountConstraint::AtLeast(1));

        let frequencies = LetterFrequencies::calculate_subtracting(&list, &known);
        assert!(frequencies.get(b'Z').abs() < f64::EPSILON);
        assert!((frequencies.get(b'A') - 0.25).abs() < 1e-9);
    }

    #[test]
    fn non_positive_total_gives_zero_everywhere() {
        let list = words(&["AAAAA"]);
        let mut known = LetterConstraints::new();
        known.insert(b'A', CountConstraint::ExactlyEqual(5));

        let frequencies = LetterFrequencies::calculate_subtracting(&list, &known);
        assert!(frequencies.get(b'A').abs() < f64::EPSILON);
    }

    #[test]
    fn empty_collection() {
        let frequencies = LetterFrequencies::calculate(&[]);
        assert!(frequencies.is_empty());
    }

    #[test]
    fn round_significant_keeps_seven_digits() {
        assert!((round_significant(1.0 / 3.0, 7) - 0.333_333_3).abs() < 1e-12);
        assert!((round_significant(2.0 / 3.0, 7) - 0.666_666_7).abs() < 1e-12);
        assert!((round_significant(12.345_678_9, 7) - 12.345_68).abs() < 1e-9);
        assert!(round_significant(0.0, 7).abs() < f64::EPSILON);
    }

    #[test]
    fn round_significant_ties_round_up() {
        assert_eq!(round_significant(0.123_456_75, 7), 0.123_456_8);
        assert_eq!(round_significant(28.5, 2), 29.0);
        // 1/2048 = 0.00048828125
        assert_eq!(frequency_ratio(1, 2048), 0.000_488_281_3);
        assert_eq!(frequency_ratio(1, 3), 0.333_333_3);
    }

    #[test]
    fn letter_frequency_score_prefers_common_letters() {
        let list = words(&["EERIE", "ARISE", "QUACK"]);
        let frequencies = LetterFrequencies::calculate(&list);
        let ranking = score_by_letter_frequency(&frequencies, &list);
        assert_eq!(ranking.best().unwrap().words[0].to_string(), "EERIE");
    }
}
