//! Score buckets
//!
//! Every scoring strategy hands back a `Ranking`: words grouped by score,
//! best bucket first. Scores are normalized by the best score and rounded to
//! two decimals (half-up), so words that round to the same value share a bucket.

use crate::core::Word;
use crate::error::{Error, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Decimal places kept for normalized bucket scores
pub const BUCKET_DECIMALS: u32 = 2;

/// Round half away from zero to a number of decimal places
///
/// Rounds the shortest decimal form of `value`, so `0.285` becomes `0.29` even
/// though the nearest `f64` lies just below the midpoint. Values a `Decimal`
/// cannot hold are returned unchanged.
///
/// # Examples
/// ```
/// use wordle_helper::solver::round_half_up;
///
/// assert_eq!(round_half_up(0.285, 2), 0.29);
/// assert_eq!(round_half_up(-0.125, 2), -0.13);
/// ```
#[must_use]
pub fn round_half_up(value: f64, decimals: u32) -> f64 {
    to_decimal(value)
        .map(|d| d.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero))
        .and_then(from_decimal)
        .unwrap_or(value)
}

/// Shortest decimal form of a finite `f64`
pub(crate) fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    value.to_string().parse().ok()
}

/// Nearest `f64` to a decimal
pub(crate) fn from_decimal(value: Decimal) -> Option<f64> {
    value.to_string().parse().ok()
}

/// Words sharing one score
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub score: f64,
    pub words: Vec<Word>,
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}: ", self.score)?;
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}

/// Buckets ordered by descending score
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    buckets: Vec<Bucket>,
}

impl Ranking {
    /// Group scores after dividing each by the maximum and rounding to two decimals
    ///
    /// A zero (or empty) maximum leaves scores as they are.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Word;
    /// use wordle_helper::solver::Ranking;
    ///
    /// let scores = vec![
    ///     (Word::new("crane").unwrap(), 8.0),
    ///     (Word::new("slate").unwrap(), 4.0),
    ///     (Word::new("trace").unwrap(), 7.99),
    /// ];
    /// let ranking = Ranking::normalized(scores);
    ///
    /// assert_eq!(ranking.buckets().len(), 2);
    /// assert_eq!(ranking.buckets()[0].words.len(), 2);
    /// assert!((ranking.buckets()[1].score - 0.5).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn normalized(scores: Vec<(Word, f64)>) -> Self {
        let max = scores.iter().map(|(_, s)| *s).fold(0.0, f64::max);
        if max == 0.0 {
            return Self::grouped(scores);
        }
        Self::grouped(
            scores
                .into_iter()
                .map(|(word, score)| (word, round_half_up(score / max, BUCKET_DECIMALS)))
                .collect(),
        )
    }

    /// Group scores by exact value, without normalizing
    #[must_use]
    pub fn grouped(mut scores: Vec<(Word, f64)>) -> Self {
        scores.sort_by(|(w1, s1), (w2, s2)| s2.total_cmp(s1).then_with(|| w1.cmp(w2)));

        let mut buckets: Vec<Bucket> = Vec::new();
        for (word, score) in scores {
            match buckets.last_mut() {
                Some(bucket) if bucket.score.total_cmp(&score).is_eq() => bucket.words.push(word),
                _ => buckets.push(Bucket {
                    score,
                    words: vec![word],
                }),
            }
        }
        Self { buckets }
    }

    /// Sum each word's bucket scores over several rankings and regroup
    ///
    /// Sums are rounded to two decimals but not normalized.
    ///
    /// # Errors
    /// Returns `Error::State` when fewer than two rankings are given.
    pub fn combine(rankings: &[&Self]) -> Result<Self> {
        if rankings.len() < 2 {
            return Err(Error::State(
                "Need at least two rankings to combine".to_string(),
            ));
        }

        let mut totals: FxHashMap<&Word, f64> = FxHashMap::default();
        for ranking in rankings {
            for bucket in &ranking.buckets {
                for word in &bucket.words {
                    *totals.entry(word).or_insert(0.0) += bucket.score;
                }
            }
        }

        Ok(Self::grouped(
            totals
                .into_iter()
                .map(|(word, total)| (word.clone(), round_half_up(total, BUCKET_DECIMALS)))
                .collect(),
        ))
    }

    /// Keep only the `n` best buckets
    #[must_use]
    pub fn top(mut self, n: usize) -> Self {
        self.buckets.truncate(n);
        self
    }

    /// Keep only words contained in `words`, dropping buckets left empty
    #[must_use]
    pub fn retain_words(&self, words: &FxHashSet<&Word>) -> Self {
        let buckets = self
            .buckets
            .iter()
            .filter_map(|bucket| {
                let kept: Vec<Word> = bucket
                    .words
                    .iter()
                    .filter(|w| words.contains(w))
                    .cloned()
                    .collect();
                (!kept.is_empty()).then_some(Bucket {
                    score: bucket.score,
                    words: kept,
                })
            })
            .collect();
        Self { buckets }
    }

    #[inline]
    #[must_use]
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// The best bucket, if any word was scored
    #[must_use]
    pub fn best(&self) -> Option<&Bucket> {
        self.buckets.first()
    }

    /// Total number of ranked words
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.buckets.iter().map(|b| b.words.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
