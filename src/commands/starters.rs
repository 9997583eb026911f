//! Starter word analysis
//!
//! Compares a list of candidate opening words against the starter list itself,
//! the full dictionary and the past results.

use crate::core::Word;
use crate::solver::scoring::score_by_info;
use crate::solver::{LetterFrequencies, Ranking, score_by_letter_frequency};

/// How the starters fare against one reference list
pub struct ReferenceAnalysis {
    pub name: &'static str,
    pub word_count: usize,
    pub frequencies: LetterFrequencies,
    /// Starters ranked by the summed frequency of their letters in the reference list
    pub frequency_ranking: Ranking,
    /// Starters ranked by plain information score against the reference list
    pub info_ranking: Ranking,
}

/// Result of analyzing the starter words
pub struct StarterReport {
    pub starter_count: usize,
    pub references: Vec<ReferenceAnalysis>,
}

/// Analyze `starters` against themselves, the dictionary and the past results
///
/// An empty past-results list is skipped.
#[must_use]
pub fn analyze_starters(starters: &[Word], dictionary: &[Word], past_results: &[Word]) -> StarterReport {
    let starter_refs: Vec<&Word> = starters.iter().collect();

    let references = [
        ("starter words", starters),
        ("all words", dictionary),
        ("past results", past_results),
    ]
    .into_iter()
    .filter(|(_, words)| !words.is_empty())
    .map(|(name, words)| {
        let frequencies = LetterFrequencies::calculate(words);
        let frequency_ranking = score_by_letter_frequency(&frequencies, starters);
        let reference: Vec<&Word> = words.iter().collect();
        let info_ranking = score_by_info(&starter_refs, &reference);
        ReferenceAnalysis {
            name,
            word_count: words.len(),
            frequencies,
            frequency_ranking,
            info_ranking,
        }
    })
    .collect();

    StarterReport {
        starter_count: starters.len(),
        references,
    }
}
