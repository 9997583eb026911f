//! Plain information score
//!
//! Sums the green/yellow score of a guess against every reference word.

use crate::core::{Word, info_score};
use crate::solver::Ranking;
use rayon::prelude::*;

/// Total mark score of `guess` over all reference words
#[must_use]
pub fn calculate_info_score(guess: &Word, reference: &[&Word]) -> f64 {
    reference.iter().map(|answer| info_score(guess, answer)).sum()
}

/// Rank guesses by their plain information score against the reference words
///
/// # Examples
/// ```
/// use wordle_helper::core::Word;
/// use wordle_helper::solver::scoring::score_by_info;
///
/// let guesses = [Word::new("crane").unwrap(), Word::new("fuzzy").unwrap()];
/// let reference = [Word::new("trace").unwrap(), Word::new("brace").unwrap()];
/// let guess_refs: Vec<&Word> = guesses.iter().collect();
/// let reference_refs: Vec<&Word> = reference.iter().collect();
///
/// let ranking = score_by_info(&guess_refs, &reference_refs);
/// assert_eq!(ranking.best().unwrap().words[0].to_string(), "CRANE");
/// ```
#[must_use]
pub fn score_by_info(guesses: &[&Word], reference: &[&Word]) -> Ranking {
    let scores = guesses
        .par_iter()
        .map(|&guess| (guess.clone(), calculate_info_score(guess, reference)))
        .collect();
    Ranking::normalized(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn info_score_sums_over_reference() {
        let guess = Word::new("crane").unwrap();
        let reference = words(&["trace", "crane"]);
        let refs: Vec<&Word> = reference.iter().collect();
        // 3.5 against TRACE, 5 against itself
        assert!((calculate_info_score(&guess, &refs) - 8.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_reference_scores_zero() {
        let guess = Word::new("crane").unwrap();
        assert!(calculate_info_score(&guess, &[]).abs() < f64::EPSILON);
    }

    #[test]
    fn ranking_is_normalized_to_best() {
        let guesses = words(&["crane", "slate", "fuzzy"]);
        let reference = words(&["trace", "grace", "brace"]);
        let guess_refs: Vec<&Word> = guesses.iter().collect();
        let reference_refs: Vec<&Word> = reference.iter().collect();

        let ranking = score_by_info(&guess_refs, &reference_refs);
        let best = ranking.best().unwrap();
        assert!((best.score - 1.0).abs() < f64::EPSILON);
        assert_eq!(best.words, [Word::new("crane").unwrap()]);
        assert_eq!(ranking.word_count(), 3);
    }
}
