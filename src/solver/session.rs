//! Interactive game session
//!
//! Ties the dictionary, the optional past results and the turns played so far
//! together, and produces the full evaluation report after each turn.

use super::scoring::{
    self, NewInfoScores, NewInfoWeights, Strategy, check_split_range, score_by_info,
    score_by_new_info, score_by_split,
};
use super::{LetterFrequencies, Ranking};
use crate::core::{GameState, Turn, Word};
use crate::error::{Error, Result};
use indicatif::ProgressBar;
use log::{debug, warn};
use rustc_hash::FxHashSet;
use std::time::Instant;

/// A game in progress
#[derive(Debug, Clone, Default)]
pub struct Session {
    dictionary: Vec<Word>,
    past_results: Vec<Word>,
    turns: Vec<Turn>,
}

/// Outcome of evaluating the turns of a session
#[derive(Debug, Clone)]
pub struct Report<'a> {
    pub state: GameState,
    pub candidates: Vec<&'a Word>,
    /// Present when at least two candidates remain
    pub scores: Option<Scores>,
}

/// Every ranking computed for a report
#[derive(Debug, Clone)]
pub struct Scores {
    /// New-information rankings over the whole dictionary
    pub new_info: NewInfoScores,
    /// Weighted new-information ranking restricted to the candidates
    pub new_info_candidates: Ranking,
    /// Candidates scored against the candidates
    pub info_candidates: Ranking,
    /// Candidates scored against the past results that are still possible
    pub info_possible_past: Ranking,
    /// Candidates scored against all past results
    pub info_past: Ranking,
    /// Sum of the three info rankings, when past results are known
    pub combined: Option<Ranking>,
    /// Split-evenness ranking, when more than one turn was played and the
    /// candidate count allows it
    pub split: Option<Ranking>,
}

impl Session {
    #[must_use]
    pub const fn new(dictionary: Vec<Word>, past_results: Vec<Word>) -> Self {
        Self {
            dictionary,
            past_results,
            turns: Vec::new(),
        }
    }

    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Remove the last turn, if any
    pub fn pop(&mut self) -> Option<Turn> {
        self.turns.pop()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub fn dictionary(&self) -> &[Word] {
        &self.dictionary
    }

    #[must_use]
    pub fn past_results(&self) -> &[Word] {
        &self.past_results
    }

    /// State folded from every turn played so far
    #[must_use]
    pub fn state(&self) -> GameState {
        GameState::from_turns(&self.turns)
    }

    /// Dictionary words still possible
    #[must_use]
    pub fn candidates(&self) -> Vec<&Word> {
        self.state().filter(&self.dictionary)
    }

    /// Evaluate the turns played so far
    ///
    /// # Errors
    /// Returns `Error::State` when no turn has been played.
    pub fn evaluate(&self) -> Result<Report<'_>> {
        self.evaluate_with_progress(|_| ProgressBar::hidden())
    }

    /// Evaluate the turns played so far, tracking split-evenness scoring
    ///
    /// `make_progress` is called only when the split ranking is computed,
    /// with the number of guesses to score. The bar is cleared once done.
    ///
    /// # Errors
    /// Returns `Error::State` when no turn has been played.
    pub fn evaluate_with_progress<F>(&self, make_progress: F) -> Result<Report<'_>>
    where
        F: FnOnce(u64) -> ProgressBar,
    {
        self.require_turns()?;

        let start = Instant::now();
        let state = self.state();
        let candidates = state.filter(&self.dictionary);
        debug!(
            "Filtered {} words to {} candidates in {:?}",
            self.dictionary.len(),
            candidates.len(),
            start.elapsed()
        );
        if candidates.is_empty() {
            warn!("No candidates left after {} turns", self.turns.len());
        }

        let scores = if candidates.len() < 2 {
            None
        } else {
            Some(self.score(&state, &candidates, make_progress)?)
        };

        Ok(Report {
            state,
            candidates,
            scores,
        })
    }

    fn score<F>(&self, state: &GameState, candidates: &[&Word], make_progress: F) -> Result<Scores>
    where
        F: FnOnce(u64) -> ProgressBar,
    {
        let candidate_set: FxHashSet<&Word> = candidates.iter().copied().collect();
        let dictionary: Vec<&Word> = self.dictionary.iter().collect();

        let start = Instant::now();
        let frequencies =
            LetterFrequencies::calculate_subtracting(candidates.iter().copied(), state.constraints());
        let new_info = score_by_new_info(
            state,
            &dictionary,
            candidates,
            &frequencies,
            &NewInfoWeights::default(),
        );
        let new_info_candidates = new_info.weighted.retain_words(&candidate_set);
        debug!("New-information scoring took {:?}", start.elapsed());

        let start = Instant::now();
        let possible_past: Vec<&Word> = self
            .past_results
            .iter()
            .filter(|word| candidate_set.contains(word))
            .collect();
        let past: Vec<&Word> = self.past_results.iter().collect();

        let info_candidates = score_by_info(candidates, candidates);
        let info_possible_past = score_by_info(candidates, &possible_past);
        let info_past = score_by_info(candidates, &past);
        let combined = if past.is_empty() {
            None
        } else {
            Some(Ranking::combine(&[
                &info_candidates,
                &info_possible_past,
                &info_past,
            ])?)
        };
        debug!("Info scoring took {:?}", start.elapsed());

        let split = if self.turns.len() > 1 && check_split_range(candidates.len()).is_ok() {
            let start = Instant::now();
            let progress = make_progress(dictionary.len() as u64);
            let ranking = score_by_split(state, &dictionary, candidates, Some(&progress));
            progress.finish_and_clear();
            let ranking = ranking?;
            debug!("Split scoring took {:?}", start.elapsed());
            Some(ranking)
        } else {
            None
        };

        Ok(Scores {
            new_info,
            new_info_candidates,
            info_candidates,
            info_possible_past,
            info_past,
            combined,
            split,
        })
    }

    /// The candidate to play next
    ///
    /// The single remaining candidate, or otherwise the best candidate ranked
    /// by `strategy` among the candidates. [`Strategy::Split`] falls back to
    /// weighted new information outside its candidate range. `None` when
    /// nothing is possible.
    ///
    /// # Errors
    /// Returns `Error::State` when no turn has been played.
    pub fn best_guess(&self, strategy: Strategy) -> Result<Option<Word>> {
        self.require_turns()?;

        let state = self.state();
        let candidates = state.filter(&self.dictionary);
        if candidates.len() < 2 {
            return Ok(candidates.first().map(|&word| word.clone()));
        }

        let strategy = if strategy == Strategy::Split && check_split_range(candidates.len()).is_err()
        {
            debug!("{} candidates, using weighted new information", candidates.len());
            Strategy::WeightedNewInfo
        } else {
            strategy
        };
        let frequencies =
            LetterFrequencies::calculate_subtracting(candidates.iter().copied(), state.constraints());
        let ranking = scoring::score(strategy, &state, &candidates, &candidates, &frequencies)?;

        Ok(ranking.best().and_then(|bucket| bucket.words.first().cloned()))
    }

    fn require_turns(&self) -> Result<()> {
        if self.turns.is_empty() {
            return Err(Error::State(
                "Need at least one turn; start with a word such as SOARE or ARISE".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn session(past: &[&str]) -> Session {
        Session::new(
            words(&[
                "crane", "slate", "trace", "grace", "brace", "react", "crate", "caret", "fuzzy",
                "cream", "ocean", "arena",
            ]),
            words(past),
        )
    }

    #[test]
    fn evaluate_without_turns_is_an_error() {
        assert!(matches!(session(&[]).evaluate(), Err(Error::State(_))));
        assert!(matches!(session(&[]).best_guess(Strategy::Info), Err(Error::State(_))));
    }

    #[test]
    fn push_pop_clear() {
        let mut s = session(&[]);
        s.push(Turn::parse("slate").unwrap());
        s.push(Turn::parse("fuzzy").unwrap());
        assert_eq!(s.turns().len(), 2);

        assert_eq!(s.pop().unwrap().to_string(), "FUZZY");
        assert_eq!(s.turns().len(), 1);

        s.clear();
        assert!(s.turns().is_empty());
        assert!(s.pop().is_none());
    }

    #[test]
    fn single_candidate_has_no_scores() {
        let mut s = session(&[]);
        s.push(Turn::from_evaluation(
            &Word::new("caret").unwrap(),
            &Word::new("trace").unwrap(),
        ));

        let report = s.evaluate().unwrap();
        let candidates: Vec<String> = report.candidates.iter().map(ToString::to_string).collect();
        assert_eq!(candidates, ["TRACE"]);
        assert!(report.scores.is_none());
    }

    #[test]
    fn no_candidates_left() {
        let mut s = session(&[]);
        s.push(Turn::parse("q!q!q!q!q!").unwrap());
        let report = s.evaluate().unwrap();
        assert!(report.candidates.is_empty());
        assert!(report.scores.is_none());
    }

    #[test]
    fn report_contains_every_ranking() {
        let mut s = session(&["trace", "ocean", "crate"]);
        // A and E present elsewhere, S, L, T excluded
        s.push(Turn::parse("s l a? t e?").unwrap());

        let report = s.evaluate().unwrap();
        assert_eq!(report.candidates.len(), 3);
        let scores = report.scores.unwrap();

        assert_eq!(scores.new_info.weighted.word_count(), s.dictionary().len());
        assert_eq!(scores.new_info_candidates.word_count(), report.candidates.len());
        assert_eq!(scores.info_candidates.word_count(), report.candidates.len());
        assert!(scores.combined.is_some());
        // one turn only
        assert!(scores.split.is_none());
    }

    #[test]
    fn split_needs_two_turns_and_range() {
        let mut s = Session::new(
            words(&["bakes", "cakes", "fakes", "makes", "lakes", "zzzzz"]),
            Vec::new(),
        );
        s.push(Turn::parse("zzzzz").unwrap());
        s.push(Turn::parse("t a! k! e! s!").unwrap());

        let pb = ProgressBar::hidden();
        let report = s
            .evaluate_with_progress(|len| {
                assert_eq!(len, 6);
                pb.clone()
            })
            .unwrap();
        assert_eq!(report.candidates.len(), 5);

        let scores = report.scores.unwrap();
        assert_eq!(scores.split.unwrap().word_count(), 6);
        assert_eq!(pb.position(), 6);
        assert!(scores.combined.is_none());
    }

    #[test]
    fn progress_only_requested_for_split() {
        let mut s = session(&[]);
        s.push(Turn::parse("s l a? t e?").unwrap());

        let mut requested = false;
        let report = s
            .evaluate_with_progress(|len| {
                requested = true;
                ProgressBar::new(len)
            })
            .unwrap();
        assert!(report.scores.is_some());
        assert!(!requested);
    }

    #[test]
    fn best_guess_is_a_candidate() {
        let mut s = session(&[]);
        s.push(Turn::parse("s l a? t e?").unwrap());

        for strategy in [Strategy::Info, Strategy::WeightedNewInfo, Strategy::Split] {
            let guess = s.best_guess(strategy).unwrap().unwrap();
            assert!(s.candidates().contains(&&guess), "{strategy:?}");
        }
    }

    #[test]
    fn best_guess_with_one_candidate() {
        let mut s = session(&[]);
        s.push(Turn::from_evaluation(
            &Word::new("caret").unwrap(),
            &Word::new("trace").unwrap(),
        ));
        assert_eq!(
            s.best_guess(Strategy::WeightedNewInfo).unwrap(),
            Some(Word::new("trace").unwrap())
        );
    }
}
