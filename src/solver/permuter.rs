//! Letter permutations
//!
//! Lists the arrangements of letters known to be in the answer over the
//! positions not yet fixed, with `*` standing for any letter. Meant for
//! display, not for scoring.

use crate::core::{GameState, WORD_LENGTH};

const WILDCARD: u8 = b'*';

/// Generates placement patterns such as `E * * * T`
pub struct LetterPermuter;

impl LetterPermuter {
    /// All placements consistent with `state`, sorted
    ///
    /// Empty when more letters are required than there are open positions.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::{GameState, Turn};
    /// use wordle_helper::solver::LetterPermuter;
    ///
    /// let turns = [
    ///     Turn::parse("b e? e t? s").unwrap(),
    ///     Turn::parse("d u v e? t!").unwrap(),
    /// ];
    /// let patterns = LetterPermuter::generate(&GameState::from_turns(&turns));
    ///
    /// assert_eq!(patterns, ["E * * * T"]);
    /// ```
    #[must_use]
    pub fn generate(state: &GameState) -> Vec<String> {
        let known = state.known_letters();
        let open: Vec<usize> = (0..WORD_LENGTH).filter(|&i| known[i].is_none()).collect();

        let mut elements = required_letters(state);
        if elements.len() > open.len() {
            return Vec::new();
        }
        elements.resize(open.len(), WILDCARD);

        let mut arrangements = Vec::new();
        permute(state, &open, &mut Vec::with_capacity(open.len()), &mut elements, &mut arrangements);

        let mut patterns: Vec<String> = arrangements
            .into_iter()
            .map(|arrangement| render(known, &arrangement))
            .collect();
        patterns.sort();
        patterns
    }
}

/// Letters the answer must contain beyond those already fixed by position
fn required_letters(state: &GameState) -> Vec<u8> {
    let mut letters: Vec<u8> = state
        .constraints()
        .iter()
        .flat_map(|(letter, constraint)| std::iter::repeat_n(letter, usize::from(constraint.count())))
        .collect();

    for &letter in state.known_letters().iter().flatten() {
        if let Some(pos) = letters.iter().position(|&l| l == letter) {
            letters.remove(pos);
        }
    }
    letters
}

fn permute(
    state: &GameState,
    open: &[usize],
    prefix: &mut Vec<u8>,
    remaining: &mut Vec<u8>,
    out: &mut Vec<Vec<u8>>,
) {
    if remaining.is_empty() {
        out.push(prefix.clone());
        return;
    }
    let position = open[prefix.len()];

    let mut distinct = remaining.clone();
    distinct.sort_unstable();
    distinct.dedup();

    for element in distinct {
        if element != WILDCARD && state.is_forbidden(position, element) {
            continue;
        }
        let Some(index) = remaining.iter().position(|&e| e == element) else {
            continue;
        };
        remaining.remove(index);
        prefix.push(element);

        permute(state, open, prefix, remaining, out);

        prefix.pop();
        remaining.insert(index, element);
    }
}

fn render(known: &[Option<u8>; WORD_LENGTH], arrangement: &[u8]) -> String {
    let mut fill = arrangement.iter();
    known
        .iter()
        .map(|slot| {
            let letter = slot.or_else(|| fill.next().copied()).unwrap_or(WILDCARD);
            char::from(letter).to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}
