//! Word list loading
//!
//! Every non-blank line must be a valid word; the first invalid line rejects
//! the whole list.

use crate::core::Word;
use crate::error::{Error, Result};
use anyhow::Context;
use log::{info, warn};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Parse word list content
///
/// Blank lines are skipped, words are upper-cased and duplicates are dropped,
/// keeping the first occurrence.
///
/// # Errors
/// Returns `Error::WordList` with the 1-based line number of the first invalid line.
///
/// # Examples
/// ```
/// use wordle_helper::wordlists::parse_word_list;
///
/// let words = parse_word_list("crane\n\nslate\nCRANE\n").unwrap();
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].to_string(), "CRANE");
///
/// assert!(parse_word_list("crane\ncranes\n").is_err());
/// ```
pub fn parse_word_list(content: &str) -> Result<Vec<Word>> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let word = Word::new(trimmed).map_err(|err| Error::WordList {
            line: index + 1,
            reason: err.to_string(),
        })?;
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Load a word list file
///
/// # Errors
/// Fails when the file cannot be read or contains an invalid line.
///
/// # Examples
/// ```no_run
/// use wordle_helper::wordlists::load_word_list;
///
/// let words = load_word_list("all_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_word_list<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;
    parse_loaded(path, &content)
}

/// Load a word list that may be absent
///
/// A missing file yields an empty list and a warning.
///
/// # Errors
/// Fails when the file exists but cannot be read or parsed.
pub fn load_optional_word_list<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Word>> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => parse_loaded(path, &content),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!("{} not found, continuing without it", path.display());
            Ok(Vec::new())
        }
        Err(err) => {
            Err(err).with_context(|| format!("Failed to read word list {}", path.display()))
        }
    }
}

fn parse_loaded(path: &Path, content: &str) -> anyhow::Result<Vec<Word>> {
    let words = parse_word_list(content)
        .with_context(|| format!("Failed to parse word list {}", path.display()))?;

    info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_blank_lines_and_uppercases() {
        let words = parse_word_list("crane\n   \n\nSlate\n").unwrap();
        let text: Vec<String> = words.iter().map(ToString::to_string).collect();
        assert_eq!(text, ["CRANE", "SLATE"]);
    }

    #[test]
    fn parse_drops_duplicates_keeping_first() {
        let words = parse_word_list("trace\ncrane\nTRACE\ncrane\n").unwrap();
        let text: Vec<String> = words.iter().map(ToString::to_string).collect();
        assert_eq!(text, ["TRACE", "CRANE"]);
    }

    #[test]
    fn parse_reports_line_of_invalid_word() {
        let err = parse_word_list("crane\n\nabc\n").unwrap_err();
        assert!(matches!(err, Error::WordList { line: 3, .. }));

        let err = parse_word_list("cr4ne\n").unwrap_err();
        assert!(matches!(err, Error::WordList { line: 1, .. }));
    }

    #[test]
    fn parse_empty_content() {
        assert!(parse_word_list("").unwrap().is_empty());
    }

    #[test]
    fn missing_required_list_is_an_error() {
        assert!(load_word_list("does/not/exist.txt").is_err());
    }

    #[test]
    fn missing_optional_list_is_empty() {
        assert!(load_optional_word_list("does/not/exist.txt").unwrap().is_empty());
    }

    #[test]
    fn unreadable_optional_list_is_an_error() {
        // a directory exists but is not a readable file
        let dir = std::env::temp_dir();
        assert!(load_optional_word_list(&dir).is_err());
    }

    #[test]
    fn invalid_optional_list_is_an_error() {
        let path = std::env::temp_dir().join("wordle_helper_optional_invalid.txt");
        fs::write(&path, "crane
cranes
").unwrap();

        let err = load_optional_word_list(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse word list"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn load_reads_file() {
        let path = std::env::temp_dir().join("wordle_helper_loader_test.txt");
        fs::write(&path, "soare\narise\n").unwrap();

        let words = load_word_list(&path).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].to_string(), "ARISE");

        fs::remove_file(&path).unwrap();
    }
}
