//! Word supply
//!
//! Dictionaries, past results and starter lists are plain text files with one
//! word per line.

pub mod loader;

pub use loader::{load_optional_word_list, load_word_list, parse_word_list};
