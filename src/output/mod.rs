//! Terminal output formatting
//!
//! Colored rendering of turns, letter info, rankings and command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_game, print_help, print_ranking, print_report, print_solve_result, print_starter_report,
};
