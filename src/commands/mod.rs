//! Command implementations

pub mod interactive;
pub mod solve;
pub mod starters;

pub use interactive::{Command, run_interactive};
pub use solve::{SolveConfig, SolveResult, SolveStep, pick_answer, solve_word};
pub use starters::{ReferenceAnalysis, StarterReport, analyze_starters};
