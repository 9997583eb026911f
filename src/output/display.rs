//! Display functions for command results

use super::formatters::{format_letter_info, format_turn, ranking_lines};
use crate::commands::{SolveResult, StarterReport};
use crate::core::{Turn, Word};
use crate::solver::{LetterPermuter, Ranking, Report, Session};
use colored::Colorize;

/// Placement patterns are only listed up to this many
const MAX_PATTERNS_SHOWN: usize = 30;

/// Print every turn, one colored line each
pub fn print_game(turns: &[Turn]) {
    for turn in turns {
        println!(" {}", format_turn(turn));
    }
}

pub fn print_help() {
    println!("<turn> - add a played turn, e.g. t?ales or co?u?rt!");
    println!("run     - evaluate the current turns again");
    println!("pop     - remove last saved turn");
    println!("new     - clear all turns");
    println!("exit    - stop");
}

/// Print a ranking under a title, at most `top` buckets
pub fn print_ranking(title: &str, ranking: &Ranking, top: usize) {
    println!("{}", title.bright_cyan());
    if ranking.is_empty() {
        println!("  (nothing to rank)");
    }
    for line in ranking_lines(ranking, top) {
        println!("  {line}");
    }
}

fn join_words(words: &[&Word]) -> String {
    words
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print the evaluation of the session's turns
pub fn print_report(session: &Session, report: &Report<'_>, top: usize) {
    println!("\n{}", "Processing game:".bold());
    print_game(session.turns());

    println!("{}", "Open letters:".bold());
    println!(" {}", format_letter_info(&report.state));

    let patterns = LetterPermuter::generate(&report.state);
    if patterns.len() <= MAX_PATTERNS_SHOWN {
        println!("{}", "Letter placements:".bold());
        for pattern in &patterns {
            println!("  {pattern}");
        }
    } else {
        println!("{} letter placements possible", patterns.len());
    }

    println!(
        "\nFound {} possible words:",
        report.candidates.len().to_string().bright_yellow().bold()
    );
    println!(" {}", join_words(&report.candidates));

    let Some(scores) = &report.scores else {
        return;
    };

    println!("\n{}", "Scoring by new information contents:".bold());
    print_ranking("(weighted)", &scores.new_info.weighted, top);
    print_ranking("(not weighted)", &scores.new_info.unweighted, top);
    print_ranking(
        "Possible results (weighted)",
        &scores.new_info_candidates,
        top,
    );

    println!();
    print_ranking(
        "Weighted by info based on all possible words:",
        &scores.info_candidates,
        top,
    );
    print_ranking(
        "Weighted by info from past results that are still possible:",
        &scores.info_possible_past,
        top,
    );
    print_ranking(
        "Weighted by info from all past results:",
        &scores.info_past,
        top,
    );
    if let Some(combined) = &scores.combined {
        print_ranking("All weights combined (summed up):", combined, top);
    }

    if let Some(split) = &scores.split {
        println!();
        print_ranking(
            "Scoring by word most likely to split the possible words in half:",
            split,
            top,
        );
    }
}

/// Print the turns played by the solve command
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("Solving: {}", result.answer.to_string().bright_yellow().bold());
    println!("{}", "─".repeat(40).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "Turn {}: {}  ({} candidates left)",
            i + 1,
            format_turn(&step.turn),
            step.candidates_after
        );
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("Solved in {} guesses", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the starter word analysis
pub fn print_starter_report(report: &StarterReport, top: usize) {
    println!(
        "Read {} starter words",
        report.starter_count.to_string().bright_yellow()
    );

    for reference in &report.references {
        println!(
            "\n{} ({} words)",
            reference.name.bright_cyan().bold(),
            reference.word_count
        );
        let frequencies = reference
            .frequencies
            .sorted()
            .iter()
            .map(|(letter, frequency)| format!("{}={frequency:.4}", char::from(*letter)))
            .collect::<Vec<_>>()
            .join(" ");
        println!("  {frequencies}");
        print_ranking("By letter frequency:", &reference.frequency_ranking, top);
        print_ranking("By info:", &reference.info_ranking, top);
    }
}
