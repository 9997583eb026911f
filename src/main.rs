//! Wordle Helper - CLI
//!
//! Interactive helper that suggests the next guess from the turns played so far.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_helper::{
    commands::{SolveConfig, analyze_starters, pick_answer, run_interactive, solve_word},
    core::Word,
    output::{print_solve_result, print_starter_report},
    solver::{Session, Strategy},
    wordlists::{load_optional_word_list, load_word_list},
};

#[derive(Parser)]
#[command(
    name = "wordle_helper",
    about = "Wordle helper that narrows the dictionary and ranks the next guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary of every allowed word, one per line
    #[arg(short = 'w', long, global = true, default_value = "all_words.txt")]
    words: PathBuf,

    /// Past answers, one per line (optional)
    #[arg(short = 'p', long, global = true, default_value = "past_results.txt")]
    past_results: PathBuf,

    /// Number of score buckets printed per ranking
    #[arg(short = 'n', long, global = true, default_value = "10")]
    top: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter played turns line by line (default)
    Interactive,

    /// Analyze a list of opening words
    Starters {
        /// Starter words, one per line
        #[arg(short, long, default_value = "words.txt")]
        starters: PathBuf,
    },

    /// Let the helper play a hidden word
    Solve {
        /// The hidden word (random past result when omitted)
        word: Option<String>,

        /// First word to play
        #[arg(short, long, default_value = "SOARE")]
        first_word: String,

        /// Ranking used to pick the next guess: info, new-info, weighted, split
        #[arg(short, long, default_value = "weighted")]
        strategy: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let dictionary = load_word_list(&cli.words)?;
    let past_results = load_optional_word_list(&cli.past_results)?;

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Interactive);

    match command {
        Commands::Interactive => {
            let mut session = Session::new(dictionary, past_results);
            run_interactive(io::stdin().lock(), &mut session, cli.top)
                .context("Failed to read input")
        }
        Commands::Starters { starters } => {
            let starters = load_word_list(&starters)?;
            let report = analyze_starters(&starters, &dictionary, &past_results);
            print_starter_report(&report, cli.top);
            Ok(())
        }
        Commands::Solve {
            word,
            first_word,
            strategy,
        } => run_solve_command(
            word.as_deref(),
            &first_word,
            &strategy,
            dictionary,
            past_results,
        ),
    }
}

fn run_solve_command(
    word: Option<&str>,
    first_word: &str,
    strategy_name: &str,
    dictionary: Vec<Word>,
    past_results: Vec<Word>,
) -> Result<()> {
    let answer = match word {
        Some(text) => Word::new(text).with_context(|| format!("Invalid word: {text}"))?,
        None => pick_answer(&dictionary, &past_results, &mut rand::rng())
            .context("No words to pick an answer from")?,
    };
    let first_word =
        Word::new(first_word).with_context(|| format!("Invalid first word: {first_word}"))?;

    let mut config = SolveConfig::new(answer, first_word);
    config.strategy = Strategy::from_name(strategy_name)?;

    let mut session = Session::new(dictionary, past_results);
    let result = solve_word(config, &mut session)?;
    print_solve_result(&result);
    Ok(())
}
