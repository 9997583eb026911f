//! Interactive line mode
//!
//! Reads one command or played turn per line and prints the evaluation after
//! every turn. A failing line is reported and the loop goes on.

use crate::core::Turn;
use crate::error::Result;
use crate::output::{print_game, print_help, print_report};
use crate::solver::Session;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    /// Drop the last turn
    Pop,
    /// Drop every turn
    New,
    /// Evaluate the current turns again
    Run,
    Help,
    /// A played turn in `c?ra!ne` notation
    Play(Turn),
    Empty,
}

impl Command {
    /// Parse one input line
    ///
    /// # Errors
    /// Returns `Error::Format` when the line is neither a command nor a valid turn.
    pub fn parse(line: &str) -> Result<Self> {
        match line.trim() {
            "" => Ok(Self::Empty),
            "exit" => Ok(Self::Exit),
            "pop" => Ok(Self::Pop),
            "new" => Ok(Self::New),
            "run" => Ok(Self::Run),
            "help" => Ok(Self::Help),
            notation => Turn::parse(notation).map(Self::Play),
        }
    }
}

/// What the loop does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Evaluate,
    Stop,
}

/// Apply a command to the session
#[must_use]
pub fn apply(command: Command, session: &mut Session) -> Flow {
    match command {
        Command::Exit => Flow::Stop,
        Command::Pop => {
            session.pop();
            print_game(session.turns());
            Flow::Continue
        }
        Command::New => {
            session.clear();
            println!("Removed all turns");
            Flow::Continue
        }
        Command::Run => Flow::Evaluate,
        Command::Help => {
            print_help();
            Flow::Continue
        }
        Command::Play(turn) => {
            session.push(turn);
            Flow::Evaluate
        }
        Command::Empty => Flow::Continue,
    }
}

/// Run the interactive loop until `exit` or end of input
///
/// # Errors
/// Returns an error only when reading input or flushing output fails.
pub fn run_interactive<R: BufRead>(input: R, session: &mut Session, top: usize) -> io::Result<()> {
    println!("Enter a played turn such as {} or type 'help'", "t?ales".bold());

    let mut lines = input.lines();
    loop {
        print!("Input: ");
        io::stdout().flush()?;
        let Some(line) = lines.next().transpose()? else {
            return Ok(());
        };

        let result = Command::parse(&line).and_then(|command| match apply(command, session) {
            Flow::Stop => Ok(Flow::Stop),
            Flow::Continue => Ok(Flow::Continue),
            Flow::Evaluate => evaluate(session, top).map(|()| Flow::Continue),
        });

        match result {
            Ok(Flow::Stop) => return Ok(()),
            Ok(_) => {}
            Err(err) => {
                println!("{} {err}", "Error:".red().bold());
                println!("Type 'help' for help");
            }
        }
    }
}

fn evaluate(session: &Session, top: usize) -> Result<()> {
    let report = session.evaluate_with_progress(split_progress)?;
    print_report(session, &report, top);
    Ok(())
}

fn split_progress(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) =
        ProgressStyle::default_bar().template("Splitting {bar:40.cyan/blue} {pos}/{len} {eta}")
    {
        pb.set_style(style);
    }
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::error::Error;

    fn session() -> Session {
        let dictionary = ["crane", "slate", "trace", "cream", "ocean", "arena"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        Session::new(dictionary, Vec::new())
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("exit").unwrap(), Command::Exit);
        assert_eq!(Command::parse(" pop ").unwrap(), Command::Pop);
        assert_eq!(Command::parse("new").unwrap(), Command::New);
        assert_eq!(Command::parse("run").unwrap(), Command::Run);
        assert_eq!(Command::parse("help").unwrap(), Command::Help);
        assert_eq!(Command::parse("").unwrap(), Command::Empty);
        assert!(matches!(Command::parse("t?ales").unwrap(), Command::Play(_)));
    }

    #[test]
    fn parse_rejects_bad_turns() {
        assert!(matches!(Command::parse("tal"), Err(Error::Format(_))));
        assert!(matches!(Command::parse("?tales"), Err(Error::Format(_))));
    }

    #[test]
    fn apply_updates_turns() {
        let mut s = session();
        assert_eq!(apply(Command::parse("s l a? t e?").unwrap(), &mut s), Flow::Evaluate);
        assert_eq!(apply(Command::parse("crane").unwrap(), &mut s), Flow::Evaluate);
        assert_eq!(s.turns().len(), 2);

        assert_eq!(apply(Command::Pop, &mut s), Flow::Continue);
        assert_eq!(s.turns().len(), 1);

        assert_eq!(apply(Command::New, &mut s), Flow::Continue);
        assert!(s.turns().is_empty());

        assert_eq!(apply(Command::Exit, &mut s), Flow::Stop);
    }

    #[test]
    fn run_without_turns_reports_and_continues() {
        let mut s = session();
        let input = "run\nnonsense!\ns l a? t e?\nexit\nignored\n".as_bytes();
        run_interactive(input, &mut s, 5).unwrap();
        assert_eq!(s.turns().len(), 1);
    }

    #[test]
    fn end_of_input_stops() {
        let mut s = session();
        run_interactive("pop\n".as_bytes(), &mut s, 5).unwrap();
        assert!(s.turns().is_empty());
    }
}
