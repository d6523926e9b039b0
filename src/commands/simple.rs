//! Simple interactive CLI mode
//!
//! The user picks a secret code and scores each suggested guess by typing
//! `"<r> red <w> white"`.

use crate::core::{GuessCode, Score};
use crate::solver::{ScoreSource, Session, SessionConfig, SessionError};
use colored::Colorize;
use std::io::{self, BufRead, Write};

const SCORE_HINT: &str = "Please enter a valid score. (e.g. 0 red 2 white)";

/// Reads scores from a text stream, re-prompting until one parses
pub struct PromptScorer<R, W> {
    input: R,
    output: W,
    num_pegs: usize,
    turn: usize,
}

impl<R: BufRead, W: Write> PromptScorer<R, W> {
    pub const fn new(input: R, output: W, num_pegs: usize) -> Self {
        Self {
            input,
            output,
            num_pegs,
            turn: 0,
        }
    }

    /// Read one line; `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn prompt(&mut self, guess: &GuessCode) -> io::Result<Score> {
        self.turn += 1;
        writeln!(
            self.output,
            "{}. {}  {}",
            self.turn,
            guess.to_string().bright_white().bold(),
            format!("({})", guess.code().letters()).bright_black()
        )?;

        loop {
            write!(self.output, "Enter score: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
            };

            match Score::parse(&line, self.num_pegs) {
                Ok(score) => return Ok(score),
                Err(e) => {
                    writeln!(self.output, "{}", e.to_string().red())?;
                    writeln!(self.output, "{SCORE_HINT}")?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> ScoreSource for PromptScorer<R, W> {
    fn score(&mut self, guess: &GuessCode) -> Result<Score, SessionError> {
        self.prompt(guess)
            .map_err(|e| SessionError::Input(e.to_string()))
    }
}

/// Run the simple interactive CLI mode
///
/// An inconsistent score history is reported and ends the game normally.
///
/// # Errors
///
/// Returns an error for an invalid configuration or if reading input fails.
pub fn run_simple(config: SessionConfig) -> Result<(), SessionError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let num_pegs = config.num_pegs;
    let palette: Vec<String> = config.colors.iter().map(ToString::to_string).collect();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║             Mastermind Solver - Interactive Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Choose a secret of {num_pegs} pegs from: {}", palette.join(", "));
    println!("Enter each score like so:");
    println!("  0 red 2 white");
    println!("Enjoy!\n");

    let mut session = Session::new(config)?;
    let mut scorer = PromptScorer::new(stdin.lock(), stdout.lock(), num_pegs);

    match session.play(&mut scorer) {
        Ok(summary) => {
            println!(
                "\n{}",
                format!("Guessed after {} guesses!", summary.total_guesses)
                    .green()
                    .bold()
            );
            Ok(())
        }
        Err(SessionError::Exhausted { .. }) => {
            println!(
                "\n{}",
                "No potential secrets remaining. You most likely made a mistake in your scoring."
                    .red()
            );
            Ok(())
        }
        Err(e) => Err(e),
    }
}
