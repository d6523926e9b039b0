//! Guess scoring
//!
//! A score is the pair of feedback counts a code maker gives for a guess:
//! - red = pegs matching in color and position
//! - white = remaining pegs matching in color only
//!
//! Repeated colors are handled by consuming pegs as they are matched, so a
//! color can never earn more pegs than it has unmatched occurrences.

use super::{GuessCode, SecretCode};
use std::fmt;

/// Feedback for a single guess
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score {
    red: u8,
    white: u8,
}

/// Error type for score text that does not follow `<r> red <w> white`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    WrongTokenCount(usize),
    UnexpectedLabel {
        expected: &'static str,
        found: String,
    },
    InvalidCount(String),
    NegativeCount(i64),
    TooManyPegs {
        red: u8,
        white: u8,
        num_pegs: usize,
    },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongTokenCount(count) => {
                write!(f, "Expected 4 words like \"0 red 2 white\", got {count}")
            }
            Self::UnexpectedLabel { expected, found } => {
                write!(f, "Expected \"{expected}\", got \"{found}\"")
            }
            Self::InvalidCount(token) => write!(f, "\"{token}\" is not a peg count"),
            Self::NegativeCount(n) => write!(f, "Peg counts cannot be negative, got {n}"),
            Self::TooManyPegs {
                red,
                white,
                num_pegs,
            } => write!(
                f,
                "{red} red + {white} white is more than the {num_pegs} pegs in a code"
            ),
        }
    }
}

impl std::error::Error for ScoreError {}

/// Longest code a score can describe
pub const MAX_PEGS: usize = u8::MAX as usize;

impl Score {
    #[inline]
    #[must_use]
    pub const fn new(red: u8, white: u8) -> Self {
        Self { red, white }
    }

    /// The score of a correct guess: every peg red
    ///
    /// `num_pegs` above `MAX_PEGS` saturates.
    #[inline]
    #[must_use]
    pub fn perfect(num_pegs: usize) -> Self {
        Self {
            red: u8::try_from(num_pegs).unwrap_or(u8::MAX),
            white: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn red(self) -> u8 {
        self.red
    }

    #[inline]
    #[must_use]
    pub const fn white(self) -> u8 {
        self.white
    }

    /// Total number of feedback pegs
    #[inline]
    #[must_use]
    pub const fn total(self) -> usize {
        self.red as usize + self.white as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_perfect(self, num_pegs: usize) -> bool {
        self.red as usize == num_pegs && self.white == 0
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. Red pass: every position where the pegs agree is counted and both
    ///    pegs are marked consumed
    /// 2. White pass: each unconsumed secret peg, in order, consumes the
    ///    first unconsumed guess peg of the same color
    ///
    /// # Panics
    /// Panics if the codes differ in length.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, GuessCode, Peg, Score, SecretCode};
    /// use Peg::*;
    ///
    /// let secret = SecretCode::new(Code::new(vec![Orange, Yellow, Green, Red]));
    /// let guess = GuessCode::new(Code::new(vec![Red, Red, Blue, Blue]));
    ///
    /// // The single red in the secret only matches one of the guessed reds
    /// assert_eq!(Score::calculate(&secret, &guess), Score::new(0, 1));
    /// ```
    #[must_use]
    pub fn calculate(secret: &SecretCode, guess: &GuessCode) -> Self {
        let secret = secret.pegs();
        let guess = guess.pegs();
        assert_eq!(
            secret.len(),
            guess.len(),
            "secret and guess have different lengths"
        );

        let mut used_secret = vec![false; secret.len()];
        let mut used_guess = vec![false; guess.len()];
        let mut score = Self::default();

        for (i, (s, g)) in secret.iter().zip(guess).enumerate() {
            if s == g {
                score.red += 1;
                used_secret[i] = true;
                used_guess[i] = true;
            }
        }

        for (i, s) in secret.iter().enumerate() {
            if used_secret[i] {
                continue;
            }
            let matched = guess
                .iter()
                .enumerate()
                .position(|(j, g)| !used_guess[j] && g == s);
            if let Some(j) = matched {
                used_secret[i] = true;
                used_guess[j] = true;
                score.white += 1;
            }
        }

        score
    }

    /// Parse a score typed by the code maker
    ///
    /// The grammar is four whitespace-separated tokens,
    /// `<red> red <white> white`, with the labels matched case-insensitively.
    ///
    /// # Errors
    /// Returns `ScoreError` for a wrong token count, wrong labels,
    /// non-numeric or negative counts, or counts adding up to more than
    /// `num_pegs`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Score;
    ///
    /// assert_eq!(Score::parse("1 Red 2 WHITE", 4), Ok(Score::new(1, 2)));
    /// assert!(Score::parse("3 red 2 white", 4).is_err());
    /// ```
    pub fn parse(text: &str, num_pegs: usize) -> Result<Self, ScoreError> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let [red, red_label, white, white_label] = tokens.as_slice() else {
            return Err(ScoreError::WrongTokenCount(tokens.len()));
        };

        expect_label(red_label, "red")?;
        expect_label(white_label, "white")?;

        let red = parse_count(red)?;
        let white = parse_count(white)?;

        if usize::from(red) + usize::from(white) > num_pegs {
            return Err(ScoreError::TooManyPegs {
                red,
                white,
                num_pegs,
            });
        }

        Ok(Self { red, white })
    }
}

fn expect_label(token: &str, expected: &'static str) -> Result<(), ScoreError> {
    if token.eq_ignore_ascii_case(expected) {
        Ok(())
    } else {
        Err(ScoreError::UnexpectedLabel {
            expected,
            found: token.to_string(),
        })
    }
}

fn parse_count(token: &str) -> Result<u8, ScoreError> {
    let value: i64 = token
        .parse()
        .map_err(|_| ScoreError::InvalidCount(token.to_string()))?;
    if value < 0 {
        return Err(ScoreError::NegativeCount(value));
    }
    u8::try_from(value).map_err(|_| ScoreError::InvalidCount(token.to_string()))
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} red {} white", self.red, self.white)
    }
}
