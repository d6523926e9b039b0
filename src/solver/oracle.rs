//! Score sources
//!
//! A session asks a `ScoreSource` for the score of each guess. The code
//! maker may be a person at a prompt or a known secret in a simulation.

use super::session::SessionError;
use crate::core::{GuessCode, Score, SecretCode};

/// Something that can score guesses
pub trait ScoreSource {
    /// Score `guess` against the hidden secret
    ///
    /// # Errors
    /// Returns `SessionError::Input` if no score can be obtained.
    fn score(&mut self, guess: &GuessCode) -> Result<Score, SessionError>;
}

impl<F> ScoreSource for F
where
    F: FnMut(&GuessCode) -> Result<Score, SessionError>,
{
    fn score(&mut self, guess: &GuessCode) -> Result<Score, SessionError> {
        self(guess)
    }
}

/// Scores guesses against a known secret
#[derive(Debug, Clone)]
pub struct SecretOracle {
    secret: SecretCode,
    calls: usize,
}

impl SecretOracle {
    #[must_use]
    pub const fn new(secret: SecretCode) -> Self {
        Self { secret, calls: 0 }
    }

    #[must_use]
    pub const fn secret(&self) -> &SecretCode {
        &self.secret
    }

    /// How many guesses have been scored
    #[must_use]
    pub const fn calls(&self) -> usize {
        self.calls
    }
}

impl ScoreSource for SecretOracle {
    fn score(&mut self, guess: &GuessCode) -> Result<Score, SessionError> {
        self.calls += 1;
        Ok(Score::calculate(&self.secret, guess))
    }
}
