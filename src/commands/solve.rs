//! Code solving command
//!
//! Plays a game against a known secret and returns the solution path.

use super::parse_code;
use crate::core::SecretCode;
use crate::solver::{RoundRecord, SecretOracle, Session, SessionConfig, SessionError};

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: String,
    pub session: SessionConfig,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String, session: SessionConfig) -> Self {
        Self { secret, session }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub secret: SecretCode,
    pub rounds: Vec<RoundRecord>,
    pub num_pegs: usize,
}

impl SolveResult {
    #[must_use]
    pub fn total_guesses(&self) -> usize {
        self.rounds.len()
    }
}

/// Solve a specific secret code
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not a valid code
/// - The secret does not fit the configured palette and peg count
/// - The session fails (an exhausted session here means a solver bug)
pub fn solve_code(config: SolveConfig) -> Result<SolveResult, String> {
    let session_config = config.session;
    let code = parse_code(&config.secret, &session_config)?;

    let secret = SecretCode::new(code);
    let num_pegs = session_config.num_pegs;
    let mut session = Session::new(session_config).map_err(|e| e.to_string())?;
    let mut oracle = SecretOracle::new(secret.clone());

    let summary = session.play(&mut oracle).map_err(|e: SessionError| e.to_string())?;

    Ok(SolveResult {
        secret,
        rounds: summary.rounds,
        num_pegs,
    })
}
