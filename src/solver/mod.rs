//! Mastermind solving engine
//!
//! Candidate filtering, the expected-discard quality heuristic, the
//! parallel guess selector and the session state machine that drives them.

pub mod config;
pub mod filter;
pub mod oracle;
pub mod quality;
pub mod selector;
mod session;

pub use config::{ConfigError, Opening, SessionConfig};
pub use filter::{count_inconsistent, filter_candidates};
pub use oracle::{ScoreSource, SecretOracle};
pub use quality::{GuessAnalysis, analyze_guess, expected_discard, score_distribution};
pub use selector::{FAST_PATH_THRESHOLD, GuessSelector, QualifiedGuess};
pub use session::{RoundRecord, Session, SessionError, SessionState, SessionSummary};
