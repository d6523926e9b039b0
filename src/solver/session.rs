//! Game session state machine
//!
//! A session owns the code space for one game and runs the
//! guess → score → filter cycle until the code is found or the scores
//! admit no secret at all.

use super::config::{ConfigError, Opening, SessionConfig};
use super::filter::filter_candidates;
use super::oracle::ScoreSource;
use super::quality::expected_discard;
use super::selector::{GuessSelector, QualifiedGuess};
use crate::core::{CodeSpace, GuessCode, Score, SecretCode, split_opener};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use tracing::{debug, info, warn};

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Waiting for the score of the next guess
    AwaitingScore,
    /// The last guess scored perfectly
    Solved,
    /// The score history is consistent with no code
    Exhausted,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AwaitingScore => write!(f, "awaiting score"),
            Self::Solved => write!(f, "solved"),
            Self::Exhausted => write!(f, "exhausted"),
        }
    }
}

/// Error type for session failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    Config(ConfigError),
    /// A guess was requested after the session ended
    Finished(SessionState),
    /// The selector had nothing to offer
    NoGuess,
    /// Every candidate secret was discarded after `rounds` scored guesses
    Exhausted { rounds: usize },
    /// The score source failed (I/O error or end of input)
    Input(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Invalid configuration: {e}"),
            Self::Finished(state) => write!(f, "Session is already {state}"),
            Self::NoGuess => write!(f, "No guess available"),
            Self::Exhausted { rounds } => write!(
                f,
                "No possible secrets remain after {rounds} scores. Double check the scoring."
            ),
            Self::Input(msg) => write!(f, "Could not read score: {msg}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for SessionError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// One completed round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    pub guess: GuessCode,
    pub score: Score,
    pub quality: usize,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Result of a solved game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub solution: GuessCode,
    pub total_guesses: usize,
    pub rounds: Vec<RoundRecord>,
}

/// A single game
pub struct Session {
    config: SessionConfig,
    selector: GuessSelector,
    guesses: Vec<GuessCode>,
    secrets: Vec<SecretCode>,
    state: SessionState,
    history: Vec<RoundRecord>,
    rng: StdRng,
}

impl Session {
    /// Start a game, seeding tie-breaks from `config.seed` or OS entropy
    ///
    /// # Errors
    /// Returns `SessionError::Config` if the configuration is invalid.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        let rng = config
            .seed
            .map_or_else(|| StdRng::seed_from_u64(rand::random()), StdRng::seed_from_u64);
        Self::with_rng(config, rng)
    }

    /// Start a game with an explicit random source
    ///
    /// # Errors
    /// Returns `SessionError::Config` if the configuration is invalid.
    pub fn with_rng(config: SessionConfig, rng: StdRng) -> Result<Self, SessionError> {
        config.validate()?;

        let CodeSpace { secrets, guesses } = CodeSpace::new(&config.colors, config.num_pegs);
        debug!(
            codes = secrets.len(),
            colors = config.colors.len(),
            pegs = config.num_pegs,
            "session started"
        );

        Ok(Self {
            selector: GuessSelector::new(config.workers),
            config,
            guesses,
            secrets,
            state: SessionState::AwaitingScore,
            history: Vec::new(),
            rng,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Secrets still consistent with every score so far
    #[must_use]
    pub fn candidates(&self) -> &[SecretCode] {
        &self.secrets
    }

    /// The full guess list (never narrowed)
    #[must_use]
    pub fn guesses(&self) -> &[GuessCode] {
        &self.guesses
    }

    #[must_use]
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Number of scored guesses
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.history.len()
    }

    /// Choose the next guess
    ///
    /// The first round follows the configured `Opening`; later rounds use
    /// the parallel selector.
    ///
    /// # Errors
    /// Returns `SessionError::Finished` once the session is solved or
    /// exhausted, and `SessionError::NoGuess` if the selector returns nothing.
    pub fn next_guess(&mut self) -> Result<QualifiedGuess, SessionError> {
        if self.state != SessionState::AwaitingScore {
            return Err(SessionError::Finished(self.state));
        }

        if self.history.is_empty() {
            let opener = match &self.config.opening {
                Opening::Evaluate => None,
                Opening::Split => Some(split_opener(&self.config.colors, self.config.num_pegs)),
                Opening::Fixed(guess) => Some(guess.clone()),
            };
            if let Some(guess) = opener {
                let quality = expected_discard(&guess, &self.secrets);
                return Ok(QualifiedGuess { guess, quality });
            }
        }

        self.selector
            .select(&self.guesses, &self.secrets, &mut self.rng)
            .ok_or(SessionError::NoGuess)
    }

    /// Apply the score received for `guess`
    ///
    /// A perfect score ends the game as `Solved`. Otherwise the candidate set
    /// is replaced by the secrets consistent with the score.
    ///
    /// # Errors
    /// Returns `SessionError::Exhausted` (and moves to the `Exhausted` state)
    /// if no candidate survives, or `SessionError::Finished` if the session
    /// has already ended.
    pub fn record_score(
        &mut self,
        guess: &QualifiedGuess,
        score: Score,
    ) -> Result<SessionState, SessionError> {
        if self.state != SessionState::AwaitingScore {
            return Err(SessionError::Finished(self.state));
        }

        let candidates_before = self.secrets.len();
        self.secrets = if score.is_perfect(self.config.num_pegs) {
            self.state = SessionState::Solved;
            vec![guess.guess.to_secret()]
        } else {
            filter_candidates(&guess.guess, score, &self.secrets)
        };

        self.history.push(RoundRecord {
            guess: guess.guess.clone(),
            score,
            quality: guess.quality,
            candidates_before,
            candidates_after: self.secrets.len(),
        });

        if self.secrets.is_empty() {
            self.state = SessionState::Exhausted;
            warn!(rounds = self.rounds(), "every candidate secret was discarded");
            return Err(SessionError::Exhausted {
                rounds: self.rounds(),
            });
        }

        Ok(self.state)
    }

    /// Play rounds against `source` until the code is found
    ///
    /// # Errors
    /// Returns `SessionError::Exhausted` if the scores contradict each
    /// other, `SessionError::Input` if the source fails, and any error from
    /// `next_guess`.
    pub fn play<S: ScoreSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<SessionSummary, SessionError> {
        loop {
            let guess = self.next_guess()?;
            let score = source.score(&guess.guess)?;

            if self.record_score(&guess, score)? == SessionState::Solved {
                info!(guesses = self.rounds(), solution = %guess.guess, "session solved");
                return Ok(SessionSummary {
                    solution: guess.guess,
                    total_guesses: self.rounds(),
                    rounds: self.history.clone(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, MAX_PEGS, Peg};
    use crate::solver::oracle::SecretOracle;

    fn config(colors: usize, pegs: usize) -> SessionConfig {
        SessionConfig::default()
            .with_colors(Peg::palette(colors))
            .with_pegs(pegs)
            .with_workers(4)
            .with_seed(Some(17))
    }

    fn secret(text: &str) -> SecretCode {
        SecretCode::new(text.parse::<Code>().unwrap())
    }

    fn assert_shrinking(summary: &SessionSummary) {
        for round in &summary.rounds {
            assert!(round.candidates_after <= round.candidates_before);
        }
        for pair in summary.rounds.windows(2) {
            assert_eq!(pair[1].candidates_before, pair[0].candidates_after);
        }
    }

    #[test]
    fn starts_with_full_space() {
        let session = Session::new(config(6, 4)).unwrap();
        assert_eq!(session.state(), SessionState::AwaitingScore);
        assert_eq!(session.candidates().len(), 1296);
        assert_eq!(session.guesses().len(), 1296);
        assert_eq!(session.rounds(), 0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let result = Session::new(config(6, 4).with_colors(vec![]));
        assert!(matches!(
            result,
            Err(SessionError::Config(ConfigError::EmptyPalette))
        ));
    }

    #[test]
    fn longest_scorable_code_is_solved() {
        let mut session = Session::new(config(1, MAX_PEGS)).unwrap();
        let target = session.candidates()[0].clone();
        let summary = session.play(&mut SecretOracle::new(target.clone())).unwrap();

        assert_eq!(summary.solution.to_secret(), target);
        assert_eq!(summary.rounds[0].score, Score::perfect(MAX_PEGS));
    }

    #[test]
    fn overlong_code_is_rejected() {
        assert!(matches!(
            Session::new(config(1, MAX_PEGS + 1)),
            Err(SessionError::Config(ConfigError::TooManyPegs { pegs: 256, .. }))
        ));
    }

    #[test]
    fn solves_classic_secrets() {
        for text in ["RROB", "OYGR", "PPPP", "BGYO", "RORO", "YBPG"] {
            let target = secret(text);
            let mut session = Session::new(config(6, 4).with_opening(Opening::Split)).unwrap();
            let summary = session.play(&mut SecretOracle::new(target.clone())).unwrap();

            assert_eq!(summary.solution.to_secret(), target);
            assert_eq!(session.state(), SessionState::Solved);
            assert!(summary.total_guesses <= 10, "{text} took {}", summary.total_guesses);
            assert_shrinking(&summary);
        }

        // Evaluated openings search all 1296 guesses on the first round
        for text in ["GYBP", "OORR"] {
            let target = secret(text);
            let mut session = Session::new(config(6, 4)).unwrap();
            let summary = session.play(&mut SecretOracle::new(target.clone())).unwrap();

            assert_eq!(summary.solution.to_secret(), target);
            assert_eq!(summary.rounds[0].candidates_before, 1296);
            assert!(summary.rounds[0].quality > 0);
            assert!(summary.total_guesses <= 10, "{text} took {}", summary.total_guesses);
            assert_shrinking(&summary);
        }
    }

    #[test]
    fn solves_every_secret_in_small_space() {
        let colors = Peg::palette(3);
        for code in crate::core::generate(&colors, 3) {
            let target = SecretCode::new(code);
            let mut session = Session::new(config(3, 3)).unwrap();
            let summary = session.play(&mut SecretOracle::new(target.clone())).unwrap();

            assert_eq!(summary.solution.to_secret(), target);
            assert!(summary.total_guesses <= 27);
            assert_shrinking(&summary);
        }
    }

    #[test]
    fn evaluated_opening_plays_a_real_guess() {
        let mut session = Session::new(config(4, 3)).unwrap();
        let first = session.next_guess().unwrap();
        assert!(first.quality > 0);
        assert!(session.guesses().contains(&first.guess));
    }

    #[test]
    fn fixed_opening_is_used_first() {
        let opener = GuessCode::new("BBYY".parse().unwrap());
        let mut session = Session::new(config(6, 4).with_opening(Opening::Fixed(opener.clone()))).unwrap();
        let first = session.next_guess().unwrap();
        assert_eq!(first.guess, opener);
        assert_eq!(first.quality, expected_discard(&opener, session.candidates()));
    }

    #[test]
    fn split_opening_is_used_first() {
        let mut session = Session::new(config(6, 4).with_opening(Opening::Split)).unwrap();
        let first = session.next_guess().unwrap();
        assert_eq!(first.guess.pegs(), &[Peg::Red, Peg::Red, Peg::Orange, Peg::Orange]);
    }

    #[test]
    fn contradictory_scores_exhaust_the_session() {
        let mut session = Session::new(config(6, 4).with_opening(Opening::Split)).unwrap();
        let first = session.next_guess().unwrap();
        // No red or orange at all
        assert_eq!(
            session.record_score(&first, Score::new(0, 0)),
            Ok(SessionState::AwaitingScore)
        );
        assert_eq!(session.candidates().len(), 256);

        // Replaying the opener and claiming it is now almost right cannot happen
        let replay = QualifiedGuess {
            guess: first.guess.clone(),
            quality: 0,
        };
        let result = session.record_score(&replay, Score::new(3, 0));

        assert_eq!(result, Err(SessionError::Exhausted { rounds: 2 }));
        assert_eq!(session.state(), SessionState::Exhausted);
        assert_eq!(session.next_guess(), Err(SessionError::Finished(SessionState::Exhausted)));
    }

    #[test]
    fn perfect_score_solves_immediately() {
        let mut session = Session::new(config(6, 4).with_opening(Opening::Split)).unwrap();
        let first = session.next_guess().unwrap();
        assert_eq!(session.record_score(&first, Score::perfect(4)), Ok(SessionState::Solved));
        assert_eq!(session.candidates(), &[first.guess.to_secret()]);
        assert!(matches!(
            session.record_score(&first, Score::perfect(4)),
            Err(SessionError::Finished(SessionState::Solved))
        ));
    }

    #[test]
    fn seeded_sessions_replay_identically() {
        let target = secret("GYBP");
        let run = || {
            let mut session = Session::new(config(6, 4).with_opening(Opening::Split)).unwrap();
            session.play(&mut SecretOracle::new(target.clone())).unwrap()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn closure_score_source() {
        let target = secret("RYG");
        let mut session = Session::new(config(4, 3)).unwrap();
        let mut source =
            |guess: &GuessCode| -> Result<Score, SessionError> { Ok(Score::calculate(&target, guess)) };

        let summary = session.play(&mut source).unwrap();
        assert_eq!(summary.solution.to_secret(), target);
    }

    #[test]
    fn source_errors_propagate() {
        let mut session = Session::new(config(4, 3)).unwrap();
        let mut source =
            |_: &GuessCode| -> Result<Score, SessionError> { Err(SessionError::Input("closed".into())) };

        assert_eq!(
            session.play(&mut source),
            Err(SessionError::Input("closed".into()))
        );
        assert_eq!(session.state(), SessionState::AwaitingScore);
    }
}
