//! Benchmark command
//!
//! Plays many simulated games and reports guess counts and timing.

use crate::core::{SecretCode, random_code};
use crate::solver::{SecretOracle, Session, SessionConfig, SessionError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::error;

/// What to simulate
pub struct BenchmarkConfig {
    pub games: usize,
    /// Play this secret every game instead of a random one
    pub secret: Option<SecretCode>,
    pub session: SessionConfig,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub average_time_per_guess: Duration,
}

/// Run `config.games` simulated games
///
/// Secrets are drawn uniformly from the code space unless a fixed secret is
/// given. With a seed in the session config the whole run is reproducible.
///
/// An exhausted game is a solver bug; it is logged and counted as failed.
///
/// # Errors
///
/// Returns an error if the session configuration is invalid.
pub fn run_benchmark(config: &BenchmarkConfig) -> Result<BenchmarkResult, SessionError> {
    config.session.validate()?;

    let mut rng = config
        .session
        .seed
        .map_or_else(|| StdRng::seed_from_u64(rand::random()), StdRng::seed_from_u64);

    let start = Instant::now();
    let mut total_guesses = 0;
    let mut solved = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for _ in 0..config.games {
        let secret = config.secret.clone().unwrap_or_else(|| {
            SecretCode::new(random_code(
                &config.session.colors,
                config.session.num_pegs,
                &mut rng,
            ))
        });

        let session_config = config.session.clone().with_seed(Some(rng.random()));
        let mut session = Session::new(session_config)?;

        match session.play(&mut SecretOracle::new(secret.clone())) {
            Ok(summary) => {
                let guesses = summary.total_guesses;
                solved += 1;
                total_guesses += guesses;
                min_guesses = min_guesses.min(guesses);
                max_guesses = max_guesses.max(guesses);
                *distribution.entry(guesses).or_insert(0) += 1;
            }
            Err(e) => error!(%secret, error = %e, "simulated game failed"),
        }
    }

    let duration = start.elapsed();

    Ok(BenchmarkResult {
        total_games: config.games,
        solved,
        failed: config.games - solved,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        average_time_per_guess: if total_guesses > 0 {
            duration / u32::try_from(total_guesses).unwrap_or(u32::MAX)
        } else {
            Duration::ZERO
        },
    })
}
