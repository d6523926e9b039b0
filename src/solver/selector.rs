//! Parallel guess selection
//!
//! The guess list is split into one contiguous chunk per worker. Each worker
//! scans its chunk for the highest expected-discard quality and picks one
//! of its tied guesses at random; the selector then keeps the best of the
//! per-worker winners.

use super::quality::expected_discard;
use crate::core::{GuessCode, SecretCode};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::Instant;
use tracing::debug;

/// At or below this many secrets, skip evaluation and guess one of them
pub const FAST_PATH_THRESHOLD: usize = 3;

/// A guess paired with its expected-discard quality
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedGuess {
    pub guess: GuessCode,
    pub quality: usize,
}

/// Splits guess evaluation across a fixed number of workers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessSelector {
    workers: usize,
}

impl GuessSelector {
    /// Create a selector with `workers` chunks (at least one)
    #[must_use]
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    #[must_use]
    pub const fn workers(&self) -> usize {
        self.workers
    }

    /// Pick the next guess for the given candidate secrets
    ///
    /// With three or fewer secrets a random secret is returned with quality
    /// 1. Otherwise every guess is evaluated, one worker per chunk, and the
    /// winner is the first chunk result (in chunk order) with the highest
    /// quality.
    ///
    /// Returns `None` if there are no secrets, or no guesses to evaluate.
    ///
    /// Worker tie-breaks use generators seeded from `rng`, so a seeded
    /// `rng` makes the whole selection reproducible.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{CodeSpace, Peg};
    /// use mastermind_solver::solver::GuessSelector;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let space = CodeSpace::new(&[Peg::Red, Peg::Orange, Peg::Yellow], 3);
    /// let selector = GuessSelector::new(4);
    ///
    /// let best = selector
    ///     .select(&space.guesses, &space.secrets, &mut StdRng::seed_from_u64(1))
    ///     .unwrap();
    /// assert!(best.quality > 0);
    /// ```
    pub fn select<R: Rng + ?Sized>(
        &self,
        guesses: &[GuessCode],
        secrets: &[SecretCode],
        rng: &mut R,
    ) -> Option<QualifiedGuess> {
        if secrets.len() <= FAST_PATH_THRESHOLD {
            return secrets.choose(rng).map(|secret| QualifiedGuess {
                guess: secret.to_guess(),
                quality: 1,
            });
        }

        let start = Instant::now();
        let chunks = generate_chunks(guesses, self.workers);
        let seeds: Vec<u64> = chunks.iter().map(|_| rng.random()).collect();

        // Indexed collect keeps one slot per worker, in chunk order
        let results: Vec<Option<QualifiedGuess>> = chunks
            .par_iter()
            .zip(seeds.par_iter())
            .map(|(chunk, &seed)| {
                let mut worker_rng = StdRng::seed_from_u64(seed);
                best_in_chunk(chunk, secrets, &mut worker_rng)
            })
            .collect();

        let best = combine(results);

        debug!(
            secrets = secrets.len(),
            guesses = guesses.len(),
            workers = chunks.len(),
            quality = best.as_ref().map(|b| b.quality),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "selected guess"
        );

        best
    }
}

impl Default for GuessSelector {
    fn default() -> Self {
        Self::new(std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get))
    }
}

/// Split `items` into `num_chunks` contiguous chunks
///
/// Every chunk gets `len / num_chunks` items and the first `len % num_chunks`
/// chunks get one more. Chunks may be empty when there are more chunks than
/// items. `num_chunks == 0` is treated as 1.
///
/// # Examples
/// ```
/// use mastermind_solver::solver::selector::generate_chunks;
///
/// let items: Vec<u32> = (0..10).collect();
/// let sizes: Vec<usize> = generate_chunks(&items, 4).iter().map(|c| c.len()).collect();
/// assert_eq!(sizes, vec![3, 3, 2, 2]);
/// ```
#[must_use]
pub fn generate_chunks<T>(items: &[T], num_chunks: usize) -> Vec<&[T]> {
    let num_chunks = num_chunks.max(1);
    let min_chunk_size = items.len() / num_chunks;
    let mut leftovers = items.len() % num_chunks;

    let mut chunks = Vec::with_capacity(num_chunks);
    let mut start = 0;
    for _ in 0..num_chunks {
        let mut size = min_chunk_size;
        if leftovers > 0 {
            size += 1;
            leftovers -= 1;
        }
        chunks.push(&items[start..start + size]);
        start += size;
    }

    chunks
}

/// Sequential worker: best guess of one chunk
///
/// A strictly better quality restarts the tied set; an equal one joins it.
/// One tied guess is drawn uniformly with `rng`. Returns `None` for an
/// empty chunk.
pub fn best_in_chunk<R: Rng + ?Sized>(
    chunk: &[GuessCode],
    secrets: &[SecretCode],
    rng: &mut R,
) -> Option<QualifiedGuess> {
    let mut best_quality = 0;
    let mut tied: Vec<&GuessCode> = Vec::new();

    for guess in chunk {
        let quality = expected_discard(guess, secrets);
        if tied.is_empty() || quality > best_quality {
            tied.clear();
            best_quality = quality;
            tied.push(guess);
        } else if quality == best_quality {
            tied.push(guess);
        }
    }

    tied.choose(rng).map(|&guess| QualifiedGuess {
        guess: guess.clone(),
        quality: best_quality,
    })
}

/// First strictly-highest result wins
fn combine(results: impl IntoIterator<Item = Option<QualifiedGuess>>) -> Option<QualifiedGuess> {
    results
        .into_iter()
        .flatten()
        .fold(None, |best: Option<QualifiedGuess>, candidate| match best {
            Some(best) if best.quality >= candidate.quality => Some(best),
            _ => Some(candidate),
        })
}
