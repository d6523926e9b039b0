//! Candidate pruning
//!
//! After a guess is scored, only the secrets that would have produced the
//! same score remain possible.

use crate::core::{GuessCode, Score, SecretCode};

/// Secrets consistent with `score` for `guess`, in their original order
#[must_use]
pub fn filter_candidates(guess: &GuessCode, score: Score, secrets: &[SecretCode]) -> Vec<SecretCode> {
    secrets
        .iter()
        .filter(|&secret| Score::calculate(secret, guess) == score)
        .cloned()
        .collect()
}

/// Number of secrets that `score` for `guess` would rule out
#[must_use]
pub fn count_inconsistent(guess: &GuessCode, score: Score, secrets: &[SecretCode]) -> usize {
    secrets
        .iter()
        .filter(|&secret| Score::calculate(secret, guess) != score)
        .count()
}
