//! Guess analysis command
//!
//! Reports the expected-discard quality and score buckets of a code used as
//! the opening guess against the full code space.

use super::parse_code;
use crate::core::{CodeSpace, GuessCode};
use crate::solver::{SessionConfig, analyze_guess, expected_discard};
use rayon::prelude::*;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: GuessCode,
    pub quality: usize,
    pub buckets: Vec<(crate::core::Score, usize)>,
    pub largest_bucket: usize,
    pub total_candidates: usize,
    /// Rank among all guesses by quality (1 = best)
    pub rank: usize,
}

impl AnalysisResult {
    /// Expected share of the space eliminated, in percent
    #[must_use]
    pub fn discard_percent(&self) -> f64 {
        if self.total_candidates == 0 {
            return 0.0;
        }
        self.quality as f64 / self.total_candidates as f64 * 100.0
    }
}

/// Analyze a code as an opening guess
///
/// # Errors
///
/// Returns an error if:
/// - The code is invalid
/// - The code does not fit the configured palette and peg count
pub fn analyze_code(code: &str, config: &SessionConfig) -> Result<AnalysisResult, String> {
    config.validate().map_err(|e| e.to_string())?;
    let guess = GuessCode::new(parse_code(code, config)?);

    let space = CodeSpace::new(&config.colors, config.num_pegs);
    let analysis = analyze_guess(&guess, &space.secrets);

    let rank = 1 + space
        .guesses
        .par_iter()
        .filter(|g| expected_discard(g, &space.secrets) > analysis.quality)
        .count();

    Ok(AnalysisResult {
        guess,
        quality: analysis.quality,
        buckets: analysis.buckets,
        largest_bucket: analysis.largest_bucket,
        total_candidates: space.secrets.len(),
        rank,
    })
}
