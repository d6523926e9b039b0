//! Expected-discard guess quality
//!
//! Given a guess and the remaining secrets, estimates how many secrets the
//! guess would eliminate on average, assuming the true secret is drawn
//! uniformly from the remaining set.

use super::filter::count_inconsistent;
use crate::core::{GuessCode, Score, SecretCode};
use rustc_hash::FxHashMap;

/// Breakdown of a guess against a candidate set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessAnalysis {
    /// Expected number of secrets eliminated
    pub quality: usize,
    /// Score buckets, largest first
    pub buckets: Vec<(Score, usize)>,
    /// Size of the largest bucket (worst-case remaining secrets)
    pub largest_bucket: usize,
}

/// Count how many secrets fall into each score bucket for `guess`
#[must_use]
pub fn score_distribution(guess: &GuessCode, secrets: &[SecretCode]) -> FxHashMap<Score, usize> {
    let mut counts = FxHashMap::default();

    for secret in secrets {
        *counts.entry(Score::calculate(secret, guess)).or_insert(0) += 1;
    }

    counts
}

/// Expected number of secrets `guess` eliminates
///
/// # Formula
/// Σ inconsistent(score) × freq(score) / |secrets|
///
/// summed over every score bucket, with truncating integer division.
///
/// # Properties
/// - Returns 0 for an empty or single-secret set
/// - Never exceeds `|secrets| - 1`
///
/// # Examples
/// ```
/// use mastermind_solver::core::{CodeSpace, Peg};
/// use mastermind_solver::solver::quality::expected_discard;
///
/// let space = CodeSpace::new(&[Peg::Red, Peg::Orange], 2);
/// let quality = expected_discard(&space.guesses[1], &space.secrets);
/// assert!(quality > 0 && quality < space.secrets.len());
/// ```
#[must_use]
pub fn expected_discard(guess: &GuessCode, secrets: &[SecretCode]) -> usize {
    if secrets.is_empty() {
        return 0;
    }

    let total_discard: usize = score_distribution(guess, secrets)
        .into_iter()
        .map(|(score, freq)| count_inconsistent(guess, score, secrets) * freq)
        .sum();

    total_discard / secrets.len()
}

/// Full analysis of a guess: quality plus the bucket layout
#[must_use]
pub fn analyze_guess(guess: &GuessCode, secrets: &[SecretCode]) -> GuessAnalysis {
    let mut buckets: Vec<(Score, usize)> = score_distribution(guess, secrets).into_iter().collect();
    buckets.sort_by(|(s1, n1), (s2, n2)| n2.cmp(n1).then(s2.cmp(s1)));

    let largest_bucket = buckets.first().map_or(0, |&(_, n)| n);

    GuessAnalysis {
        quality: expected_discard(guess, secrets),
        buckets,
        largest_bucket,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, CodeSpace, Peg};
    use Peg::{Blue, Orange, Red, Yellow};

    fn guess(pegs: &[Peg]) -> GuessCode {
        GuessCode::new(Code::new(pegs.to_vec()))
    }

    #[test]
    fn single_secret_has_zero_quality() {
        let space = CodeSpace::new(&Peg::CLASSIC, 4);
        let only = vec![space.secrets[100].clone()];

        for g in space.guesses.iter().step_by(37) {
            assert_eq!(expected_discard(g, &only), 0);
        }
    }

    #[test]
    fn empty_secrets_have_zero_quality() {
        assert_eq!(expected_discard(&guess(&[Red]), &[]), 0);
    }

    #[test]
    fn quality_is_bounded() {
        let space = CodeSpace::new(&[Red, Orange, Yellow], 3);
        for g in &space.guesses {
            let q = expected_discard(g, &space.secrets);
            assert!(q < space.secrets.len());
        }
    }

    #[test]
    fn matches_hand_computed_value() {
        // Against the 4 codes of {red, orange}^2, guessing RO splits them into
        // RO -> 2 red, OR -> 2 white, RR and OO -> 1 red.
        // Discards: 3*1 + 3*1 + 2*2 = 10, and 10 / 4 = 2.
        let space = CodeSpace::new(&[Red, Orange], 2);
        assert_eq!(expected_discard(&guess(&[Red, Orange]), &space.secrets), 2);

        // RR gives 2 red, 1 red (twice) and 0: discards 3 + 2*2 + 3 = 10
        assert_eq!(expected_discard(&guess(&[Red, Red]), &space.secrets), 2);
    }

    #[test]
    fn uninformative_guess_scores_zero() {
        // No secret shares a color with the guess, so every score is 0 red 0 white
        let secrets: Vec<SecretCode> = CodeSpace::new(&[Red, Orange], 2).secrets;
        assert_eq!(expected_discard(&guess(&[Blue, Blue]), &secrets), 0);
    }

    #[test]
    fn distribution_counts_every_secret() {
        let space = CodeSpace::new(&Peg::CLASSIC, 4);
        let dist = score_distribution(&space.guesses[7], &space.secrets);
        assert_eq!(dist.values().sum::<usize>(), 1296);
    }

    #[test]
    fn analysis_sorts_buckets() {
        let space = CodeSpace::new(&Peg::CLASSIC, 4);
        let analysis = analyze_guess(&guess(&[Red, Red, Orange, Orange]), &space.secrets);

        assert_eq!(analysis.buckets.iter().map(|(_, n)| n).sum::<usize>(), 1296);
        assert!(analysis.buckets.windows(2).all(|w| w[0].1 >= w[1].1));
        assert_eq!(analysis.largest_bucket, analysis.buckets[0].1);
        // Knuth's opener leaves at most 256 codes
        assert_eq!(analysis.largest_bucket, 256);
    }
}
