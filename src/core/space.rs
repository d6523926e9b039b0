//! Code space generation
//!
//! Enumerates every code over a palette so the solver can start from the
//! full set of possible secrets.

use super::{Code, GuessCode, Peg, SecretCode};
use rand::Rng;

/// Every code of `length` pegs drawn from `colors`, in a fixed order
///
/// Code `i` is `i` written as a base-`colors.len()` numeral, most significant
/// digit first and left-padded with `colors[0]`, each digit `d` becoming
/// `colors[d]`.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{generate, Code, Peg};
/// use Peg::*;
///
/// let codes = generate(&[Red, Orange], 2);
/// assert_eq!(codes, vec![
///     Code::new(vec![Red, Red]),
///     Code::new(vec![Red, Orange]),
///     Code::new(vec![Orange, Red]),
///     Code::new(vec![Orange, Orange]),
/// ]);
/// ```
#[must_use]
pub fn generate(colors: &[Peg], length: usize) -> Vec<Code> {
    let base = colors.len();
    let total = space_size(base, length);

    (0..total)
        .map(|index| {
            let mut pegs = vec![Peg::Red; length];
            let mut remainder = index;
            for slot in pegs.iter_mut().rev() {
                *slot = colors[remainder % base];
                remainder /= base;
            }
            Code::new(pegs)
        })
        .collect()
}

/// Number of codes in a space, saturating at `usize::MAX`
#[must_use]
pub fn space_size(colors: usize, length: usize) -> usize {
    (0..length).fold(1usize, |acc, _| acc.saturating_mul(colors))
}

/// A uniformly random code of `length` pegs drawn from `colors`
///
/// # Panics
/// Panics if `colors` is empty and `length > 0`.
pub fn random_code<R: Rng + ?Sized>(colors: &[Peg], length: usize, rng: &mut R) -> Code {
    Code::new(
        (0..length)
            .map(|_| colors[rng.random_range(0..colors.len())])
            .collect(),
    )
}

/// Two-color opening guess: first half `colors[0]`, second half `colors[1]`
///
/// For the classic game this is `red red orange orange`. A one-color
/// palette yields a single-color code.
///
/// # Panics
/// Panics if `colors` is empty.
#[must_use]
pub fn split_opener(colors: &[Peg], length: usize) -> GuessCode {
    let first = colors[0];
    let second = colors.get(1).copied().unwrap_or(first);
    let pegs = (0..length)
        .map(|i| if i < length / 2 { first } else { second })
        .collect();
    GuessCode::new(Code::new(pegs))
}

/// The paired starting universe of a session
///
/// Both lists hold the same codes in the same order; only the secrets are
/// narrowed as the game goes on.
#[derive(Debug, Clone)]
pub struct CodeSpace {
    pub secrets: Vec<SecretCode>,
    pub guesses: Vec<GuessCode>,
}

impl CodeSpace {
    #[must_use]
    pub fn new(colors: &[Peg], length: usize) -> Self {
        let codes = generate(colors, length);
        let secrets = codes.iter().cloned().map(SecretCode::new).collect();
        let guesses = codes.into_iter().map(GuessCode::new).collect();
        Self { secrets, guesses }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;
    use Peg::{Blue, Green, Orange, Purple, Red, Yellow};

    #[test]
    fn two_colors_two_pegs() {
        let codes: HashSet<Code> = generate(&[Red, Orange], 2).into_iter().collect();
        let expected: HashSet<Code> = [
            vec![Red, Red],
            vec![Orange, Red],
            vec![Red, Orange],
            vec![Orange, Orange],
        ]
        .into_iter()
        .map(Code::new)
        .collect();

        assert_eq!(codes, expected);
    }

    #[test]
    fn classic_space_is_complete_and_distinct() {
        let colors = Peg::CLASSIC;
        let codes = generate(&colors, 4);

        assert_eq!(codes.len(), 1296);
        let distinct: HashSet<&Code> = codes.iter().collect();
        assert_eq!(distinct.len(), 1296);
        for code in &codes {
            assert_eq!(code.len(), 4);
            assert!(code.pegs().iter().all(|p| colors.contains(p)));
        }
    }

    #[test]
    fn ordering_is_positional_numeral() {
        let codes = generate(&[Red, Orange, Yellow], 3);
        assert_eq!(codes[0].pegs(), &[Red, Red, Red]);
        assert_eq!(codes[1].pegs(), &[Red, Red, Orange]);
        assert_eq!(codes[3].pegs(), &[Red, Orange, Red]);
        // 17 = 1*9 + 2*3 + 2
        assert_eq!(codes[17].pegs(), &[Orange, Yellow, Yellow]);
        assert_eq!(codes[26].pegs(), &[Yellow, Yellow, Yellow]);
    }

    #[test]
    fn zero_length_yields_one_empty_code() {
        let codes = generate(&[Red, Blue], 0);
        assert_eq!(codes.len(), 1);
        assert!(codes[0].is_empty());
    }

    #[test]
    fn space_size_matches_generation() {
        assert_eq!(space_size(6, 4), 1296);
        assert_eq!(space_size(3, 0), 1);
        assert_eq!(space_size(8, 40), usize::MAX);
    }

    #[test]
    fn random_code_uses_palette() {
        let mut rng = StdRng::seed_from_u64(7);
        let colors = [Green, Purple];
        for _ in 0..50 {
            let code = random_code(&colors, 5, &mut rng);
            assert_eq!(code.len(), 5);
            assert!(code.pegs().iter().all(|p| colors.contains(p)));
        }
    }

    #[test]
    fn split_opener_shapes() {
        assert_eq!(split_opener(&Peg::CLASSIC, 4).pegs(), &[Red, Red, Orange, Orange]);
        assert_eq!(split_opener(&Peg::CLASSIC, 5).pegs(), &[Red, Red, Orange, Orange, Orange]);
        assert_eq!(split_opener(&[Blue], 3).pegs(), &[Blue, Blue, Blue]);
    }

    #[test]
    fn code_space_pairs_secrets_and_guesses() {
        let space = CodeSpace::new(&[Red, Orange, Yellow], 2);
        assert_eq!(space.len(), 9);
        for (secret, guess) in space.secrets.iter().zip(&space.guesses) {
            assert_eq!(secret.pegs(), guess.pegs());
        }
    }
}
