//! Session configuration

use crate::core::{GuessCode, MAX_PEGS, Peg, space_size};
use std::fmt;

/// Largest code space a session will enumerate
pub const MAX_SPACE_SIZE: usize = 1_000_000;

/// How the first guess of a session is chosen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Opening {
    /// Evaluate every guess against the full space like any other round
    #[default]
    Evaluate,
    /// Play the two-color opener (`red red orange orange` in the classic game)
    Split,
    /// Play a given code
    Fixed(GuessCode),
}

/// Settings for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub colors: Vec<Peg>,
    pub num_pegs: usize,
    pub workers: usize,
    pub opening: Opening,
    /// Seed for tie-breaking; OS entropy when unset
    pub seed: Option<u64>,
}

/// Error type for unusable configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyPalette,
    DuplicateColor(Peg),
    TooManyPegs { pegs: usize, limit: usize },
    SpaceTooLarge { size: usize, limit: usize },
    OpeningLength { expected: usize, actual: usize },
    OpeningColor(Peg),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPalette => write!(f, "At least one peg color is required"),
            Self::DuplicateColor(peg) => write!(f, "Color {peg} appears twice in the palette"),
            Self::TooManyPegs { pegs, limit } => {
                write!(f, "Codes of {pegs} pegs exceed the limit of {limit}")
            }
            Self::SpaceTooLarge { size, limit } => {
                write!(f, "Code space of {size} codes exceeds the limit of {limit}")
            }
            Self::OpeningLength { expected, actual } => {
                write!(f, "Opening guess has {actual} pegs, expected {expected}")
            }
            Self::OpeningColor(peg) => {
                write!(f, "Opening guess uses {peg}, which is not in the palette")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            colors: Peg::CLASSIC.to_vec(),
            num_pegs: 4,
            workers: std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get),
            opening: Opening::Evaluate,
            seed: None,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn with_colors(mut self, colors: Vec<Peg>) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub const fn with_pegs(mut self, num_pegs: usize) -> Self {
        self.num_pegs = num_pegs;
        self
    }

    #[must_use]
    pub const fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    #[must_use]
    pub fn with_opening(mut self, opening: Opening) -> Self {
        self.opening = opening;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Number of codes the session will enumerate
    #[must_use]
    pub fn space_size(&self) -> usize {
        space_size(self.colors.len(), self.num_pegs)
    }

    /// Check the configuration can be played
    ///
    /// # Errors
    /// Returns `ConfigError` if the palette is empty or repeats a color, a
    /// code is longer than `MAX_PEGS`, the code space is larger than
    /// `MAX_SPACE_SIZE`, or a fixed opening does not fit the palette and peg
    /// count.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }

        for (i, peg) in self.colors.iter().enumerate() {
            if self.colors[..i].contains(peg) {
                return Err(ConfigError::DuplicateColor(*peg));
            }
        }

        if self.num_pegs > MAX_PEGS {
            return Err(ConfigError::TooManyPegs {
                pegs: self.num_pegs,
                limit: MAX_PEGS,
            });
        }

        let size = self.space_size();
        if size > MAX_SPACE_SIZE {
            return Err(ConfigError::SpaceTooLarge {
                size,
                limit: MAX_SPACE_SIZE,
            });
        }

        if let Opening::Fixed(guess) = &self.opening {
            if guess.pegs().len() != self.num_pegs {
                return Err(ConfigError::OpeningLength {
                    expected: self.num_pegs,
                    actual: guess.pegs().len(),
                });
            }
            if let Some(peg) = guess.pegs().iter().find(|p| !self.colors.contains(p)) {
                return Err(ConfigError::OpeningColor(*peg));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Code;

    #[test]
    fn default_is_classic_game() {
        let config = SessionConfig::default();
        assert_eq!(config.colors, Peg::CLASSIC.to_vec());
        assert_eq!(config.num_pegs, 4);
        assert!(config.workers >= 1);
        assert_eq!(config.space_size(), 1296);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_empty_palette() {
        let config = SessionConfig::default().with_colors(vec![]);
        assert_eq!(config.validate(), Err(ConfigError::EmptyPalette));
    }

    #[test]
    fn rejects_duplicate_colors() {
        let config = SessionConfig::default().with_colors(vec![Peg::Red, Peg::Blue, Peg::Red]);
        assert_eq!(config.validate(), Err(ConfigError::DuplicateColor(Peg::Red)));
    }

    #[test]
    fn rejects_huge_space() {
        let config = SessionConfig::default().with_colors(Peg::ALL.to_vec()).with_pegs(8);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpaceTooLarge { size: 16_777_216, .. })
        ));
    }

    #[test]
    fn rejects_codes_too_long_to_score() {
        // One color keeps the space at a single code, so only the length is at fault
        let config = SessionConfig::default().with_colors(Peg::palette(1)).with_pegs(256);
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManyPegs {
                pegs: 256,
                limit: MAX_PEGS
            })
        );

        let longest = SessionConfig::default().with_colors(Peg::palette(1)).with_pegs(MAX_PEGS);
        assert!(longest.validate().is_ok());
    }

    #[test]
    fn rejects_bad_fixed_opening() {
        let short = GuessCode::new(Code::new(vec![Peg::Red, Peg::Red]));
        let config = SessionConfig::default().with_opening(Opening::Fixed(short));
        assert_eq!(
            config.validate(),
            Err(ConfigError::OpeningLength {
                expected: 4,
                actual: 2
            })
        );

        let foreign = GuessCode::new(Code::new(vec![Peg::Red, Peg::Red, Peg::Brown, Peg::Red]));
        let config = SessionConfig::default().with_opening(Opening::Fixed(foreign));
        assert_eq!(config.validate(), Err(ConfigError::OpeningColor(Peg::Brown)));
    }

    #[test]
    fn accepts_fixed_opening_in_palette() {
        let opener: Code = "RROO".parse().unwrap();
        let config = SessionConfig::default().with_opening(Opening::Fixed(GuessCode::new(opener)));
        assert!(config.validate().is_ok());
    }
}
