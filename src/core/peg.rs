//! Code peg colors
//!
//! The alphabet is a small closed set, so pegs are a plain enum with a fixed
//! name table rather than free-form strings.

use std::fmt;
use std::str::FromStr;

/// One colored code peg
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Peg {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Brown,
}

/// Error type for unrecognized peg names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PegError(pub String);

impl fmt::Display for PegError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown peg color: {}", self.0)
    }
}

impl std::error::Error for PegError {}

impl Peg {
    /// Every color, in palette order
    pub const ALL: [Self; 8] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Purple,
        Self::Pink,
        Self::Brown,
    ];

    /// The six colors of the classic game
    pub const CLASSIC: [Self; 6] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Purple,
    ];

    /// The first `count` colors of the palette
    ///
    /// `count` is clamped to the number of available colors.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Peg;
    ///
    /// assert_eq!(Peg::palette(2), vec![Peg::Red, Peg::Orange]);
    /// assert_eq!(Peg::palette(99).len(), Peg::ALL.len());
    /// ```
    #[must_use]
    pub fn palette(count: usize) -> Vec<Self> {
        Self::ALL.iter().take(count).copied().collect()
    }

    /// Lowercase display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Brown => "brown",
        }
    }

    /// Single-letter abbreviation used by the compact code notation
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Orange => 'O',
            Self::Yellow => 'Y',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Purple => 'P',
            Self::Pink => 'K',
            Self::Brown => 'N',
        }
    }

    /// Look up a peg by its abbreviation (case-insensitive)
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        let upper = letter.to_ascii_uppercase();
        Self::ALL.into_iter().find(|peg| peg.letter() == upper)
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Peg {
    type Err = PegError;

    /// Accepts a full color name or a single letter, in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();

        if let Some(peg) = Self::ALL.into_iter().find(|peg| peg.name() == lower) {
            return Ok(peg);
        }

        let mut chars = lower.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::from_letter(letter).ok_or_else(|| PegError(s.to_string())),
            _ => Err(PegError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        let names: std::collections::HashSet<_> = Peg::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names.len(), Peg::ALL.len());
    }

    #[test]
    fn letters_are_unique() {
        let letters: std::collections::HashSet<_> = Peg::ALL.iter().map(|p| p.letter()).collect();
        assert_eq!(letters.len(), Peg::ALL.len());
    }

    #[test]
    fn classic_is_prefix_of_all() {
        assert_eq!(&Peg::ALL[..6], &Peg::CLASSIC);
        assert_eq!(Peg::palette(6), Peg::CLASSIC.to_vec());
    }

    #[test]
    fn parse_names_and_letters() {
        assert_eq!("red".parse::<Peg>(), Ok(Peg::Red));
        assert_eq!("PURPLE".parse::<Peg>(), Ok(Peg::Purple));
        assert_eq!("b".parse::<Peg>(), Ok(Peg::Blue));
        assert_eq!("K".parse::<Peg>(), Ok(Peg::Pink));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!("magenta".parse::<Peg>().is_err());
        assert!("x".parse::<Peg>().is_err());
        assert!("".parse::<Peg>().is_err());
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Peg::Orange.to_string(), "orange");
    }
}
