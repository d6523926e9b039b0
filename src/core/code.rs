//! Code representation
//!
//! A `Code` is an ordered sequence of pegs. The solver works with two
//! role-tagged views of it, `SecretCode` and `GuessCode`, which share a
//! layout but are only converted into one another explicitly.

use super::Peg;
use std::fmt;
use std::str::FromStr;

/// An ordered sequence of pegs
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code(Vec<Peg>);

/// Error type for invalid code text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    Empty,
    UnknownPeg(String),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Code must contain at least one peg"),
            Self::UnknownPeg(token) => write!(f, "Unknown peg color: {token}"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    #[must_use]
    pub const fn new(pegs: Vec<Peg>) -> Self {
        Self(pegs)
    }

    #[inline]
    #[must_use]
    pub fn pegs(&self) -> &[Peg] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Compact letter notation, e.g. `RROB`
    #[must_use]
    pub fn letters(&self) -> String {
        self.0.iter().map(|peg| peg.letter()).collect()
    }
}

impl From<Vec<Peg>> for Code {
    fn from(pegs: Vec<Peg>) -> Self {
        Self(pegs)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, peg) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{peg}")?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = CodeError;

    /// Parse a code from color names or letters
    ///
    /// Accepts space or comma separated tokens (`"red red orange blue"`,
    /// `"r,r,o,b"`) or a single run of letters (`"RROB"`).
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Peg};
    ///
    /// let a: Code = "red red orange blue".parse().unwrap();
    /// let b: Code = "rrob".parse().unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(a.pegs()[2], Peg::Orange);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();

        let pegs = match tokens.as_slice() {
            [] => return Err(CodeError::Empty),
            // A lone token is either one color name or a run of letters
            [single] => match single.parse::<Peg>() {
                Ok(peg) => vec![peg],
                Err(_) => single
                    .chars()
                    .map(|c| Peg::from_letter(c).ok_or_else(|| CodeError::UnknownPeg(c.to_string())))
                    .collect::<Result<Vec<_>, _>>()?,
            },
            many => many
                .iter()
                .map(|t| t.parse::<Peg>().map_err(|_| CodeError::UnknownPeg((*t).to_string())))
                .collect::<Result<Vec<_>, _>>()?,
        };

        Ok(Self(pegs))
    }
}

/// A code in the role of the hidden secret
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SecretCode(Code);

/// A code in the role of a probe guess
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GuessCode(Code);

impl SecretCode {
    #[must_use]
    pub const fn new(code: Code) -> Self {
        Self(code)
    }

    #[inline]
    #[must_use]
    pub const fn code(&self) -> &Code {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn pegs(&self) -> &[Peg] {
        self.0.pegs()
    }

    /// Reuse this secret as a guess
    #[must_use]
    pub fn to_guess(&self) -> GuessCode {
        GuessCode(self.0.clone())
    }
}

impl GuessCode {
    #[must_use]
    pub const fn new(code: Code) -> Self {
        Self(code)
    }

    #[inline]
    #[must_use]
    pub const fn code(&self) -> &Code {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn pegs(&self) -> &[Peg] {
        self.0.pegs()
    }

    /// Treat this guess as a possible secret
    #[must_use]
    pub fn to_secret(&self) -> SecretCode {
        SecretCode(self.0.clone())
    }
}

impl From<Code> for SecretCode {
    fn from(code: Code) -> Self {
        Self(code)
    }
}

impl From<Code> for GuessCode {
    fn from(code: Code) -> Self {
        Self(code)
    }
}

impl fmt::Display for SecretCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for GuessCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
