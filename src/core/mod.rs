//! Core domain types for Mastermind
//!
//! Pegs, codes, scores and the code space. Everything here is pure and
//! single-threaded; the solver builds on top of it.

mod code;
mod peg;
mod score;
mod space;

pub use code::{Code, CodeError, GuessCode, SecretCode};
pub use peg::{Peg, PegError};
pub use score::{MAX_PEGS, Score, ScoreError};
pub use space::{CodeSpace, generate, random_code, space_size, split_opener};
