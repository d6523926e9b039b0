//! Mastermind Solver
//!
//! A Mastermind codebreaker that picks each guess by the expected number of
//! candidates it discards, evaluating the guess space in parallel.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Code, GuessCode, Score, SecretCode};
//! use mastermind_solver::solver::{SecretOracle, Session, SessionConfig};
//!
//! // Score a guess by hand
//! let secret = SecretCode::new("RGBY".parse::<Code>().unwrap());
//! let guess = GuessCode::new("RBGO".parse::<Code>().unwrap());
//! assert_eq!(Score::calculate(&secret, &guess), Score::new(1, 2));
//!
//! // Or let a session find the secret
//! let config = SessionConfig::default().with_seed(Some(7));
//! let mut session = Session::new(config).unwrap();
//! let summary = session.play(&mut SecretOracle::new(secret.clone())).unwrap();
//! assert_eq!(summary.solution.to_secret(), secret);
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
