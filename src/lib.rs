//! Mastermind
//!
//! A code-breaking game: a hidden sequence of digits is drawn, the player guesses,
//! and every guess is scored by how many digits are right and in place (exact)
//! and how many are right but misplaced (partial).
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, Score};
//!
//! // Create codes
//! let secret = Code::from_digits(10, &[3, 1, 4, 1, 9]).unwrap();
//! let guess = Code::from_digits(10, &[2, 1, 2, 2, 2]).unwrap();
//!
//! // Score the guess
//! let score = Score::calculate(&secret, &guess).unwrap();
//! assert_eq!((score.exact(), score.partial()), (1, 0));
//! ```

// Core domain types
pub mod core;

// Game sessions
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
