//! Core domain types for Mastermind
//!
//! This module contains the code and scoring types. Everything here is pure:
//! no I/O, no global state, randomness only through a caller-supplied generator.

mod code;
mod score;

pub use code::{Code, CodeError, ErrorKind};
pub use score::{Score, score};
