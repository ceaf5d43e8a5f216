//! Game sessions
//!
//! A session owns one secret code and scores guesses against it until the code
//! is solved or the attempt budget runs out.

mod config;
mod session;

pub use config::GameConfig;
pub use session::{GameError, GameStatus, Session, Turn};
