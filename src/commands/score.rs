//! Score command
//!
//! Scores a known secret against a list of guesses without running a game.

use crate::core::{Code, Score};
use crate::game::Turn;

/// Result of scoring guesses against one secret
pub struct ScoreReport {
    pub secret: Code,
    pub turns: Vec<Turn>,
}

impl ScoreReport {
    /// The first guess that solves the secret, counted from 1
    #[must_use]
    pub fn solved_at(&self) -> Option<usize> {
        self.turns
            .iter()
            .position(|turn| turn.score.is_solved(self.secret.length()))
            .map(|i| i + 1)
    }
}

/// Score each guess against the secret
///
/// The secret's length is the number of digits given; every guess must match it.
///
/// # Errors
///
/// Returns an error naming the offending input if the secret or any guess is
/// not a valid code of the secret's shape.
pub fn score_codes(secret: &str, guesses: &[String], range: u32) -> Result<ScoreReport, String> {
    let secret = Code::parse_any_length(secret, range).map_err(|e| format!("Invalid secret: {e}"))?;

    let turns = guesses
        .iter()
        .map(|input| {
            let guess = Code::parse(input, secret.length(), range)
                .map_err(|e| format!("Invalid guess '{input}': {e}"))?;
            let score = Score::calculate(&secret, &guess).map_err(|e| e.to_string())?;
            Ok(Turn { guess, score })
        })
        .collect::<Result<Vec<_>, String>>()?;

    Ok(ScoreReport { secret, turns })
}
