//! A single game against one secret code

use super::GameConfig;
use crate::core::{Code, CodeError, Score};
use rand::Rng;
use std::fmt;

/// One scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Code,
    pub score: Score,
}

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Solved { attempts: usize },
    Exhausted,
}

impl GameStatus {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Error type for rejected session operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The guess or configuration was not a valid code
    Code(CodeError),
    /// The game already ended
    Finished,
    /// An attempt budget of zero
    NoAttempts,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(err) => write!(f, "{err}"),
            Self::Finished => write!(f, "The game is already over"),
            Self::NoAttempts => write!(f, "At least one attempt is required"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Code(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CodeError> for GameError {
    fn from(err: CodeError) -> Self {
        Self::Code(err)
    }
}

/// A game in progress
///
/// Owns the secret; guesses are borrowed only long enough to be scored and
/// recorded in the history.
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    secret: Code,
    history: Vec<Turn>,
    status: GameStatus,
}

impl Session {
    /// Start a game with a secret drawn from `rng`
    ///
    /// # Errors
    /// Returns an error if the configuration fails [`GameConfig::validate`].
    ///
    /// # Examples
    /// ```
    /// use mastermind::game::{GameConfig, GameStatus, Session};
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let session = Session::new(GameConfig::default(), &mut rng).unwrap();
    /// assert_eq!(session.status(), GameStatus::InProgress);
    /// assert_eq!(session.secret().length(), 4);
    /// ```
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, GameError> {
        config.validate()?;
        let secret = Code::random(config.length, config.range, rng)?;

        Ok(Self::from_parts(config, secret))
    }

    /// Start a game with a known secret
    ///
    /// # Errors
    /// Returns `GameError::NoAttempts` if `max_attempts` is `Some(0)`.
    pub fn with_secret(secret: Code, max_attempts: Option<usize>) -> Result<Self, GameError> {
        let config = GameConfig::new(secret.length(), secret.range(), max_attempts);
        config.validate()?;

        Ok(Self::from_parts(config, secret))
    }

    fn from_parts(config: GameConfig, secret: Code) -> Self {
        Self {
            config,
            secret,
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Score a guess and record it
    ///
    /// Rejected guesses do not use up an attempt.
    ///
    /// # Errors
    /// Returns `GameError::Finished` once the game has ended, and
    /// `GameError::Code` if the guess has the wrong length or holds a digit
    /// outside the secret's range.
    pub fn guess(&mut self, guess: Code) -> Result<Turn, GameError> {
        if self.status.is_finished() {
            return Err(GameError::Finished);
        }
        if let Some(position) = guess.digits().iter().position(|&d| d >= self.config.range) {
            return Err(CodeError::DigitOutOfRange {
                position,
                digit: guess.digits()[position],
                range: self.config.range,
            }
            .into());
        }

        let score = Score::calculate(&self.secret, &guess)?;
        let turn = Turn { guess, score };
        self.history.push(turn.clone());

        if self.is_solved(score) {
            self.status = GameStatus::Solved {
                attempts: self.history.len(),
            };
        } else if self.remaining_attempts() == Some(0) {
            self.status = GameStatus::Exhausted;
        }

        Ok(turn)
    }

    /// Parse player input with this game's shape, then score it
    ///
    /// # Errors
    /// Returns every error of [`Code::parse`] and [`Session::guess`].
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Score};
    /// use mastermind::game::Session;
    ///
    /// let secret = Code::from_digits(6, &[2, 2, 3, 3]).unwrap();
    /// let mut session = Session::with_secret(secret, Some(10)).unwrap();
    ///
    /// let turn = session.guess_str("3 3 2 2").unwrap();
    /// assert_eq!(turn.score, Score::new(0, 4));
    /// ```
    pub fn guess_str(&mut self, input: &str) -> Result<Turn, GameError> {
        if self.status.is_finished() {
            return Err(GameError::Finished);
        }
        let guess = Code::parse(input, self.config.length, self.config.range)?;
        self.guess(guess)
    }

    /// Check whether a score solves this game's secret
    #[must_use]
    pub fn is_solved(&self, score: Score) -> bool {
        score.is_solved(self.secret.length())
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Number of guesses scored so far
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    /// Attempts left before the game is lost, `None` if unlimited
    #[must_use]
    pub fn remaining_attempts(&self) -> Option<usize> {
        self.config
            .max_attempts
            .map(|max| max.saturating_sub(self.history.len()))
    }

    /// The secret code
    ///
    /// Reading it does not end the game; front-ends decide what revealing means.
    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session(digits: &[u32], max_attempts: Option<usize>) -> Session {
        let secret = Code::from_digits(10, digits).unwrap();
        Session::with_secret(secret, max_attempts).unwrap()
    }

    #[test]
    fn new_session_draws_secret_of_config_shape() {
        let mut rng = StdRng::seed_from_u64(17);
        let config = GameConfig::new(6, 8, Some(12));
        let session = Session::new(config, &mut rng).unwrap();

        assert_eq!(session.secret().length(), 6);
        assert_eq!(session.secret().range(), 8);
        assert_eq!(session.attempts(), 0);
        assert_eq!(session.remaining_attempts(), Some(12));
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn new_session_rejects_invalid_config() {
        let mut rng = StdRng::seed_from_u64(17);
        assert_eq!(
            Session::new(GameConfig::new(0, 6, None), &mut rng).unwrap_err(),
            GameError::Code(CodeError::ZeroLength)
        );
        assert_eq!(
            Session::new(GameConfig::new(4, 6, Some(0)), &mut rng).unwrap_err(),
            GameError::NoAttempts
        );
    }

    #[test]
    fn scenario_guesses_score_as_expected() {
        let mut game = session(&[3, 1, 4, 1, 9], None);

        assert_eq!(game.guess_str("5 0 3 2 6").unwrap().score, Score::new(0, 1));
        assert_eq!(game.guess_str("2 1 2 2 2").unwrap().score, Score::new(1, 0));
        assert_eq!(game.guess_str("1 3 3 4 5").unwrap().score, Score::new(0, 3));
        assert_eq!(game.attempts(), 3);
        assert_eq!(game.remaining_attempts(), None);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn solving_ends_game() {
        let mut game = session(&[3, 1, 4, 1], Some(5));

        game.guess_str("1 1 1 1").unwrap();
        let turn = game.guess_str("3141").unwrap();

        assert!(game.is_solved(turn.score));
        assert_eq!(game.status(), GameStatus::Solved { attempts: 2 });
        assert_eq!(game.guess_str("0 0 0 0"), Err(GameError::Finished));
        assert_eq!(game.attempts(), 2);
    }

    #[test]
    fn running_out_of_attempts_ends_game() {
        let mut game = session(&[3, 1, 4, 1], Some(2));

        game.guess_str("0 0 0 0").unwrap();
        assert_eq!(game.status(), GameStatus::InProgress);
        game.guess_str("0 0 0 0").unwrap();

        assert_eq!(game.status(), GameStatus::Exhausted);
        assert_eq!(game.remaining_attempts(), Some(0));
        assert_eq!(
            game.guess(Code::from_digits(10, &[3, 1, 4, 1]).unwrap()),
            Err(GameError::Finished)
        );
    }

    #[test]
    fn solving_on_last_attempt_counts_as_solved() {
        let mut game = session(&[3, 1, 4, 1], Some(1));
        game.guess_str("3 1 4 1").unwrap();
        assert_eq!(game.status(), GameStatus::Solved { attempts: 1 });
    }

    #[test]
    fn rejected_guesses_do_not_use_attempts() {
        let mut game = session(&[3, 1, 4, 1], Some(3));

        let err = game.guess_str("3 1 4").unwrap_err();
        assert!(matches!(err, GameError::Code(CodeError::LengthMismatch { .. })));
        assert!(game.guess_str("a b c d").is_err());
        assert_eq!(game.attempts(), 0);
        assert_eq!(game.remaining_attempts(), Some(3));
    }

    #[test]
    fn guess_with_wider_range_is_checked_against_secret() {
        let secret = Code::from_digits(4, &[0, 1, 2, 3]).unwrap();
        let mut game = Session::with_secret(secret, None).unwrap();

        let wide = Code::from_digits(10, &[0, 1, 2, 7]).unwrap();
        match game.guess(wide) {
            Err(GameError::Code(err)) => assert_eq!(err.kind(), ErrorKind::OutOfRange),
            other => panic!("expected out-of-range error, got {other:?}"),
        }

        let narrow = Code::from_digits(10, &[0, 1, 2, 3]).unwrap();
        assert_eq!(game.guess(narrow).unwrap().score, Score::perfect(4));
    }

    #[test]
    fn history_records_turns_in_order() {
        let mut game = session(&[2, 2, 3, 3], None);
        game.guess_str("3 3 2 2").unwrap();
        game.guess_str("2 2 3 3").unwrap();

        let history = game.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].score, Score::new(0, 4));
        assert_eq!(history[1].score, Score::perfect(4));
        assert_eq!(history[0].guess.digits(), &[3, 3, 2, 2]);
    }

    #[test]
    fn error_display_and_source() {
        use std::error::Error;

        let err = GameError::from(CodeError::ZeroRange);
        assert_eq!(err.to_string(), "Digit range must be at least 1");
        assert!(err.source().is_some());
        assert!(GameError::Finished.source().is_none());
    }
}
