//! Game configuration

use super::GameError;
use crate::core::CodeError;

/// Shape of a game: code length, digit range and attempt budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub length: usize,
    pub range: u32,
    /// `None` means unlimited attempts
    pub max_attempts: Option<usize>,
}

impl GameConfig {
    #[must_use]
    pub const fn new(length: usize, range: u32, max_attempts: Option<usize>) -> Self {
        Self {
            length,
            range,
            max_attempts,
        }
    }

    /// Check the configuration can produce a playable game
    ///
    /// # Errors
    /// Returns `GameError::Code` for an empty shape and
    /// `GameError::NoAttempts` when the attempt budget is zero.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.length == 0 {
            return Err(CodeError::ZeroLength.into());
        }
        if self.range == 0 {
            return Err(CodeError::ZeroRange.into());
        }
        if self.max_attempts == Some(0) {
            return Err(GameError::NoAttempts);
        }
        Ok(())
    }

    /// Total number of distinct codes of this shape, saturating at `u128::MAX`
    #[must_use]
    pub fn code_space(&self) -> u128 {
        let length = u32::try_from(self.length).unwrap_or(u32::MAX);
        u128::from(self.range).saturating_pow(length)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(4, 6, Some(10))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.length, 4);
        assert_eq!(config.range, 6);
        assert_eq!(config.max_attempts, Some(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_shapes() {
        assert_eq!(
            GameConfig::new(0, 6, None).validate(),
            Err(GameError::Code(CodeError::ZeroLength))
        );
        assert_eq!(
            GameConfig::new(4, 0, None).validate(),
            Err(GameError::Code(CodeError::ZeroRange))
        );
        assert_eq!(
            GameConfig::new(4, 6, Some(0)).validate(),
            Err(GameError::NoAttempts)
        );
        assert!(GameConfig::new(4, 6, None).validate().is_ok());
    }

    #[test]
    fn code_space_counts_codes() {
        assert_eq!(GameConfig::new(4, 6, None).code_space(), 1296);
        assert_eq!(GameConfig::new(5, 10, None).code_space(), 100_000);
        assert_eq!(GameConfig::new(3, 1, None).code_space(), 1);
        assert_eq!(GameConfig::new(200, 10, None).code_space(), u128::MAX);
    }
}
