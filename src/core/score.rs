//! Mastermind scoring
//!
//! A score is the pair of counts returned for a guess:
//! - exact: digits matching the secret in value and position
//! - partial: digits present in both codes (with multiplicity) but misplaced
//!
//! Positions that score exact are removed before partial matches are counted,
//! so a correctly placed digit is never credited twice.

use super::{Code, CodeError};
use rustc_hash::FxHashMap;
use std::fmt;

/// Feedback for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    exact: usize,
    partial: usize,
}

impl Score {
    /// Create a score from raw counts
    #[inline]
    #[must_use]
    pub const fn new(exact: usize, partial: usize) -> Self {
        Self { exact, partial }
    }

    /// The score of a guess identical to a secret of `length` digits
    #[inline]
    #[must_use]
    pub const fn perfect(length: usize) -> Self {
        Self::new(length, 0)
    }

    /// Digits in the right place
    #[inline]
    #[must_use]
    pub const fn exact(self) -> usize {
        self.exact
    }

    /// Digits present in the secret but in the wrong place
    #[inline]
    #[must_use]
    pub const fn partial(self) -> usize {
        self.partial
    }

    /// Positions contributing to neither count
    #[inline]
    #[must_use]
    pub const fn misses(self, length: usize) -> usize {
        length.saturating_sub(self.exact + self.partial)
    }

    /// Check whether this score solves a secret of `length` digits
    #[inline]
    #[must_use]
    pub const fn is_solved(self, length: usize) -> bool {
        self.exact == length
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. Exact pass: count positions where the digits agree
    /// 2. Partial pass: tally the unmatched secret digits per value, then let
    ///    each unmatched guess digit consume one tally entry of its value
    ///
    /// Runs in O(length) whatever the digit range and never mutates either
    /// code. The digit ranges of the two codes may differ.
    ///
    /// # Errors
    /// Returns `CodeError::LengthMismatch` if the codes have different lengths.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Score};
    ///
    /// let secret = Code::from_digits(10, &[3, 1, 4, 1, 9]).unwrap();
    /// let guess = Code::from_digits(10, &[1, 3, 3, 4, 5]).unwrap();
    ///
    /// let score = Score::calculate(&secret, &guess).unwrap();
    /// assert_eq!(score, Score::new(0, 3));
    /// ```
    pub fn calculate(secret: &Code, guess: &Code) -> Result<Self, CodeError> {
        if secret.length() != guess.length() {
            return Err(CodeError::LengthMismatch {
                expected: secret.length(),
                actual: guess.length(),
            });
        }

        let mut exact = 0;
        let mut unmatched_guess = Vec::with_capacity(guess.length());
        let mut secret_counts: FxHashMap<u32, usize> = FxHashMap::default();

        for (&s, &g) in secret.digits().iter().zip(guess.digits()) {
            if s == g {
                exact += 1;
            } else {
                *secret_counts.entry(s).or_insert(0) += 1;
                unmatched_guess.push(g);
            }
        }

        let mut partial = 0;
        for g in unmatched_guess {
            if let Some(count) = secret_counts.get_mut(&g).filter(|count| **count > 0) {
                *count -= 1;
                partial += 1;
            }
        }

        Ok(Self { exact, partial })
    }
}

/// Score `guess` against `secret`
///
/// Shorthand for [`Score::calculate`].
///
/// # Errors
/// Returns `CodeError::LengthMismatch` if the codes have different lengths.
pub fn score(secret: &Code, guess: &Code) -> Result<Score, CodeError> {
    Score::calculate(secret, guess)
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} correct, {} misplaced", self.exact, self.partial)
    }
}
