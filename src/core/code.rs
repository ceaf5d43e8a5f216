//! Mastermind code representation
//!
//! A Code is a fixed-length sequence of digits, each in `[0, range)`. The same
//! type is used for the hidden secret and for every guess scored against it.

use rand::Rng;
use std::fmt;

/// A fixed-length sequence of digits drawn from `[0, range)`
///
/// The digit vector always holds exactly `length` values and every value is
/// below `range`. Scoring only ever borrows a Code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    range: u32,
    digits: Vec<u32>,
}

/// Broad classification of a [`CodeError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A length, range or shape argument was unusable
    InvalidArgument,
    /// A digit fell outside `[0, range)`
    OutOfRange,
}

/// Error type for invalid codes and invalid scoring requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    ZeroLength,
    ZeroRange,
    LengthMismatch { expected: usize, actual: usize },
    DigitOutOfRange { position: usize, digit: u32, range: u32 },
    InvalidDigit(String),
}

impl CodeError {
    /// Classify this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DigitOutOfRange { .. } => ErrorKind::OutOfRange,
            Self::ZeroLength
            | Self::ZeroRange
            | Self::LengthMismatch { .. }
            | Self::InvalidDigit(_) => ErrorKind::InvalidArgument,
        }
    }
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLength => write!(f, "Code length must be at least 1"),
            Self::ZeroRange => write!(f, "Digit range must be at least 1"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Expected {expected} digits, got {actual}")
            }
            Self::DigitOutOfRange {
                position,
                digit,
                range,
            } => write!(
                f,
                "Digit {digit} at position {} is outside 0..{}",
                position + 1,
                range - 1
            ),
            Self::InvalidDigit(token) => write!(f, "'{token}' is not a digit"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a code of `length` digits drawn uniformly from `[0, range)`
    ///
    /// # Errors
    /// Returns `CodeError::ZeroLength` or `CodeError::ZeroRange` if either
    /// dimension is zero.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let code = Code::random(5, 10, &mut rng).unwrap();
    /// assert_eq!(code.length(), 5);
    /// assert!(code.digits().iter().all(|&d| d < 10));
    /// ```
    pub fn random<R: Rng + ?Sized>(length: usize, range: u32, rng: &mut R) -> Result<Self, CodeError> {
        check_shape(length, range)?;

        let digits = (0..length).map(|_| rng.random_range(0..range)).collect();
        Ok(Self { range, digits })
    }

    /// Create a code from explicit digits; the length is the digit count
    ///
    /// # Errors
    /// Returns `CodeError::ZeroLength` for an empty slice, `CodeError::ZeroRange`
    /// for a zero range and `CodeError::DigitOutOfRange` for any digit `>= range`.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    ///
    /// let code = Code::from_digits(10, &[3, 1, 4, 1, 9]).unwrap();
    /// assert_eq!(code.to_string(), "3 1 4 1 9");
    /// assert!(Code::from_digits(4, &[3, 1, 4]).is_err());
    /// ```
    pub fn from_digits(range: u32, digits: &[u32]) -> Result<Self, CodeError> {
        check_shape(digits.len(), range)?;
        check_digits(digits, range)?;

        Ok(Self {
            range,
            digits: digits.to_vec(),
        })
    }

    /// Replace every digit of this code
    ///
    /// Nothing changes unless the whole replacement is valid.
    ///
    /// # Errors
    /// Returns `CodeError::LengthMismatch` if `values` is not exactly
    /// `length()` long and `CodeError::DigitOutOfRange` if any value is `>= range()`.
    pub fn set_digits(&mut self, values: &[u32]) -> Result<(), CodeError> {
        if values.len() != self.digits.len() {
            return Err(CodeError::LengthMismatch {
                expected: self.digits.len(),
                actual: values.len(),
            });
        }
        check_digits(values, self.range)?;

        self.digits.copy_from_slice(values);
        Ok(())
    }

    /// Parse player input into a code of the given shape
    ///
    /// Digits may be separated by whitespace and/or commas. When every digit
    /// fits in one character (`range <= 10`) an unseparated run such as
    /// `"3141"` is accepted too.
    ///
    /// # Errors
    /// Returns `CodeError::InvalidDigit` for tokens that are not numbers,
    /// `CodeError::LengthMismatch` when the digit count differs from `length`,
    /// plus every error [`Code::from_digits`] reports.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    ///
    /// let spaced = Code::parse("3 1 4 1", 4, 6).unwrap();
    /// let compact = Code::parse("3141", 4, 6).unwrap();
    /// assert_eq!(spaced, compact);
    /// assert!(Code::parse("3 1 4", 4, 6).is_err());
    /// ```
    pub fn parse(input: &str, length: usize, range: u32) -> Result<Self, CodeError> {
        check_shape(length, range)?;

        let digits = parse_digits(input, range)?;
        if digits.len() != length {
            return Err(CodeError::LengthMismatch {
                expected: length,
                actual: digits.len(),
            });
        }

        Self::from_digits(range, &digits)
    }

    /// Parse player input into a code whose length is the number of digits given
    ///
    /// Accepts the same formats as [`Code::parse`].
    ///
    /// # Errors
    /// Returns `CodeError::InvalidDigit` for tokens that are not numbers, plus
    /// every error [`Code::from_digits`] reports.
    pub fn parse_any_length(input: &str, range: u32) -> Result<Self, CodeError> {
        let digits = parse_digits(input, range)?;
        Self::from_digits(range, &digits)
    }

    /// Get the digits as a read-only slice
    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[u32] {
        &self.digits
    }

    /// Number of digits in the code
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.digits.len()
    }

    /// Exclusive upper bound on digit values
    #[inline]
    #[must_use]
    pub const fn range(&self) -> u32 {
        self.range
    }
}

fn check_shape(length: usize, range: u32) -> Result<(), CodeError> {
    if length == 0 {
        return Err(CodeError::ZeroLength);
    }
    if range == 0 {
        return Err(CodeError::ZeroRange);
    }
    Ok(())
}

fn parse_digits(input: &str, range: u32) -> Result<Vec<u32>, CodeError> {
    let tokens: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .collect();

    match tokens.as_slice() {
        [run] if range <= 10 && run.chars().count() > 1 => run
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .ok_or_else(|| CodeError::InvalidDigit(c.to_string()))
            })
            .collect(),
        _ => tokens
            .iter()
            .map(|token| {
                token
                    .parse::<u32>()
                    .map_err(|_| CodeError::InvalidDigit((*token).to_string()))
            })
            .collect(),
    }
}

fn check_digits(digits: &[u32], range: u32) -> Result<(), CodeError> {
    match digits.iter().position(|&d| d >= range) {
        Some(position) => Err(CodeError::DigitOutOfRange {
            position,
            digit: digits[position],
            range,
        }),
        None => Ok(()),
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, digit) in self.digits.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
