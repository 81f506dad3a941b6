//! Password length validation.

use std::fmt;

use thiserror::Error;

/// Field-level error for the length input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LengthError {
    /// Empty or not a whole number.
    #[error("Please enter password length")]
    Required,
    #[error("Minimum 4 characters")]
    TooShort,
    #[error("Maximum 24 characters")]
    TooLong,
}

/// A length that has passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PasswordLength(usize);

impl PasswordLength {
    pub const MIN: usize = 4;
    pub const MAX: usize = 24;

    pub fn new(len: usize) -> Result<Self, LengthError> {
        match len {
            n if n < Self::MIN => Err(LengthError::TooShort),
            n if n > Self::MAX => Err(LengthError::TooLong),
            n => Ok(Self(n)),
        }
    }

    /// Validate raw text from the length field.
    pub fn parse(raw: &str) -> Result<Self, LengthError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(LengthError::Required);
        }

        match raw.parse::<i64>() {
            Ok(n) if n < Self::MIN as i64 => Err(LengthError::TooShort),
            Ok(n) => Self::new(n as usize),
            // Whole numbers too large for i64 are still just too long
            Err(_) if is_integer(raw) => {
                if raw.starts_with('-') {
                    Err(LengthError::TooShort)
                } else {
                    Err(LengthError::TooLong)
                }
            }
            Err(_) => Err(LengthError::Required),
        }
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for PasswordLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_integer(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}
