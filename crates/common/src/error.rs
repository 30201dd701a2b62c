//! Decode errors for Hack binary text.

use thiserror::Error;

/// Errors that occur while reading binary words from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A word is not exactly 16 characters long.
    #[error("line {line}: expected 16 binary digits, found {len}")]
    InvalidWordLength { line: usize, len: usize },

    /// A word contains something other than `0` or `1`.
    #[error("line {line}: invalid binary digit '{found}'")]
    InvalidWordDigit { line: usize, found: char },
}
