//! The 16-bit machine word and its textual form.
//!
//! Hack binaries are text files holding one word per line, written as
//! exactly 16 `0`/`1` characters, most significant bit first.

use std::fmt;

use crate::error::DecodeError;
use crate::WORD_BITS;

/// A single 16-bit Hack machine word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Word(pub u16);

impl Word {
    /// Bit 15 clear marks an address instruction.
    pub fn is_address(self) -> bool {
        self.0 & 0x8000 == 0
    }

    /// Parse the 16-character binary form. `line` is used for error reporting.
    pub fn parse(text: &str, line: usize) -> Result<Self, DecodeError> {
        let len = text.chars().count();
        if len != WORD_BITS {
            return Err(DecodeError::InvalidWordLength { line, len });
        }

        let mut value = 0u16;
        for c in text.chars() {
            let bit = match c {
                '0' => 0,
                '1' => 1,
                found => return Err(DecodeError::InvalidWordDigit { line, found }),
            };
            value = (value << 1) | bit;
        }
        Ok(Self(value))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016b}", self.0)
    }
}

impl From<u16> for Word {
    fn from(value: u16) -> Self {
        Self(value)
    }
}
