//! Program representation for Hack binaries.
//!
//! A `.hack` file is a sequence of lines, each holding one 16-character
//! binary word. There is no header.

use crate::error::DecodeError;
use crate::word::Word;

/// A Hack program: a sequence of machine words, in ROM order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// The instruction stream.
    pub words: Vec<Word>,
}

impl Program {
    /// Create a new program from a vector of words.
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Read a program from binary text lines.
    ///
    /// Surrounding whitespace is trimmed and blank lines are skipped. Line
    /// numbers in errors are 1-based positions in `lines`.
    pub fn decode<S: AsRef<str>>(lines: &[S]) -> Result<Self, DecodeError> {
        let mut words = Vec::with_capacity(lines.len());
        for (idx, line) in lines.iter().enumerate() {
            let text = line.as_ref().trim();
            if text.is_empty() {
                continue;
            }
            words.push(Word::parse(text, idx + 1)?);
        }
        Ok(Self { words })
    }

    /// Render the program as binary text, one word per line.
    pub fn encode(&self) -> String {
        let mut out = String::with_capacity(self.words.len() * 17);
        for word in &self.words {
            out.push_str(&word.to_string());
            out.push('\n');
        }
        out
    }

    /// Binary text lines, one per word.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.words.iter().map(Word::to_string)
    }

    /// Number of words in the program.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the program has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
