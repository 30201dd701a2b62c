//! Decoded Hack instructions.
//!
//! Every instruction is exactly one 16-bit word:
//! ```text
//! Address: 0vvv vvvv vvvv vvvv      v = 15-bit value loaded into A
//! Command: 111a cccc ccdd djjj      a+c = comp, d = dest, j = jump
//! ```

use crate::encoding::{Dest, Jump};
use crate::word::Word;

/// Bits 15-13 of every command instruction.
const COMMAND_PREFIX: u16 = 0b111 << 13;

/// A single decoded Hack instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Load a 15-bit value into register A.
    Address(u16),
    /// Compute, optionally store, optionally jump.
    Compute {
        /// 7-bit computation code: the a-bit followed by c1..c6.
        comp: u8,
        /// Which registers/memory receive the result.
        dest: Dest,
        /// Jump condition evaluated on the result.
        jump: Jump,
    },
}

impl Instruction {
    /// Encode to a machine word.
    ///
    /// Address values are truncated to 15 bits; callers are expected to
    /// range-check before building an `Address`.
    pub fn encode(&self) -> Word {
        match *self {
            Instruction::Address(value) => Word(value & crate::MAX_ADDRESS),
            Instruction::Compute { comp, dest, jump } => Word(
                COMMAND_PREFIX
                    | ((comp as u16 & 0x7F) << 6)
                    | ((dest.bits() as u16) << 3)
                    | jump as u16,
            ),
        }
    }

    /// Decode a machine word. Every word decodes; bits 14-13 of a command
    /// word are ignored.
    pub fn decode(word: Word) -> Self {
        let bits = word.0;
        if word.is_address() {
            return Instruction::Address(bits);
        }
        Instruction::Compute {
            comp: ((bits >> 6) & 0x7F) as u8,
            dest: Dest::from_bits(((bits >> 3) & 0b111) as u8),
            jump: Jump::from_bits((bits & 0b111) as u8),
        }
    }
}
