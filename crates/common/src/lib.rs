//! Hack common types and instruction encoding.
//!
//! This crate provides the foundational data structures for the Hack
//! instruction set:
//!
//! - [`Word`]: the 16-bit machine word and its binary text form
//! - [`Instruction`]: address/command instructions with encode/decode
//! - [`encoding`]: the computation, destination and jump tables
//! - [`Program`]: a sequence of words
//! - [`DecodeError`]: errors from reading binary text
//!
//! It also fixes the architecture's memory map.

pub mod encoding;
pub mod error;
pub mod instruction;
pub mod program;
pub mod word;

// Re-export commonly used types at the crate root.
pub use encoding::{Dest, Jump};
pub use error::DecodeError;
pub use instruction::Instruction;
pub use program::Program;
pub use word::Word;

/// Width of a machine word, and of its binary text form.
pub const WORD_BITS: usize = 16;

/// Largest value an address instruction can load (15 bits).
pub const MAX_ADDRESS: u16 = 0x7FFF;

/// First address handed out to assembler variables.
pub const VARIABLE_BASE: u16 = 16;

/// Base of the memory-mapped screen.
pub const SCREEN: u16 = 0x4000;

/// Address of the memory-mapped keyboard register.
pub const KBD: u16 = 0x6000;

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy that generates a computation code present in the table.
    fn arb_comp() -> impl Strategy<Value = u8> {
        prop::sample::select(encoding::COMP_TABLE.to_vec()).prop_map(|(_, code)| code)
    }

    /// Strategy that generates a random valid command Instruction.
    fn arb_command() -> impl Strategy<Value = Instruction> {
        (arb_comp(), 0u8..8, 0u8..8).prop_map(|(comp, dest, jump)| Instruction::Compute {
            comp,
            dest: Dest::from_bits(dest),
            jump: Jump::from_bits(jump),
        })
    }

    proptest! {
        /// Every in-range address encodes as `0` followed by its 15-bit value.
        #[test]
        fn address_encoding(value in 0u16..=MAX_ADDRESS) {
            let text = Instruction::Address(value).encode().to_string();
            prop_assert_eq!(text.len(), 16);
            prop_assert_eq!(&text[..1], "0");
            prop_assert_eq!(u16::from_str_radix(&text[1..], 2).unwrap(), value);
        }

        /// Command words always carry the `111` prefix and decode back.
        #[test]
        fn command_roundtrip(instr in arb_command()) {
            let word = instr.encode();
            prop_assert!(word.to_string().starts_with("111"));
            prop_assert_eq!(Instruction::decode(word), instr);
        }

        /// Any 16-bit value survives the text form.
        #[test]
        fn word_text_roundtrip(value in any::<u16>()) {
            let word = Word(value);
            prop_assert_eq!(Word::parse(&word.to_string(), 1), Ok(word));
        }
    }
}
