//! Disassembler: binary program → canonical assembly text.
//!
//! Output is flat text, one instruction per line, no labels, no comments.
//! Symbolic names are gone after assembly, so addresses come back as
//! decimal literals.

use hack_common::encoding::comp_mnemonic;
use hack_common::{Instruction, Program, Word};

/// Disassemble a program into canonical assembly text.
///
/// For programs built from table mnemonics the output reassembles to an
/// identical binary. A command word whose computation code has no mnemonic
/// is written out as its raw binary text.
pub fn disassemble(program: &Program) -> String {
    let mut out = String::new();
    for &word in &program.words {
        out.push_str(&disassemble_word(word));
        out.push('\n');
    }
    out
}

/// Canonical text for a single word.
pub fn disassemble_word(word: Word) -> String {
    match Instruction::decode(word) {
        Instruction::Address(value) => format!("@{value}"),
        Instruction::Compute { comp, dest, jump } => {
            let Some(comp) = comp_mnemonic(comp) else {
                return word.to_string();
            };
            let mut text = String::new();
            if !dest.mnemonic().is_empty() {
                text.push_str(dest.mnemonic());
                text.push('=');
            }
            text.push_str(comp);
            if !jump.mnemonic().is_empty() {
                text.push(';');
                text.push_str(jump.mnemonic());
            }
            text
        }
    }
}
