//! Hack assembler: symbolic assembly to and from binary words.
//!
//! Assembly is two passes over the same lines:
//!
//! 1. [`Assembler::resolve_labels`] binds every `(LABEL)` to the address of
//!    the next real instruction, so forward references work.
//! 2. [`Assembler::emit`] classifies and encodes each real instruction,
//!    allocating addresses for new variables (from 16 up) on first use.
//!
//! # Usage
//!
//! ```
//! use hack_assembler::{assemble, disassemble};
//!
//! let program = assemble("@2\nD=A\n").unwrap();
//! assert_eq!(program.encode(), "0000000000000010\n1110110000010000\n");
//! assert_eq!(disassemble(&program), "@2\nD=A\n");
//! ```
//!
//! Every run starts from a fresh [`SymbolTable`], even when one
//! [`Assembler`] is reused; assembling the same text twice always yields the
//! same words.

pub mod error;
pub mod symbols;

mod disassembler;
mod lexer;
mod parser;

pub use disassembler::{disassemble, disassemble_word};
pub use error::{AsmError, Field};
pub use symbols::SymbolTable;

use hack_common::{Program, Word, MAX_ADDRESS};
use lexer::{classify, Statement};
use log::trace;
use parser::encode_statement;

/// A single assembly run: a symbol table plus the two passes that fill it.
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    symbols: SymbolTable,
}

impl Assembler {
    /// An assembler holding only the predefined symbols.
    pub fn new() -> Self {
        Self {
            symbols: SymbolTable::new(),
        }
    }

    /// Symbols bound so far.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// First pass: bind every label to the address of the instruction that
    /// follows it. Blank lines, comments and labels take no address.
    ///
    /// Starts a new run: symbols from any earlier run are discarded.
    pub fn resolve_labels<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<(), AsmError> {
        self.symbols = SymbolTable::new();

        let mut address: usize = 0;
        for (idx, line) in lines.iter().enumerate() {
            let line_num = idx + 1;
            match classify(line.as_ref(), line_num)? {
                Statement::Blank => {}
                Statement::Label(name) => {
                    let bound = u16::try_from(address)
                        .ok()
                        .filter(|&a| a <= MAX_ADDRESS)
                        .ok_or_else(|| AsmError::AddressOutOfRange {
                            line: line_num,
                            value: address.to_string(),
                        })?;
                    self.symbols.define(name, bound, line_num)?;
                }
                Statement::Address(_) | Statement::Command { .. } => address += 1,
            }
        }
        Ok(())
    }

    /// Resolve labels, then return the second pass as a lazy iterator of
    /// words in source order.
    ///
    /// The iterator yields at most one error and then stops.
    pub fn emit<'a, S: AsRef<str>>(
        &'a mut self,
        lines: &'a [S],
    ) -> Result<Emit<'a, S>, AsmError> {
        self.resolve_labels(lines)?;
        Ok(Emit {
            symbols: &mut self.symbols,
            lines: lines.iter().enumerate(),
            failed: false,
        })
    }

    /// Run both passes and collect the result.
    ///
    /// Returns the first error encountered.
    pub fn assemble<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<Program, AsmError> {
        let words = self.emit(lines)?.collect::<Result<Vec<_>, _>>()?;
        Ok(Program::new(words))
    }
}

/// Second-pass iterator returned by [`Assembler::emit`].
pub struct Emit<'a, S> {
    symbols: &'a mut SymbolTable,
    lines: std::iter::Enumerate<std::slice::Iter<'a, S>>,
    failed: bool,
}

impl<S: AsRef<str>> Iterator for Emit<'_, S> {
    type Item = Result<Word, AsmError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        for (idx, line) in self.lines.by_ref() {
            let line_num = idx + 1;
            let encoded = classify(line.as_ref(), line_num)
                .and_then(|stmt| encode_statement(stmt, self.symbols, line_num));
            match encoded {
                Ok(None) => continue,
                Ok(Some(instr)) => {
                    let word = instr.encode();
                    trace!("line {line_num}: {} -> {word}", line.as_ref().trim());
                    return Some(Ok(word));
                }
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}

/// Assemble text into a binary program with a fresh symbol table.
pub fn assemble(text: &str) -> Result<Program, AsmError> {
    let lines: Vec<&str> = text.lines().collect();
    Assembler::new().assemble(&lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assemble_minimal() {
        let program = assemble("@2\nD=A\n").unwrap();
        assert_eq!(program.len(), 2);
        assert_eq!(program.words[0].to_string(), "0000000000000010");
        assert_eq!(program.words[1].to_string(), "1110110000010000");
    }

    #[test]
    fn assemble_with_comments_and_blanks() {
        let text = "\
// Adds 2 and 3
@2   // first operand
D=A

@3
D=D+A
";
        let program = assemble(text).unwrap();
        assert_eq!(program.len(), 4);
    }

    #[test]
    fn labels_take_no_slot() {
        let lines = ["(START)", "@START", "// note", "", "(END)", "0;JMP"];
        let mut asm = Assembler::new();
        asm.resolve_labels(&lines).unwrap();
        assert_eq!(asm.symbols().lookup("START"), Some(0));
        assert_eq!(asm.symbols().lookup("END"), Some(1));
    }

    #[test]
    fn resolve_labels_leaves_variables_alone() {
        let lines = ["@i", "(X)", "@j"];
        let mut asm = Assembler::new();
        asm.resolve_labels(&lines).unwrap();
        assert!(!asm.symbols().contains("i"));
        assert_eq!(asm.symbols().next_variable(), 16);
    }

    #[test]
    fn forward_reference() {
        let program = assemble("@END\n0;JMP\n(END)\n").unwrap();
        assert_eq!(program.words[0], Word(2));
    }

    #[test]
    fn emit_is_lazy_and_in_order() {
        let lines = ["@1", "@2", "@3"];
        let mut asm = Assembler::new();
        let mut words = asm.emit(&lines).unwrap();
        assert_eq!(words.next(), Some(Ok(Word(1))));
        assert_eq!(words.next(), Some(Ok(Word(2))));
        assert_eq!(words.next(), Some(Ok(Word(3))));
        assert_eq!(words.next(), None);
    }

    #[test]
    fn emit_stops_after_error() {
        let lines = ["@1", "D=Q", "@2"];
        let mut asm = Assembler::new();
        let mut words = asm.emit(&lines).unwrap();
        assert_eq!(words.next(), Some(Ok(Word(1))));
        assert!(matches!(
            words.next(),
            Some(Err(AsmError::InvalidMnemonic { line: 2, .. }))
        ));
        assert_eq!(words.next(), None);
    }

    #[test]
    fn duplicate_label_is_reported_before_encoding() {
        let lines = ["(A1)", "@0", "(A1)", "D=Q"];
        let err = Assembler::new().assemble(&lines).unwrap_err();
        assert_eq!(
            err,
            AsmError::DuplicateLabel {
                line: 3,
                label: "A1".to_string(),
                existing: 0,
                requested: 1,
            }
        );
    }

    #[test]
    fn repeated_assembly_is_identical() {
        let text = "@i\nM=1\n(LOOP)\n@i\nM=M+1\n@LOOP\n0;JMP\n";
        assert_eq!(assemble(text).unwrap(), assemble(text).unwrap());
    }

    #[test]
    fn reused_assembler_starts_clean() {
        let mut asm = Assembler::new();
        let first = asm.assemble(&["@x", "(L)", "@L"]).unwrap();
        assert_eq!(first.words, vec![Word(16), Word(1)]);

        let second = asm.assemble(&["@0", "@y", "(L)", "@L"]).unwrap();
        assert_eq!(second.words, vec![Word(0), Word(16), Word(2)]);
        assert!(!asm.symbols().contains("x"));
        assert_eq!(asm.symbols().next_variable(), 17);
    }

    #[test]
    fn error_reports_correct_line() {
        let err = assemble("@1\n\nD=A\nAD=Q\n").unwrap_err();
        assert!(matches!(err, AsmError::InvalidMnemonic { line: 4, .. }));
    }
}
