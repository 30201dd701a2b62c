//! Statement encoding: classified lines → instructions.

use hack_common::encoding::comp_code;
use hack_common::{Dest, Instruction, Jump, MAX_ADDRESS};

use crate::error::{AsmError, Field};
use crate::lexer::{is_symbol, Statement};
use crate::symbols::SymbolTable;

/// Encode one statement from the second pass.
///
/// Returns `Ok(None)` for blanks and labels, which occupy no ROM slot.
pub(crate) fn encode_statement(
    stmt: Statement<'_>,
    symbols: &mut SymbolTable,
    line_num: usize,
) -> Result<Option<Instruction>, AsmError> {
    match stmt {
        Statement::Blank | Statement::Label(_) => Ok(None),
        Statement::Address(token) => encode_address(token, symbols, line_num).map(Some),
        Statement::Command { dest, comp, jump } => {
            encode_command(dest, comp, jump, line_num).map(Some)
        }
    }
}

/// `@token`: a decimal literal, or a symbol resolved through the table
/// (allocating a variable if it is new).
fn encode_address(
    token: &str,
    symbols: &mut SymbolTable,
    line: usize,
) -> Result<Instruction, AsmError> {
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        let value = token
            .parse::<u32>()
            .ok()
            .filter(|&v| v <= MAX_ADDRESS as u32)
            .ok_or_else(|| AsmError::AddressOutOfRange {
                line,
                value: token.to_string(),
            })?;
        return Ok(Instruction::Address(value as u16));
    }

    if !is_symbol(token) {
        return Err(AsmError::InvalidMnemonic {
            line,
            field: Field::Address,
            token: format!("@{token}"),
        });
    }

    let address = symbols.allocate_variable(token, line)?;
    Ok(Instruction::Address(address))
}

/// `dest=comp;jump`: three independent table lookups.
fn encode_command(
    dest: Option<&str>,
    comp: &str,
    jump: Option<&str>,
    line: usize,
) -> Result<Instruction, AsmError> {
    let dest = match dest {
        None => Dest::default(),
        Some(text) => Dest::from_mnemonic(text)
            .filter(|_| !text.is_empty())
            .ok_or_else(|| invalid(line, Field::Dest, format!("{text}=")))?,
    };

    let comp = comp_code(comp).ok_or_else(|| invalid(line, Field::Comp, comp.to_string()))?;

    let jump = match jump {
        None => Jump::Never,
        Some(text) => Jump::from_mnemonic(text)
            .filter(|_| !text.is_empty())
            .ok_or_else(|| invalid(line, Field::Jump, format!(";{text}")))?,
    };

    Ok(Instruction::Compute { comp, dest, jump })
}

fn invalid(line: usize, field: Field, token: String) -> AsmError {
    AsmError::InvalidMnemonic { line, field, token }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::classify;

    fn encode(text: &str, symbols: &mut SymbolTable) -> Result<Option<String>, AsmError> {
        let stmt = classify(text, 1)?;
        Ok(encode_statement(stmt, symbols, 1)?.map(|i| i.encode().to_string()))
    }

    fn encode_fresh(text: &str) -> Result<Option<String>, AsmError> {
        encode(text, &mut SymbolTable::new())
    }

    #[test]
    fn blank_and_label_emit_nothing() {
        assert_eq!(encode_fresh("").unwrap(), None);
        assert_eq!(encode_fresh("(LOOP)").unwrap(), None);
    }

    #[test]
    fn address_literal() {
        assert_eq!(
            encode_fresh("@2").unwrap().unwrap(),
            "0000000000000010"
        );
        assert_eq!(
            encode_fresh("@32767").unwrap().unwrap(),
            "0111111111111111"
        );
    }

    #[test]
    fn address_literal_out_of_range() {
        let err = encode_fresh("@32768").unwrap_err();
        assert_eq!(
            err,
            AsmError::AddressOutOfRange {
                line: 1,
                value: "32768".to_string()
            }
        );
        let err = encode_fresh("@99999999999999999999").unwrap_err();
        assert!(matches!(err, AsmError::AddressOutOfRange { .. }));
    }

    #[test]
    fn address_predefined_symbol() {
        assert_eq!(
            encode_fresh("@SCREEN").unwrap().unwrap(),
            "0100000000000000"
        );
    }

    #[test]
    fn address_new_variable() {
        let mut symbols = SymbolTable::new();
        assert_eq!(
            encode("@i", &mut symbols).unwrap().unwrap(),
            "0000000000010000"
        );
        assert_eq!(symbols.lookup("i"), Some(16));
    }

    #[test]
    fn address_malformed() {
        for text in ["@", "@1x", "@a-b"] {
            let err = encode_fresh(text).unwrap_err();
            assert!(
                matches!(
                    err,
                    AsmError::InvalidMnemonic {
                        field: Field::Address,
                        ..
                    }
                ),
                "{text} should be rejected"
            );
        }
    }

    #[test]
    fn command_d_equals_a() {
        assert_eq!(
            encode_fresh("D=A").unwrap().unwrap(),
            "1110110000010000"
        );
    }

    #[test]
    fn command_jump_only() {
        assert_eq!(
            encode_fresh("D;JGT").unwrap().unwrap(),
            "1110001100000001"
        );
    }

    #[test]
    fn command_unknown_comp() {
        let err = encode_fresh("D=D*A").unwrap_err();
        assert_eq!(
            err,
            AsmError::InvalidMnemonic {
                line: 1,
                field: Field::Comp,
                token: "D*A".to_string()
            }
        );
    }

    #[test]
    fn command_unknown_dest() {
        let err = encode_fresh("X=D").unwrap_err();
        assert_eq!(
            err,
            AsmError::InvalidMnemonic {
                line: 1,
                field: Field::Dest,
                token: "X=".to_string()
            }
        );
    }

    #[test]
    fn command_empty_dest_is_invalid() {
        let err = encode_fresh("=D").unwrap_err();
        assert!(matches!(
            err,
            AsmError::InvalidMnemonic {
                field: Field::Dest,
                ..
            }
        ));
    }

    #[test]
    fn command_unknown_jump() {
        let err = encode_fresh("0;JUMP").unwrap_err();
        assert_eq!(
            err,
            AsmError::InvalidMnemonic {
                line: 1,
                field: Field::Jump,
                token: ";JUMP".to_string()
            }
        );
    }

    #[test]
    fn command_trailing_semicolon_is_invalid() {
        let err = encode_fresh("D;").unwrap_err();
        assert!(matches!(
            err,
            AsmError::InvalidMnemonic {
                field: Field::Jump,
                ..
            }
        ));
    }

    #[test]
    fn command_inner_whitespace_is_not_normalized() {
        let err = encode_fresh("D = A").unwrap_err();
        assert!(matches!(err, AsmError::InvalidMnemonic { .. }));
    }
}
