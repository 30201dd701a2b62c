//! Error types for the Hack assembler.

use std::fmt;

use thiserror::Error;

/// Which part of a statement failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Dest,
    Comp,
    Jump,
    Address,
    Label,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Dest => "destination",
            Field::Comp => "computation",
            Field::Jump => "jump",
            Field::Address => "address",
            Field::Label => "label",
        };
        f.write_str(name)
    }
}

/// Errors produced during assembly of text to binary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    /// A fragment is not in its encoding table, or is not a valid symbol.
    #[error("line {line}: invalid {field} '{token}'")]
    InvalidMnemonic {
        line: usize,
        field: Field,
        token: String,
    },

    /// A label was bound to two different addresses.
    #[error(
        "line {line}: label '{label}' already defined at {existing} (redefined at {requested})"
    )]
    DuplicateLabel {
        line: usize,
        label: String,
        existing: u16,
        requested: u16,
    },

    /// A numeric address, or the address a label would bind to, does not
    /// fit in 15 bits.
    #[error("line {line}: address {value} out of range (max 32767)")]
    AddressOutOfRange { line: usize, value: String },

    /// A new variable would land in the memory-mapped I/O region.
    #[error("line {line}: no room for variable '{name}' below the screen map")]
    VariableSpaceExhausted { line: usize, name: String },
}
