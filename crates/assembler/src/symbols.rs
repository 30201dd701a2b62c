//! Symbol table: names to addresses.
//!
//! Seeded with the architecture's predefined symbols. Labels are bound in
//! the first pass; variables are allocated on first use in the second pass,
//! starting at [`VARIABLE_BASE`]. A binding never changes once made.

use std::collections::HashMap;

use hack_common::{KBD, SCREEN, VARIABLE_BASE};
use log::debug;

use crate::error::AsmError;

/// Symbols every program can use without declaring them.
pub const PREDEFINED: [(&str, u16); 23] = [
    ("R0", 0),
    ("R1", 1),
    ("R2", 2),
    ("R3", 3),
    ("R4", 4),
    ("R5", 5),
    ("R6", 6),
    ("R7", 7),
    ("R8", 8),
    ("R9", 9),
    ("R10", 10),
    ("R11", 11),
    ("R12", 12),
    ("R13", 13),
    ("R14", 14),
    ("R15", 15),
    ("SP", 0),
    ("LCL", 1),
    ("ARG", 2),
    ("THIS", 3),
    ("THAT", 4),
    ("SCREEN", SCREEN),
    ("KBD", KBD),
];

/// Symbol bindings for a single assembly run.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: HashMap<String, u16>,
    next_variable: u16,
}

impl SymbolTable {
    /// A table holding only the predefined symbols.
    pub fn new() -> Self {
        Self {
            entries: PREDEFINED
                .iter()
                .map(|&(name, addr)| (name.to_string(), addr))
                .collect(),
            next_variable: VARIABLE_BASE,
        }
    }

    pub fn lookup(&self, name: &str) -> Option<u16> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Bind `name` to `address`.
    ///
    /// Rebinding to the same address is a no-op, which keeps a repeated
    /// label pass harmless. A different address is a `DuplicateLabel`.
    pub fn define(&mut self, name: &str, address: u16, line: usize) -> Result<(), AsmError> {
        match self.entries.get(name) {
            Some(&existing) if existing == address => Ok(()),
            Some(&existing) => Err(AsmError::DuplicateLabel {
                line,
                label: name.to_string(),
                existing,
                requested: address,
            }),
            None => {
                debug!("label {name} = {address}");
                self.entries.insert(name.to_string(), address);
                Ok(())
            }
        }
    }

    /// Return the existing binding for `name`, or allocate the next free
    /// variable address for it.
    ///
    /// Variables are kept below the screen map; running into it is an error
    /// rather than a silent overlap with memory-mapped I/O.
    pub fn allocate_variable(&mut self, name: &str, line: usize) -> Result<u16, AsmError> {
        if let Some(address) = self.lookup(name) {
            return Ok(address);
        }
        let address = self.next_variable;
        if address >= SCREEN {
            return Err(AsmError::VariableSpaceExhausted {
                line,
                name: name.to_string(),
            });
        }
        debug!("variable {name} = {address}");
        self.entries.insert(name.to_string(), address);
        self.next_variable += 1;
        Ok(address)
    }

    /// Address the next new variable will receive.
    pub fn next_variable(&self) -> u16 {
        self.next_variable
    }

    /// Number of bound symbols, predefined ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
