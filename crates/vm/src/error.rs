//! Errors for the Hack emulator.
//!
//! Execution itself cannot fail: every word decodes and running off the end
//! of the program is a normal halt. What can fail is producing the program
//! to run.

use hack_assembler::AsmError;
use hack_common::DecodeError;
use thiserror::Error;

/// Errors that occur before or while setting up a run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecError {
    /// Symbolic source failed to assemble.
    #[error(transparent)]
    Assembly(#[from] AsmError),

    /// Binary text is not a sequence of 16-bit words.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A cycle count below the unlimited sentinel.
    #[error("invalid cycle budget {0} (use -1 for unlimited)")]
    InvalidCycleBudget(i64),
}
