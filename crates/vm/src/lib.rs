//! Hack emulator: executes Hack machine words instruction by instruction.
//!
//! The machine has:
//! - Registers A and D (16 bits each)
//! - A program counter indexing into the program (ROM)
//! - Sparse data memory, 0 wherever it was never written
//!
//! Each cycle either loads A (address instruction) or runs the ALU, writes
//! the result to any of M/D/A and possibly jumps to A (command instruction).
//!
//! # Usage
//!
//! ```
//! use hack_vm::{execute, CycleBudget};
//!
//! let source = ["@7", "D=A", "@0", "M=D"];
//! let image = execute(&source, CycleBudget::Unlimited, true).unwrap();
//! assert_eq!(image.get(0), Some(7));
//! ```

pub mod alu;
pub mod error;
pub mod execute;
pub mod image;
pub mod machine;
pub mod memory;

pub use alu::alu;
pub use error::ExecError;
pub use image::MemoryImage;
pub use machine::{CycleBudget, Machine, UNLIMITED_CYCLES};
pub use memory::{Memory, Region};

use hack_assembler::Assembler;
use hack_common::Program;

/// Run a program from reset and return the memory it wrote.
pub fn run(program: &Program, budget: CycleBudget) -> MemoryImage {
    let mut machine = Machine::new(program);
    machine.run(budget);
    machine.into_image()
}

/// Turn input lines into a program: assemble them if they are symbolic
/// source, otherwise read them as binary words.
pub fn load<S: AsRef<str>>(lines: &[S], is_source: bool) -> Result<Program, ExecError> {
    let program = if is_source {
        Assembler::new().assemble(lines)?
    } else {
        Program::decode(lines)?
    };
    Ok(program)
}

/// Load and run `lines`, returning the final memory image.
///
/// This is the primary entry point. Running past the end of the program or
/// exhausting `budget` both end the run normally.
pub fn execute<S: AsRef<str>>(
    lines: &[S],
    budget: CycleBudget,
    is_source: bool,
) -> Result<MemoryImage, ExecError> {
    let program = load(lines, is_source)?;
    Ok(run(&program, budget))
}
