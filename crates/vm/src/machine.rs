//! Machine state: registers, program counter, memory, cycle budget.

use hack_common::Program;

use crate::error::ExecError;
use crate::image::MemoryImage;
use crate::memory::Memory;

/// CLI sentinel for "no cycle limit".
pub const UNLIMITED_CYCLES: i64 = -1;

/// How many instructions a run may execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CycleBudget {
    /// Run until the program counter leaves the program.
    #[default]
    Unlimited,
    /// Stop after this many cycles.
    Limited(u64),
}

impl CycleBudget {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, CycleBudget::Limited(0))
    }

    /// Account for one executed cycle.
    pub(crate) fn consume(&mut self) {
        if let CycleBudget::Limited(n) = self {
            *n = n.saturating_sub(1);
        }
    }
}

impl TryFrom<i64> for CycleBudget {
    type Error = ExecError;

    /// `-1` is unlimited; any other negative count is rejected.
    fn try_from(cycles: i64) -> Result<Self, Self::Error> {
        match cycles {
            UNLIMITED_CYCLES => Ok(CycleBudget::Unlimited),
            n if n >= 0 => Ok(CycleBudget::Limited(n as u64)),
            n => Err(ExecError::InvalidCycleBudget(n)),
        }
    }
}

/// The Hack emulator.
pub struct Machine<'a> {
    /// The program being executed (ROM).
    pub(crate) program: &'a Program,
    /// Address register.
    pub(crate) a: u16,
    /// Data register.
    pub(crate) d: u16,
    /// Index of the next word to execute.
    pub(crate) pc: usize,
    /// Data memory.
    pub(crate) memory: Memory,
    /// Cycles executed so far.
    pub(crate) cycles: u64,
}

impl<'a> Machine<'a> {
    /// A machine at reset: registers and memory zeroed, PC at 0.
    pub fn new(program: &'a Program) -> Self {
        Self::with_memory(program, Memory::new())
    }

    /// A machine whose RAM starts from `memory`, e.g. to supply inputs in
    /// R0/R1. Pre-seeded cells count as written and stay in the final
    /// [`MemoryImage`] even if the program never touches them.
    pub fn with_memory(program: &'a Program, memory: Memory) -> Self {
        Self {
            program,
            a: 0,
            d: 0,
            pc: 0,
            memory,
            cycles: 0,
        }
    }

    pub fn a(&self) -> u16 {
        self.a
    }

    pub fn d(&self) -> u16 {
        self.d
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Number of cycles executed so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// True once the PC has left the program.
    pub fn is_halted(&self) -> bool {
        self.pc >= self.program.len()
    }

    /// Consume the machine, keeping only the written memory.
    pub fn into_image(self) -> MemoryImage {
        MemoryImage::from(self.memory)
    }
}
