//! Fetch-decode-execute loop for the Hack emulator.

use hack_common::{Dest, Instruction, Jump};
use log::{debug, trace};

use crate::alu::{alu, reads_memory};
use crate::machine::{CycleBudget, Machine};
use crate::memory::Region;

impl<'a> Machine<'a> {
    /// Execute until the budget runs out or the PC leaves the program.
    ///
    /// Returns the number of cycles executed by this call.
    pub fn run(&mut self, budget: CycleBudget) -> u64 {
        let start = self.cycles;
        let mut budget = budget;

        while !budget.is_exhausted() && self.step() {
            budget.consume();
        }

        debug!(
            "stopped after {} cycles at pc={} ({})",
            self.cycles - start,
            self.pc,
            if self.is_halted() { "end of program" } else { "budget exhausted" }
        );
        self.cycles - start
    }

    /// Execute one instruction.
    ///
    /// Returns false, without doing anything, if the PC is already past the
    /// end of the program.
    pub fn step(&mut self) -> bool {
        let Some(&word) = self.program.words.get(self.pc) else {
            return false;
        };
        trace!("pc={} word={word} a={} d={}", self.pc, self.a, self.d);

        match Instruction::decode(word) {
            Instruction::Address(value) => {
                self.a = value;
                self.pc += 1;
            }
            Instruction::Compute { comp, dest, jump } => self.exec_compute(comp, dest, jump),
        }

        self.cycles += 1;
        true
    }

    fn exec_compute(&mut self, comp: u8, dest: Dest, jump: Jump) {
        let y = if reads_memory(comp) {
            self.memory.read(self.a)
        } else {
            self.a
        };
        let result = alu(comp, self.d, y);

        // M, D and A are written simultaneously: M goes to the old A.
        let target = self.a;
        if dest.writes_m() {
            if Region::of(target).is_io() {
                debug!("write {result} to I/O address {target}");
            }
            self.memory.write(target, result);
        }
        if dest.writes_d() {
            self.d = result;
        }
        if dest.writes_a() {
            self.a = result;
        }

        self.pc = if jump_taken(jump, result) {
            self.a as usize
        } else {
            self.pc + 1
        };
    }
}

/// Evaluate a jump condition against the sign and zero status of `value`.
pub fn jump_taken(jump: Jump, value: u16) -> bool {
    let signed = value as i16;
    match jump {
        Jump::Never => false,
        Jump::Jgt => signed > 0,
        Jump::Jeq => signed == 0,
        Jump::Jge => signed >= 0,
        Jump::Jlt => signed < 0,
        Jump::Jne => signed != 0,
        Jump::Jle => signed <= 0,
        Jump::Jmp => true,
    }
}
