//! Simulation statistics collection and reporting.
//!
//! This module tracks execution counts for a run. It provides:
//! 1. **Throughput:** Instructions retired and wall-clock rate.
//! 2. **Instruction mix:** Counts by category (ALU, data, stack, control, I/O).
//! 3. **Control flow:** Conditional branches taken versus not taken.
//! 4. **Stack usage:** Deepest stack depth reached below the initial SP.

use std::fmt;
use std::time::Instant;

use crate::isa::instruction::Opcode;

/// Run statistics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions executed to completion.
    pub instructions_retired: u64,
    /// ADD, MUL and CMP.
    pub inst_alu: u64,
    /// LDI.
    pub inst_data: u64,
    /// PUSH and POP.
    pub inst_stack: u64,
    /// CALL, RET, JMP, JEQ and JNE.
    pub inst_control: u64,
    /// PRN.
    pub inst_io: u64,
    /// Conditional jumps that transferred control.
    pub branches_taken: u64,
    /// Conditional jumps that fell through.
    pub branches_not_taken: u64,
    /// Largest number of bytes on the stack at any point.
    pub max_stack_depth: u8,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_alu: 0,
            inst_data: 0,
            inst_stack: 0,
            inst_control: 0,
            inst_io: 0,
            branches_taken: 0,
            branches_not_taken: 0,
            max_stack_depth: 0,
        }
    }
}

impl SimStats {
    /// Records one retired instruction in its category.
    pub const fn retire(&mut self, op: Opcode) {
        self.instructions_retired += 1;
        match op {
            Opcode::Add | Opcode::Multiply | Opcode::Compare => self.inst_alu += 1,
            Opcode::LoadImmediate => self.inst_data += 1,
            Opcode::Push | Opcode::Pop => self.inst_stack += 1,
            Opcode::Call
            | Opcode::Return
            | Opcode::Jump
            | Opcode::JumpIfEqual
            | Opcode::JumpIfNotEqual => self.inst_control += 1,
            Opcode::PrintRegister => self.inst_io += 1,
            Opcode::Halt => {}
        }
    }

    /// Records the outcome of a conditional jump.
    pub const fn record_branch(&mut self, taken: bool) {
        if taken {
            self.branches_taken += 1;
        } else {
            self.branches_not_taken += 1;
        }
    }

    /// Updates the stack high-water mark.
    pub fn record_stack_depth(&mut self, initial_sp: u8, sp: u8) {
        let depth = initial_sp.saturating_sub(sp);
        self.max_stack_depth = self.max_stack_depth.max(depth);
    }

    /// Prints the statistics summary to stderr.
    pub fn print(&self) {
        eprintln!("{self}");
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        #[allow(clippy::cast_precision_loss)]
        let rate = if elapsed > 0.0 {
            self.instructions_retired as f64 / elapsed
        } else {
            0.0
        };

        writeln!(f, "==========================================")?;
        writeln!(f, "LS-8 SIMULATION STATISTICS")?;
        writeln!(f, "==========================================")?;
        writeln!(f, "instructions retired : {}", self.instructions_retired)?;
        writeln!(f, "host time            : {elapsed:.6} s ({rate:.0} inst/s)")?;
        writeln!(f, "  alu                : {}", self.inst_alu)?;
        writeln!(f, "  data               : {}", self.inst_data)?;
        writeln!(f, "  stack              : {}", self.inst_stack)?;
        writeln!(f, "  control            : {}", self.inst_control)?;
        writeln!(f, "  io                 : {}", self.inst_io)?;
        writeln!(
            f,
            "branches             : {} taken, {} not taken",
            self.branches_taken, self.branches_not_taken
        )?;
        write!(f, "max stack depth      : {} bytes", self.max_stack_depth)
    }
}
