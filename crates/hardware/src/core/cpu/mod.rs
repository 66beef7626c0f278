//! Machine Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which owns the entire
//! LS-8 machine state. It coordinates the following:
//! 1. **State Management:** Registers, program counter, flags, and run state.
//! 2. **Memory:** The 256-byte RAM and program loading.
//! 3. **Observability:** Trace lines, state dumps, and statistics.

/// Fetch-decode-execute loop and instruction semantics.
pub mod execution;

/// Main memory.
pub mod memory;

use std::fmt::Write as _;

use tracing::debug;

use crate::common::error::Trap;
use crate::common::reg::{Reg, RegisterFile};
use crate::config::Config;
use crate::core::arch::flags::Flags;
use crate::stats::SimStats;

use self::memory::Ram;

/// Run state of the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MachineState {
    /// Executing instructions.
    Running,
    /// Stopped by HLT.
    Halted,
    /// Stopped by a trap.
    Faulted,
}

/// Result of a single successful step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The machine is ready for the next instruction.
    Continue,
    /// The machine executed HLT (or had already halted).
    Halted,
}

/// Summary of a run that ended in HLT.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExitStatus {
    /// Address of the HLT instruction.
    pub pc: usize,
    /// Instructions retired, including the HLT.
    pub instructions_retired: u64,
}

/// The LS-8 machine.
///
/// Created once with zeroed memory and registers, PC at 0, the stack pointer
/// at its configured reset value, and the flags cleared. [`Cpu::load`] only
/// touches memory; [`Cpu::step`] and [`Cpu::run`] mutate everything else.
#[derive(Debug)]
pub struct Cpu {
    /// General-purpose registers (`r7` is the stack pointer).
    pub regs: RegisterFile,
    /// Program counter.
    pub pc: usize,
    /// Flags register.
    pub flags: Flags,
    /// Main memory.
    pub ram: Ram,
    /// Run state.
    pub state: MachineState,
    /// Write a trace line before every instruction.
    pub trace: bool,
    /// Instruction budget for [`Cpu::run`].
    pub max_instructions: Option<u64>,
    /// Stack pointer value at reset (for stack depth accounting).
    pub initial_sp: u8,
    /// Execution statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a machine in its reset state.
    ///
    /// # Arguments
    ///
    /// * `config` - Run and machine configuration.
    pub fn new(config: &Config) -> Self {
        let initial_sp = config.machine.initial_sp;
        Self {
            regs: RegisterFile::new(initial_sp),
            pc: 0,
            flags: Flags::new(),
            ram: Ram::new(),
            state: MachineState::Running,
            trace: config.general.trace_instructions,
            max_instructions: config.general.max_instructions,
            initial_sp,
            stats: SimStats::default(),
        }
    }

    /// Copies a program image into memory starting at address 0.
    ///
    /// # Errors
    ///
    /// Returns `Trap::OutOfBounds` if the image is larger than memory, in
    /// which case memory is left untouched.
    pub fn load(&mut self, program: &[u8]) -> Result<(), Trap> {
        self.ram
            .load_at(0, program)
            .map_err(|e| e.at(self.pc))?;
        debug!(bytes = program.len(), "program loaded");
        Ok(())
    }

    /// Returns the program counter.
    pub const fn pc(&self) -> usize {
        self.pc
    }

    /// Reads register `index`, or `None` if there is no such register.
    pub fn reg(&self, index: u8) -> Option<u8> {
        Reg::new(index).map(|r| self.regs.read(r))
    }

    /// Returns the stack pointer.
    pub const fn sp(&self) -> u8 {
        self.regs.sp()
    }

    /// Returns the flags register.
    pub const fn flags(&self) -> Flags {
        self.flags
    }

    /// Returns the run state.
    pub const fn state(&self) -> MachineState {
        self.state
    }

    /// Returns main memory.
    pub const fn ram(&self) -> &Ram {
        &self.ram
    }

    /// Formats the current state as a single trace line.
    ///
    /// Shows PC, the next three memory bytes, and all registers in hex:
    /// `TRACE: 00 | 82 00 08 | 00 00 00 00 00 00 00 F4`. Bytes past the end
    /// of memory print as `--`.
    pub fn trace_line(&self) -> String {
        let mut line = format!("TRACE: {:02X} |", self.pc);
        for offset in 0..3 {
            match self.ram.read(self.pc.saturating_add(offset)) {
                Ok(byte) => {
                    let _ = write!(line, " {byte:02X}");
                }
                Err(_) => line.push_str(" --"),
            }
        }
        line.push_str(" |");
        for val in self.regs.as_array() {
            let _ = write!(line, " {val:02X}");
        }
        line
    }

    /// Dumps PC, flags, run state and registers to stderr.
    pub fn dump_state(&self) {
        eprintln!("--- MACHINE STATE ---");
        eprintln!("PC: {:#04x}  FL: {}  State: {:?}", self.pc, self.flags, self.state);
        self.regs.dump();
        eprintln!("---------------------");
    }
}
