//! Trap and Error definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Trap Representation:** Every fault that stops the fetch-decode-execute loop.
//! 2. **Loader Errors:** Failures reading or parsing a program file.
//! 3. **Configuration Errors:** Failures reading or deserializing a JSON config.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::isa::instruction::AluOp;

/// Machine faults.
///
/// A trap moves the machine into its `Faulted` state. Address-carrying
/// variants report the offending address; instruction-carrying variants report
/// the program counter of the instruction that faulted.
#[derive(Debug, Error)]
pub enum Trap {
    /// Memory access outside `0..=255`.
    #[error("memory access out of bounds at address {addr:#04x} (pc {pc:#04x})")]
    OutOfBounds {
        /// The faulting address.
        addr: usize,
        /// Program counter when the access was made.
        pc: usize,
    },

    /// The fetched byte is not a recognized opcode.
    #[error("illegal instruction {opcode:#010b} at pc {pc:#04x}")]
    IllegalInstruction {
        /// The unrecognized instruction byte.
        opcode: u8,
        /// Address the byte was fetched from.
        pc: usize,
    },

    /// The ALU was asked to perform an operation it does not implement.
    #[error("unsupported ALU operation {0:?}")]
    UnsupportedAluOperation(AluOp),

    /// A register operand named a register outside `0..8`.
    #[error("invalid register r{index} at pc {pc:#04x}")]
    InvalidRegister {
        /// The register operand as encoded.
        index: u8,
        /// Address of the faulting instruction.
        pc: usize,
    },

    /// PUSH or CALL with the stack pointer already at address 0.
    #[error("stack overflow at pc {pc:#04x}")]
    StackOverflow {
        /// Address of the faulting instruction.
        pc: usize,
    },

    /// POP or RET with the stack pointer already at address 255.
    #[error("stack underflow at pc {pc:#04x}")]
    StackUnderflow {
        /// Address of the faulting instruction.
        pc: usize,
    },

    /// The configured instruction budget ran out before HALT.
    #[error("instruction limit of {0} exceeded")]
    InstructionLimitExceeded(u64),

    /// `step` was called on a machine that has already faulted.
    #[error("machine is stopped after a fault")]
    MachineStopped,

    /// Writing program output failed.
    #[error("failed to write program output")]
    Output(#[from] io::Error),
}

/// An address outside main memory.
///
/// Raised by [`Ram`](crate::core::cpu::memory::Ram), which has no notion of the
/// running instruction. The machine turns it into [`Trap::OutOfBounds`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("address {addr:#04x} is outside memory")]
pub struct OutOfRange {
    /// The rejected address.
    pub addr: usize,
}

impl OutOfRange {
    /// Attaches the program counter of the faulting instruction.
    pub const fn at(self, pc: usize) -> Trap {
        Trap::OutOfBounds { addr: self.addr, pc }
    }
}

/// Errors raised while reading or parsing a program file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be opened or read.
    #[error("could not read '{}'", path.display())]
    Io {
        /// Path of the program file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line does not hold a valid 8-bit binary literal.
    #[error("line {line}: '{text}' is not an 8-bit binary value")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// The offending text with comment and whitespace removed.
        text: String,
    },

    /// The program does not fit in memory.
    #[error("program is {len} bytes; memory holds {capacity}")]
    TooLarge {
        /// Number of bytes in the program.
        len: usize,
        /// Memory size in bytes.
        capacity: usize,
    },
}

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config '{}'", path.display())]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid config")]
    Json(#[from] serde_json::Error),
}
