//! LS-8 instruction-set simulator library.
//!
//! This crate implements a simulator for the LS-8, an eight-bit machine with
//! 256 bytes of memory, eight registers, a flags register, and a downward
//! growing stack. It provides the following:
//! 1. **Core:** The machine state and its fetch-decode-execute loop.
//! 2. **ISA:** Opcode table, instruction byte fields, and the decoder.
//! 3. **Simulation:** The text program loader, configuration, and statistics.
//!
//! # Examples
//!
//! ```
//! use ls8_core::{Config, Cpu};
//!
//! // LDI r0,8; LDI r1,9; MUL r0,r1; PRN r0; HLT
//! let program = [0x82, 0, 8, 0x82, 1, 9, 0xA2, 0, 1, 0x47, 0, 0x01];
//!
//! let mut cpu = Cpu::new(&Config::default());
//! cpu.load(&program).unwrap();
//!
//! let mut out = Vec::new();
//! let _ = cpu.run(&mut out).unwrap();
//! assert_eq!(out, b"72\n");
//! ```

/// Common types and constants (registers, errors, machine dimensions).
pub mod common;
/// Simulator configuration (defaults and JSON loading).
pub mod config;
/// Machine core (state, memory, ALU, execution loop).
pub mod core;
/// Instruction set (opcodes, fields, decoder).
pub mod isa;
/// Program loader.
pub mod sim;
/// Execution statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// The machine; construct with `Cpu::new`.
pub use crate::core::Cpu;
/// Machine fault type.
pub use crate::common::error::Trap;
