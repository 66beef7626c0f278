//! Core processor implementation.
//!
//! This module contains the LS-8 machine: its architectural state, the
//! execution units it dispatches to, and the fetch-decode-execute loop.

/// Architecture-specific components (flags register).
pub mod arch;

/// Machine state and execution orchestration.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::{Cpu, ExitStatus, MachineState, StepOutcome};
