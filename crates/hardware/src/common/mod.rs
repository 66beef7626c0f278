//! Common utilities and types used throughout the LS-8 simulator.
//!
//! This module provides the building blocks shared by the decoder, the
//! machine, and the loader. It includes:
//! 1. **Constants:** Memory size, register count, and stack defaults.
//! 2. **Error Handling:** Machine traps, loader errors, and configuration errors.
//! 3. **Register Management:** The eight-entry general-purpose register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types and trap definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{MEMORY_SIZE, NUM_REGISTERS, SP};
pub use error::{ConfigError, LoadError, OutOfRange, Trap};
pub use reg::RegisterFile;
