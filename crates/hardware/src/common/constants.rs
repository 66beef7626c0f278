//! Machine-Wide Constants.
//!
//! This module defines the fixed dimensions of the LS-8 machine. It includes:
//! 1. **Memory Constants:** Size of the byte-addressed RAM.
//! 2. **Register Constants:** Register count and reserved register indices.
//! 3. **Stack Constants:** Default stack pointer position.

/// Size of main memory in bytes (the full 8-bit address space).
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 8;

/// Register reserved as the stack pointer.
pub const SP: usize = 7;

/// Initial stack pointer value.
///
/// Addresses `0xF4..=0xFF` sit above the stack; the first PUSH lands at `0xF3`.
pub const DEFAULT_INITIAL_SP: u8 = 0xF4;

/// Mask applied to all register and memory values.
pub const BYTE_MASK: u16 = 0xFF;
