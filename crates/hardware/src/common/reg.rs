//! General-Purpose Register File.
//!
//! This module provides the `RegisterFile` struct holding the eight byte-wide
//! registers of the LS-8. It provides:
//! 1. **Checked Indexing:** Register operands are validated once into a [`Reg`].
//! 2. **Stack Pointer Access:** Register 7 doubles as the stack pointer.
//! 3. **Observability:** Debugging utilities for dumping register state.

use std::fmt;

use super::constants::{NUM_REGISTERS, SP};

/// A validated register index in `0..8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Reg(u8);

impl Reg {
    /// The stack pointer register, `r7`.
    pub const SP: Self = Self(SP as u8);

    /// Validates a register operand.
    ///
    /// # Returns
    ///
    /// `None` if `index` does not name one of the eight registers.
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < NUM_REGISTERS {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Returns the register number as an array index.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// The eight general-purpose registers.
///
/// All registers hold a single byte. Register 7 is the stack pointer by
/// convention; [`RegisterFile::sp`] and [`RegisterFile::set_sp`] are shorthands
/// for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; NUM_REGISTERS],
}

impl RegisterFile {
    /// Creates a register file with every register zeroed except the stack
    /// pointer, which starts at `initial_sp`.
    pub const fn new(initial_sp: u8) -> Self {
        let mut regs = [0; NUM_REGISTERS];
        regs[SP] = initial_sp;
        Self { regs }
    }

    /// Reads a register.
    #[inline]
    pub const fn read(&self, reg: Reg) -> u8 {
        self.regs[reg.index()]
    }

    /// Writes a register.
    #[inline]
    pub const fn write(&mut self, reg: Reg, val: u8) {
        self.regs[reg.index()] = val;
    }

    /// Returns the stack pointer.
    #[inline]
    pub const fn sp(&self) -> u8 {
        self.regs[SP]
    }

    /// Sets the stack pointer.
    #[inline]
    pub const fn set_sp(&mut self, val: u8) {
        self.regs[SP] = val;
    }

    /// Returns all registers in index order.
    pub const fn as_array(&self) -> &[u8; NUM_REGISTERS] {
        &self.regs
    }

    /// Dumps the contents of all registers to stderr.
    ///
    /// Displays registers in pairs with hexadecimal and decimal formatting.
    pub fn dump(&self) {
        for i in (0..NUM_REGISTERS).step_by(2) {
            eprintln!(
                "r{}={:#04x} ({:>3})  r{}={:#04x} ({:>3})",
                i,
                self.regs[i],
                self.regs[i],
                i + 1,
                self.regs[i + 1],
                self.regs[i + 1]
            );
        }
    }
}
