//! LS-8 Opcodes.
//!
//! Defines the byte value of every instruction the machine recognizes.

/// Halt the machine.
pub const HLT: u8 = 0b0000_0001;

/// Return from subroutine.
pub const RET: u8 = 0b0001_0001;

/// Push a register onto the stack.
pub const PUSH: u8 = 0b0100_0101;

/// Pop the top of the stack into a register.
pub const POP: u8 = 0b0100_0110;

/// Print a register as a decimal integer.
pub const PRN: u8 = 0b0100_0111;

/// Call the subroutine whose address is in a register.
pub const CALL: u8 = 0b0101_0000;

/// Jump to the address in a register.
pub const JMP: u8 = 0b0101_0100;

/// Jump if the last comparison was equal.
pub const JEQ: u8 = 0b0101_0101;

/// Jump if the last comparison was not equal.
pub const JNE: u8 = 0b0101_0110;

/// Load an immediate value into a register.
pub const LDI: u8 = 0b1000_0010;

/// Add two registers (ALU).
pub const ADD: u8 = 0b1010_0000;

/// Multiply two registers (ALU).
pub const MUL: u8 = 0b1010_0010;

/// Compare two registers and set the flags (ALU).
pub const CMP: u8 = 0b1010_0111;
