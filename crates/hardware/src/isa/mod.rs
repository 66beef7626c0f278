//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the LS-8 opcode table, the bit layout of an instruction byte, and
//! the decoder that turns a fetched byte into an [`Opcode`](instruction::Opcode).
//!
//! # Encoding
//!
//! Every instruction byte has the layout `AABCDDDD`:
//!
//! * `AA`: number of operand bytes that follow (0, 1, or 2).
//! * `B`: set for ALU operations.
//! * `C`: set for instructions that assign the program counter themselves.
//! * `DDDD`: instruction identifier.

/// Instruction byte decoding.
pub mod decode;

/// Instruction field extraction and the decoded opcode set.
pub mod instruction;

/// Raw opcode byte values.
pub mod opcodes;

pub use decode::decode;
pub use instruction::{AluOp, InstructionBits, Opcode};
