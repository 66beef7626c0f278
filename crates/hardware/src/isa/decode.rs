//! LS-8 Instruction Decoder.
//!
//! Maps a fetched instruction byte onto the closed [`Opcode`] set. Bytes that
//! do not name a recognized instruction become [`Trap::IllegalInstruction`].

use crate::common::error::Trap;
use crate::isa::instruction::Opcode;
use crate::isa::opcodes;

/// Decodes an instruction byte.
///
/// # Arguments
///
/// * `byte` - The instruction byte fetched from memory.
/// * `pc` - Address the byte was fetched from, reported on failure.
///
/// # Returns
///
/// The recognized opcode.
///
/// # Errors
///
/// Returns `Trap::IllegalInstruction` for any byte outside the opcode table.
pub const fn decode(byte: u8, pc: usize) -> Result<Opcode, Trap> {
    let op = match byte {
        opcodes::HLT => Opcode::Halt,
        opcodes::LDI => Opcode::LoadImmediate,
        opcodes::PRN => Opcode::PrintRegister,
        opcodes::ADD => Opcode::Add,
        opcodes::MUL => Opcode::Multiply,
        opcodes::PUSH => Opcode::Push,
        opcodes::POP => Opcode::Pop,
        opcodes::CALL => Opcode::Call,
        opcodes::RET => Opcode::Return,
        opcodes::CMP => Opcode::Compare,
        opcodes::JMP => Opcode::Jump,
        opcodes::JEQ => Opcode::JumpIfEqual,
        opcodes::JNE => Opcode::JumpIfNotEqual,
        _ => return Err(Trap::IllegalInstruction { opcode: byte, pc }),
    };
    Ok(op)
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    /// Converts an instruction byte, returning the byte itself if unrecognized.
    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        decode(byte, 0).map_err(|_| byte)
    }
}
