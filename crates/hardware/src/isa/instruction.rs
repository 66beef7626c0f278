//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction for the `AABCDDDD` instruction byte and the closed
//! set of opcodes the machine executes.

use std::fmt;

use super::opcodes;

/// Bit shift for the operand count field (bits 6-7).
pub const OPERAND_COUNT_SHIFT: u8 = 6;
/// Bit mask for the ALU flag (bit 5).
pub const ALU_MASK: u8 = 0b0010_0000;
/// Bit mask for the sets-PC flag (bit 4).
pub const SETS_PC_MASK: u8 = 0b0001_0000;
/// Bit mask for the instruction identifier (bits 0-3).
pub const IDENTIFIER_MASK: u8 = 0b0000_1111;

/// Trait for extracting instruction fields from an encoded instruction byte.
pub trait InstructionBits {
    /// Number of operand bytes following the instruction (bits 6-7).
    fn operand_count(&self) -> u8;

    /// Whether the instruction is executed by the ALU (bit 5).
    fn is_alu(&self) -> bool;

    /// Whether the instruction assigns the program counter itself (bit 4).
    fn sets_pc(&self) -> bool;

    /// The instruction identifier (bits 0-3).
    ///
    /// For ALU instructions this is the ALU operation tag.
    fn identifier(&self) -> u8;
}

impl InstructionBits for u8 {
    #[inline]
    fn operand_count(&self) -> u8 {
        self >> OPERAND_COUNT_SHIFT
    }

    #[inline]
    fn is_alu(&self) -> bool {
        self & ALU_MASK != 0
    }

    #[inline]
    fn sets_pc(&self) -> bool {
        self & SETS_PC_MASK != 0
    }

    #[inline]
    fn identifier(&self) -> u8 {
        self & IDENTIFIER_MASK
    }
}

/// A recognized LS-8 opcode.
///
/// The discriminant of each variant is its encoded byte, so the field
/// accessors of [`InstructionBits`] apply to [`Opcode::byte`] directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// Stop execution.
    Halt = opcodes::HLT,
    /// `reg[a] = b`.
    LoadImmediate = opcodes::LDI,
    /// Print `reg[a]` in decimal.
    PrintRegister = opcodes::PRN,
    /// `reg[a] = reg[a] + reg[b]`, wrapping.
    Add = opcodes::ADD,
    /// `reg[a] = reg[a] * reg[b]`, wrapping.
    Multiply = opcodes::MUL,
    /// Pre-decrement SP and store `reg[a]`.
    Push = opcodes::PUSH,
    /// Load `reg[a]` from the stack and post-increment SP.
    Pop = opcodes::POP,
    /// Push the return address and jump to `reg[a]`.
    Call = opcodes::CALL,
    /// Pop the return address into PC.
    Return = opcodes::RET,
    /// Set the flags from comparing `reg[a]` with `reg[b]`.
    Compare = opcodes::CMP,
    /// `pc = reg[a]`.
    Jump = opcodes::JMP,
    /// `pc = reg[a]` when the Equal flag is set.
    JumpIfEqual = opcodes::JEQ,
    /// `pc = reg[a]` when the Equal flag is clear.
    JumpIfNotEqual = opcodes::JNE,
}

impl Opcode {
    /// Every recognized opcode.
    pub const ALL: [Self; 13] = [
        Self::Halt,
        Self::LoadImmediate,
        Self::PrintRegister,
        Self::Add,
        Self::Multiply,
        Self::Push,
        Self::Pop,
        Self::Call,
        Self::Return,
        Self::Compare,
        Self::Jump,
        Self::JumpIfEqual,
        Self::JumpIfNotEqual,
    ];

    /// Returns the encoded instruction byte.
    #[inline]
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Number of operand bytes following the opcode.
    #[inline]
    pub fn operand_count(self) -> u8 {
        self.byte().operand_count()
    }

    /// Whether the opcode assigns PC itself instead of falling through.
    #[inline]
    pub fn sets_pc(self) -> bool {
        self.byte().sets_pc()
    }

    /// Number of bytes to advance PC by when the opcode does not assign it.
    #[inline]
    pub fn length(self) -> usize {
        1 + self.operand_count() as usize
    }

    /// The ALU operation performed by this opcode, if it is an ALU opcode.
    pub fn alu_op(self) -> Option<AluOp> {
        let byte = self.byte();
        if byte.is_alu() {
            AluOp::from_tag(byte.identifier())
        } else {
            None
        }
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Halt => "HLT",
            Self::LoadImmediate => "LDI",
            Self::PrintRegister => "PRN",
            Self::Add => "ADD",
            Self::Multiply => "MUL",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::Call => "CALL",
            Self::Return => "RET",
            Self::Compare => "CMP",
            Self::Jump => "JMP",
            Self::JumpIfEqual => "JEQ",
            Self::JumpIfNotEqual => "JNE",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// ALU operation tags.
///
/// The tag is the identifier field of the ALU instruction byte. The ALU
/// currently implements [`AluOp::Add`] and [`AluOp::Mul`]; the remaining tags
/// are reserved encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AluOp {
    /// Addition.
    Add = 0x0,
    /// Subtraction.
    Sub = 0x1,
    /// Multiplication.
    Mul = 0x2,
    /// Division.
    Div = 0x3,
    /// Remainder.
    Mod = 0x4,
    /// Increment.
    Inc = 0x5,
    /// Decrement.
    Dec = 0x6,
    /// Comparison.
    Cmp = 0x7,
    /// Bitwise AND.
    And = 0x8,
    /// Bitwise NOT.
    Not = 0x9,
    /// Bitwise OR.
    Or = 0xA,
    /// Bitwise XOR.
    Xor = 0xB,
    /// Shift left.
    Shl = 0xC,
    /// Shift right.
    Shr = 0xD,
}

impl AluOp {
    /// Maps an identifier field to its ALU operation tag.
    pub const fn from_tag(tag: u8) -> Option<Self> {
        Some(match tag {
            0x0 => Self::Add,
            0x1 => Self::Sub,
            0x2 => Self::Mul,
            0x3 => Self::Div,
            0x4 => Self::Mod,
            0x5 => Self::Inc,
            0x6 => Self::Dec,
            0x7 => Self::Cmp,
            0x8 => Self::And,
            0x9 => Self::Not,
            0xA => Self::Or,
            0xB => Self::Xor,
            0xC => Self::Shl,
            0xD => Self::Shr,
            _ => return None,
        })
    }

    /// Returns the identifier field value.
    pub const fn tag(self) -> u8 {
        self as u8
    }
}
