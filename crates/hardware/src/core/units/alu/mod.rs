//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the byte-wide integer ALU used by ADD, MUL and
//! CMP. Results are always truncated to 8 bits.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Mul

/// Integer arithmetic operations (add, multiply).
pub mod arithmetic;

use crate::common::error::Trap;
use crate::core::arch::flags::Comparison;
use crate::isa::instruction::AluOp;

/// Arithmetic Logic Unit for register-to-register operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation on two register values.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation tag.
    /// * `a`  - Value of the destination register.
    /// * `b`  - Value of the source register.
    ///
    /// # Returns
    ///
    /// The result masked to 8 bits.
    ///
    /// # Errors
    ///
    /// Returns `Trap::UnsupportedAluOperation` for tags the ALU does not
    /// implement.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::core::units::alu::Alu;
    /// use ls8_core::isa::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 200, 100).unwrap(), 44);
    /// assert_eq!(Alu::execute(AluOp::Mul, 8, 9).unwrap(), 72);
    /// assert!(Alu::execute(AluOp::Sub, 5, 3).is_err());
    /// ```
    pub fn execute(op: AluOp, a: u8, b: u8) -> Result<u8, Trap> {
        match op {
            AluOp::Add => Ok(arithmetic::add(a, b)),
            AluOp::Mul => Ok(arithmetic::mul(a, b)),
            _ => Err(Trap::UnsupportedAluOperation(op)),
        }
    }

    /// Compares two register values.
    pub fn compare(a: u8, b: u8) -> Comparison {
        Comparison::from(a.cmp(&b))
    }
}
