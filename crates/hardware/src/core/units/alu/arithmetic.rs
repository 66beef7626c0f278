//! ALU arithmetic operations.
//!
//! Operands are widened to 16 bits, combined, and masked back to a byte.

use crate::common::constants::BYTE_MASK;

/// `a + b`, wrapping at 256.
#[inline]
pub fn add(a: u8, b: u8) -> u8 {
    ((u16::from(a) + u16::from(b)) & BYTE_MASK) as u8
}

/// `a * b`, keeping the low 8 bits.
#[inline]
pub fn mul(a: u8, b: u8) -> u8 {
    ((u16::from(a) * u16::from(b)) & BYTE_MASK) as u8
}
