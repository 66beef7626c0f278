//! LS-8 architectural state beyond the register file.
//!
//! The general-purpose registers live in [`crate::common::reg`]; this module
//! holds the flags register written by comparisons.

/// Comparison flags register.
pub mod flags;
