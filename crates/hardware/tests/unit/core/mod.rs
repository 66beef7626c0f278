//! Unit tests for the machine core.



/// Arithmetic Logic Unit.
pub mod units;
