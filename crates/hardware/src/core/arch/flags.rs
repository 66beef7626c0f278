//! Flags Register (FL).
//!
//! Holds the outcome of the most recent comparison as exactly one of three
//! bits, or no bits before the first comparison.

use std::cmp::Ordering;
use std::fmt;

/// Outcome of a comparison, encoded as its FL bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Comparison {
    /// `a == b`.
    Equal = 0b0000_0001,
    /// `a > b`.
    Greater = 0b0000_0010,
    /// `a < b`.
    Less = 0b0000_0100,
}

impl Comparison {
    /// Returns the FL bit pattern for this outcome.
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

impl From<Ordering> for Comparison {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
            Ordering::Less => Self::Less,
        }
    }
}

/// The flags register.
///
/// Starts cleared. Every COMPARE replaces the whole register, so at most one
/// bit is ever set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    last: Option<Comparison>,
}

impl Flags {
    /// Creates a cleared flags register.
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Records a comparison outcome, replacing any previous one.
    pub const fn set(&mut self, cmp: Comparison) {
        self.last = Some(cmp);
    }

    /// Returns the last comparison outcome, if any comparison has run.
    pub const fn get(&self) -> Option<Comparison> {
        self.last
    }

    /// Whether the Equal bit is set.
    pub const fn is_equal(&self) -> bool {
        matches!(self.last, Some(Comparison::Equal))
    }

    /// Returns the raw register value (`0` when cleared).
    pub const fn bits(&self) -> u8 {
        match self.last {
            Some(cmp) => cmp.bits(),
            None => 0,
        }
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.last {
            Some(Comparison::Equal) => "E",
            Some(Comparison::Greater) => "G",
            Some(Comparison::Less) => "L",
            None => "-",
        };
        write!(f, "{:#010b} ({name})", self.bits())
    }
}
