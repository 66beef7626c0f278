//! Main Memory.
//!
//! This module implements the 256-byte RAM of the LS-8. It provides:
//! 1. **Checked Access:** `read` and `write` are the only points of contact with the
//!    backing array and fail on any address outside `0..=255`.
//! 2. **Program Loading:** Bulk copies that validate the whole range before writing.

use std::fmt;

use crate::common::constants::MEMORY_SIZE;
use crate::common::error::OutOfRange;

/// Byte-addressed main memory.
#[derive(Clone, PartialEq, Eq)]
pub struct Ram {
    cells: [u8; MEMORY_SIZE],
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}

impl Ram {
    /// Creates zeroed memory.
    pub const fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Reads the byte at `addr`.
    ///
    /// # Arguments
    ///
    /// * `addr` - Address to read. May be any value so that PC-relative
    ///   lookahead past the end of memory fails instead of wrapping.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `addr` is not in `0..=255`.
    #[inline]
    pub fn read(&self, addr: usize) -> Result<u8, OutOfRange> {
        self.cells.get(addr).copied().ok_or(OutOfRange { addr })
    }

    /// Writes `val` to `addr`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `addr` is not in `0..=255`; memory is unchanged.
    #[inline]
    pub fn write(&mut self, addr: usize, val: u8) -> Result<(), OutOfRange> {
        let cell = self.cells.get_mut(addr).ok_or(OutOfRange { addr })?;
        *cell = val;
        Ok(())
    }

    /// Copies `bytes` into memory starting at `base`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` naming the first address past the end of memory if
    /// the image does not fit. Nothing is written in that case.
    pub fn load_at(&mut self, base: usize, bytes: &[u8]) -> Result<(), OutOfRange> {
        let end = base.saturating_add(bytes.len());
        if end > MEMORY_SIZE {
            return Err(OutOfRange {
                addr: base.max(MEMORY_SIZE),
            });
        }
        self.cells[base..end].copy_from_slice(bytes);
        Ok(())
    }

    /// Returns the whole memory as a slice.
    pub const fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}

impl fmt::Debug for Ram {
    /// Prints only the non-zero cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.cells
                    .iter()
                    .enumerate()
                    .filter(|(_, b)| **b != 0)
                    .map(|(addr, b)| (addr, *b)),
            )
            .finish()
    }
}
