//! Program Loader.
//!
//! This module reads LS-8 program listings. It performs:
//! 1. **File reading:** Opens the program file and reports missing or unreadable files.
//! 2. **Parsing:** One binary literal per line; `#` starts a comment; blank and
//!    comment-only lines are skipped.
//! 3. **Validation:** Rejects malformed literals and images larger than memory.
//!
//! A listing looks like:
//!
//! ```text
//! # print8.ls8
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::constants::MEMORY_SIZE;
use crate::common::error::LoadError;

/// Marks the start of a comment.
const COMMENT: char = '#';

/// Maximum number of binary digits in a literal.
const MAX_DIGITS: usize = 8;

/// Parses a program listing into its byte image.
///
/// # Arguments
///
/// * `source` - Text of the listing.
///
/// # Returns
///
/// The bytes in file order.
///
/// # Errors
///
/// Returns `LoadError::Parse` naming the first bad line, or
/// `LoadError::TooLarge` if the image does not fit in memory.
///
/// # Examples
///
/// ```
/// use ls8_core::sim::loader::parse_program;
///
/// let bytes = parse_program("10000010 # LDI\n\n# comment\n00000000\n1000\n").unwrap();
/// assert_eq!(bytes, vec![0b1000_0010, 0, 8]);
/// ```
pub fn parse_program(source: &str) -> Result<Vec<u8>, LoadError> {
    let mut program = Vec::new();

    for (idx, raw) in source.lines().enumerate() {
        let text = raw.split(COMMENT).next().unwrap_or_default().trim();
        if text.is_empty() {
            continue;
        }
        program.push(parse_literal(text).ok_or_else(|| LoadError::Parse {
            line: idx + 1,
            text: text.to_owned(),
        })?);
    }

    if program.len() > MEMORY_SIZE {
        return Err(LoadError::TooLarge {
            len: program.len(),
            capacity: MEMORY_SIZE,
        });
    }
    Ok(program)
}

/// Parses one binary literal of 1 to 8 digits.
fn parse_literal(text: &str) -> Option<u8> {
    if text.len() > MAX_DIGITS || !text.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    u8::from_str_radix(text, 2).ok()
}

/// Reads and parses a program file.
///
/// # Arguments
///
/// * `path` - Path to the `.ls8` listing.
///
/// # Returns
///
/// The program image.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or any error from
/// [`parse_program`].
pub fn load_program(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let program = parse_program(&source)?;
    debug!(path = %path.display(), bytes = program.len(), "program parsed");
    Ok(program)
}
