//! Program Loader.
//!
//! This module turns LS-8 program listings into memory images. It performs:
//! 1. **Parsing:** One binary byte per line; `#` starts a comment; blank lines are skipped.
//! 2. **File loading:** Reads a listing from disk and parses it.
//! 3. **CPU setup:** Places the image at address 0 of a CPU's memory.
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

use crate::common::constants::MEMORY_SIZE;
use crate::common::error::LoadError;
use crate::core::Cpu;

/// Character that starts a comment.
const COMMENT: char = '#';

/// Maximum number of binary digits in one byte token.
const BYTE_DIGITS: usize = 8;

/// Parses a program listing into its byte image.
///
/// # Errors
///
/// Returns [`LoadError::InvalidByte`] for a token that is not 1-8 binary
/// digits, and [`LoadError::ProgramTooLarge`] if the image exceeds memory.
pub fn parse_program(source: &str) -> Result<Vec<u8>, LoadError> {
    let mut image = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        let token = line.split(COMMENT).next().unwrap_or_default().trim();
        if token.is_empty() {
            continue;
        }
        image.push(parse_byte(token).ok_or_else(|| LoadError::InvalidByte {
            line: idx + 1,
            token: token.to_string(),
        })?);
        if token.len() != BYTE_DIGITS {
            tracing::warn!(line = idx + 1, token, "byte is not written with 8 digits");
        }
    }
    if image.len() > MEMORY_SIZE {
        return Err(LoadError::ProgramTooLarge {
            len: image.len(),
            max: MEMORY_SIZE,
        });
    }
    Ok(image)
}

/// Parses a single token of 1-8 binary digits.
fn parse_byte(token: &str) -> Option<u8> {
    if token.len() > BYTE_DIGITS || !token.bytes().all(|c| c == b'0' || c == b'1') {
        return None;
    }
    u8::from_str_radix(token, 2).ok()
}

/// Reads and parses a program listing from disk.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, or any parse error.
pub fn load_program_file(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let image = parse_program(&source)?;
    tracing::info!(path = %path.display(), bytes = image.len(), "program parsed");
    Ok(image)
}

/// Loads a program listing from disk into `cpu`'s memory at address 0.
///
/// # Errors
///
/// Propagates any error from [`load_program_file`].
pub fn load_into(cpu: &mut Cpu, path: impl AsRef<Path>) -> Result<usize, LoadError> {
    let image = load_program_file(path)?;
    cpu.load_program(&image)?;
    Ok(image.len())
}
