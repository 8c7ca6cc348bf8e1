//! Execution and load errors.
//!
//! This module defines the error types for the emulator. It provides:
//! 1. **CPU Errors:** Fatal conditions raised by the fetch-decode-execute loop.
//! 2. **Load Errors:** Problems turning a program listing into a memory image.

use std::io;

use thiserror::Error;

use crate::isa::Opcode;

/// Fatal conditions raised while executing a program.
///
/// None of these are recoverable: the run loop stops on the first one and
/// leaves the CPU state as it was before the failing instruction.
#[derive(Debug, Error)]
pub enum CpuError {
    /// The byte at the PC does not encode any known instruction.
    #[error("invalid opcode {opcode:#010b} at PC {pc:#04x}")]
    InvalidOpcode {
        /// Raw byte that was fetched.
        opcode: u8,
        /// Address it was fetched from.
        pc: u8,
    },

    /// The ALU was asked to perform an operation it does not implement.
    #[error("unsupported ALU operation: {0}")]
    UnsupportedAluOp(Opcode),

    /// An operand named a register outside R0-R7.
    #[error("register index {0} out of range")]
    RegisterOutOfRange(u8),

    /// The configured cycle limit was reached before the program halted.
    #[error("cycle limit of {0} exceeded")]
    CycleLimitExceeded(u64),

    /// Writing program output failed.
    #[error("output error: {0}")]
    Output(#[from] io::Error),
}

/// Errors raised while loading a program listing.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read '{path}': {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line held something other than a binary byte.
    #[error("line {line}: invalid byte '{token}'")]
    InvalidByte {
        /// 1-based line number in the listing.
        line: usize,
        /// Offending token.
        token: String,
    },

    /// The program does not fit in memory.
    #[error("program is {len} bytes, memory holds {max}")]
    ProgramTooLarge {
        /// Number of bytes in the program.
        len: usize,
        /// Memory capacity.
        max: usize,
    },
}
