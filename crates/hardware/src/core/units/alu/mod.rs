//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by `ADD`, `MUL` and `CMP`.
//! Arithmetic is performed on 8-bit values and wraps on overflow, matching
//! the width of the register file.

use crate::common::error::CpuError;
use crate::core::arch::flags::Flags;
use crate::isa::Opcode;

/// Outcome of an ALU operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluResult {
    /// Value to write back to the destination register.
    Value(u8),
    /// New contents of the flags register.
    Flags(Flags),
}

/// Arithmetic Logic Unit for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation on two register values.
    ///
    /// # Arguments
    ///
    /// * `op` - The instruction requesting the operation.
    /// * `a`  - Value of the first register operand.
    /// * `b`  - Value of the second register operand.
    ///
    /// # Errors
    ///
    /// Returns [`CpuError::UnsupportedAluOp`] for any opcode other than
    /// `ADD`, `MUL` or `CMP`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::core::units::alu::{Alu, AluResult};
    /// use ls8_core::core::arch::flags::Flags;
    /// use ls8_core::isa::Opcode;
    ///
    /// assert_eq!(Alu::execute(Opcode::Add, 8, 9).unwrap(), AluResult::Value(17));
    /// assert_eq!(Alu::execute(Opcode::Mul, 16, 16).unwrap(), AluResult::Value(0));
    /// assert_eq!(Alu::execute(Opcode::Cmp, 1, 2).unwrap(), AluResult::Flags(Flags::LESS));
    /// assert!(Alu::execute(Opcode::Jmp, 1, 2).is_err());
    /// ```
    pub fn execute(op: Opcode, a: u8, b: u8) -> Result<AluResult, CpuError> {
        match op {
            Opcode::Add => Ok(AluResult::Value(a.wrapping_add(b))),
            Opcode::Mul => Ok(AluResult::Value(a.wrapping_mul(b))),
            Opcode::Cmp => Ok(AluResult::Flags(Flags::compare(a, b))),
            other => Err(CpuError::UnsupportedAluOp(other)),
        }
    }
}
