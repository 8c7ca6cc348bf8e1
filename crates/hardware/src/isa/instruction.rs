//! Fetched instruction representation.
//!
//! The fetch stage always reads three bytes: the opcode and the two bytes
//! after it. Whether those operand bytes mean anything depends on the
//! opcode's operand count.

use super::opcodes::{self, Opcode};

/// One fetched instruction window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Raw opcode byte read at the PC.
    pub raw: u8,
    /// Byte at PC + 1.
    pub operand_a: u8,
    /// Byte at PC + 2.
    pub operand_b: u8,
}

impl Instruction {
    /// Builds an instruction window from the three fetched bytes.
    pub const fn new(raw: u8, operand_a: u8, operand_b: u8) -> Self {
        Self {
            raw,
            operand_a,
            operand_b,
        }
    }

    /// Decodes the opcode byte.
    ///
    /// # Errors
    ///
    /// Returns the raw byte if it does not encode a known instruction.
    pub fn opcode(&self) -> Result<Opcode, u8> {
        Opcode::try_from(self.raw)
    }

    /// Number of operand bytes declared by the opcode's high bits.
    #[inline]
    pub const fn operand_count(&self) -> u8 {
        opcodes::operand_count(self.raw)
    }

    /// Encoded length in bytes (opcode plus operands).
    #[inline]
    pub const fn size(&self) -> u8 {
        1 + self.operand_count()
    }
}
