//! LS-8 General-Purpose Register File.
//!
//! This module implements the eight 8-bit registers of the LS-8. It performs the following:
//! 1. **Storage:** Maintains registers `R0`-`R7`.
//! 2. **Bounds Checking:** Rejects register indices outside the file instead of panicking.
//! 3. **Debugging:** Provides utilities for dumping the complete register state.

use crate::common::constants::{NUM_REGISTERS, REG_SP};
use crate::common::error::CpuError;

/// General-Purpose Register file.
///
/// Register indices come straight from program bytes, so every access is
/// checked and an out-of-range index is reported as an error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u8; NUM_REGISTERS],
}

impl Gpr {
    /// Creates a new register file with all registers set to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
        }
    }

    /// Reads a register.
    ///
    /// # Errors
    ///
    /// Returns [`CpuError::RegisterOutOfRange`] if `idx` is not in `0..8`.
    pub fn read(&self, idx: u8) -> Result<u8, CpuError> {
        self.regs
            .get(idx as usize)
            .copied()
            .ok_or(CpuError::RegisterOutOfRange(idx))
    }

    /// Writes a register.
    ///
    /// # Errors
    ///
    /// Returns [`CpuError::RegisterOutOfRange`] if `idx` is not in `0..8`.
    pub fn write(&mut self, idx: u8, val: u8) -> Result<(), CpuError> {
        let slot = self
            .regs
            .get_mut(idx as usize)
            .ok_or(CpuError::RegisterOutOfRange(idx))?;
        *slot = val;
        Ok(())
    }

    /// Reads the stack pointer (R6).
    #[inline]
    pub const fn sp(&self) -> u8 {
        self.regs[REG_SP as usize]
    }

    /// Writes the stack pointer (R6).
    #[inline]
    pub const fn set_sp(&mut self, val: u8) {
        self.regs[REG_SP as usize] = val;
    }

    /// Returns all register values in index order.
    pub const fn as_array(&self) -> &[u8; NUM_REGISTERS] {
        &self.regs
    }

    /// Dumps the contents of all registers to stderr.
    ///
    /// Displays registers in pairs with hexadecimal formatting.
    pub fn dump(&self) {
        for i in (0..NUM_REGISTERS).step_by(2) {
            eprintln!(
                "R{} = {:#04x} ({:>3})   R{} = {:#04x} ({:>3})",
                i,
                self.regs[i],
                self.regs[i],
                i + 1,
                self.regs[i + 1],
                self.regs[i + 1]
            );
        }
    }
}
