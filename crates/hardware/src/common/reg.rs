//! Register File.
//!
//! This module provides the `RegisterFile` struct, the interface the CPU uses to
//! reach its registers. It provides:
//! 1. **Checked Access:** Register reads and writes by operand index.
//! 2. **Stack Pointer:** Infallible access to the reserved SP slot.
//! 3. **Observability:** Debugging utilities for dumping register state.

use crate::common::constants::NUM_REGISTERS;
use crate::common::error::CpuError;
use crate::core::arch::gpr::Gpr;

/// Register file with the stack pointer initialised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    gpr: Gpr,
}

impl RegisterFile {
    /// Creates a register file with every register zero except SP.
    pub fn new(initial_sp: u8) -> Self {
        let mut gpr = Gpr::new();
        gpr.set_sp(initial_sp);
        Self { gpr }
    }

    /// Reads a register named by an operand byte.
    ///
    /// # Errors
    ///
    /// Returns [`CpuError::RegisterOutOfRange`] for indices outside `0..8`.
    pub fn read(&self, idx: u8) -> Result<u8, CpuError> {
        self.gpr.read(idx)
    }

    /// Writes a register named by an operand byte.
    ///
    /// # Errors
    ///
    /// Returns [`CpuError::RegisterOutOfRange`] for indices outside `0..8`.
    pub fn write(&mut self, idx: u8, val: u8) -> Result<(), CpuError> {
        self.gpr.write(idx, val)
    }

    /// Current stack pointer (R6).
    #[inline]
    pub fn sp(&self) -> u8 {
        self.gpr.sp()
    }

    /// Sets the stack pointer (R6).
    #[inline]
    pub fn set_sp(&mut self, val: u8) {
        self.gpr.set_sp(val);
    }

    /// All register values in index order.
    pub const fn values(&self) -> &[u8; NUM_REGISTERS] {
        self.gpr.as_array()
    }

    /// Dumps the contents of all registers to stderr.
    pub fn dump(&self) {
        self.gpr.dump();
    }
}
