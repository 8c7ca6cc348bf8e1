//! Global System Constants.
//!
//! This module defines machine-wide constants used across the emulator. It includes:
//! 1. **Memory Constants:** Size of the flat address space.
//! 2. **Register Constants:** Register file size and reserved register slots.
//! 3. **Reset Constants:** Power-on values for the program counter and stack pointer.

/// Number of addressable memory cells (one byte each).
pub const MEMORY_SIZE: usize = 256;

/// Number of registers in the register file.
pub const NUM_REGISTERS: usize = 8;

/// Register holding the stack pointer.
pub const REG_SP: u8 = 6;

/// Stack pointer value at reset. The stack grows down from here.
pub const SP_RESET: u8 = 0xF4;

/// Program counter value at reset.
pub const PC_RESET: u8 = 0;
