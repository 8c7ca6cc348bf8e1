//! Core processor implementation.
//!
//! This module contains the CPU implementation: architectural state, the
//! fetch-decode-execute loop with its instruction handlers, and the ALU.

/// Architectural state components (register file, flags).
pub mod arch;

/// CPU core implementation and execution loop.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
