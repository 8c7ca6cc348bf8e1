//! Execution units.
//!
//! The LS-8 has a single functional unit besides its load/store paths: the ALU.

/// Arithmetic Logic Unit for `ADD`, `MUL` and `CMP`.
pub mod alu;
