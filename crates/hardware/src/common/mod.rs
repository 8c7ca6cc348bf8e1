//! Common utilities and types used throughout the LS-8 emulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the emulator. It includes:
//! 1. **Constants:** Machine-wide constants for memory, registers, and reset state.
//! 2. **Error Handling:** Execution and program-load error types.
//! 3. **Register Management:** The register file used by the CPU.

/// Common constants used throughout the emulator.
pub mod constants;

/// Error types for execution and program loading.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{MEMORY_SIZE, NUM_REGISTERS, REG_SP, SP_RESET};
pub use error::{CpuError, LoadError};
pub use reg::RegisterFile;
