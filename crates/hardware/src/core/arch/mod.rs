//! LS-8 architectural state components.
//!
//! This module contains the implementation of core LS-8 architectural elements.
//! It includes the following modules:
//! 1. **Flags:** The `FL` comparison-result register.
//! 2. **GPRs:** General-Purpose Register file implementation.

/// Flags register (`FL`) set by comparisons.
pub mod flags;

/// General-Purpose Register file implementation.
pub mod gpr;
