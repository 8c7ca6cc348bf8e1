//! LS-8 emulator library.
//!
//! This crate implements an interpreter for the LS-8, an 8-bit teaching CPU, with the following:
//! 1. **Core:** Register file, flags, 256-byte memory, and the fetch-decode-execute loop.
//! 2. **ISA:** Opcode table, instruction decoding, and a disassembler.
//! 3. **Simulation:** Program listing loader, configuration, and statistics collection.
//!
//! ```
//! use ls8_core::{Config, Cpu};
//! use ls8_core::sim::loader;
//!
//! let image = loader::parse_program("10000010\n00000000\n00001000\n00000001\n").unwrap();
//! let mut cpu = Cpu::with_output(&Config::default(), Box::new(std::io::sink()));
//! cpu.load_program(&image).unwrap();
//! cpu.run().unwrap();
//! assert_eq!(cpu.regs.read(0).unwrap(), 8);
//! ```

/// Common types and constants (registers, errors, machine sizes).
pub mod common;
/// Emulator configuration (defaults and config structures).
pub mod config;
/// CPU core (architectural state, execution loop, handlers, ALU).
pub mod core;
/// Instruction set (opcodes, instruction window, disassembler).
pub mod isa;
/// Program loader.
pub mod sim;
/// Run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory, flags, and stats.
pub use crate::core::Cpu;
/// Error types surfaced by the CPU and the loader.
pub use crate::common::error::{CpuError, LoadError};
