//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Maintains registers, program counter, flags, and the running flag.
//! 2. **Memory:** Owns the 256-byte flat address space and the descending stack inside it.
//! 3. **Execution:** Drives the fetch-decode-execute loop and the instruction handlers.
//! 4. **Output:** Routes `PRN` output to a configurable sink (stdout by default).

/// Fetch-decode-execute loop and tracing.
pub mod execution;

/// Instruction handlers, one per opcode.
pub mod handlers;

/// Memory access, program loading, and stack operations.
pub mod memory;

use std::fmt;
use std::io::{self, Write};

use crate::common::RegisterFile;
use crate::common::constants::{MEMORY_SIZE, PC_RESET};
use crate::config::Config;
use crate::core::arch::flags::Flags;
use crate::stats::SimStats;

/// Main CPU structure containing all processor state.
pub struct Cpu {
    /// General-purpose registers; R6 is the stack pointer.
    pub regs: RegisterFile,
    /// Program counter.
    pub pc: u8,
    /// Flags register, set by `CMP`.
    pub fl: Flags,
    /// Cleared by `HLT`.
    pub running: bool,
    /// Main memory.
    pub ram: [u8; MEMORY_SIZE],

    /// Enable instruction tracing.
    pub trace: bool,
    /// Cycle budget for `run`, if any.
    pub max_cycles: Option<u64>,
    /// Execution statistics.
    pub stats: SimStats,

    output: Box<dyn Write>,
}

impl Cpu {
    /// Creates a CPU in its reset state that prints to stdout.
    ///
    /// # Arguments
    ///
    /// * `config` - The emulator configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_output(config, Box::new(io::stdout()))
    }

    /// Creates a CPU in its reset state that prints to `output`.
    ///
    /// Memory is zeroed, every register is zero except the stack pointer,
    /// PC and FL are zero, and the CPU is running.
    pub fn with_output(config: &Config, output: Box<dyn Write>) -> Self {
        Self {
            regs: RegisterFile::new(config.system.initial_sp),
            pc: PC_RESET,
            fl: Flags::RESET,
            running: true,
            ram: [0; MEMORY_SIZE],
            trace: config.general.trace_instructions,
            max_cycles: config.general.max_cycles,
            stats: SimStats::default(),
            output,
        }
    }

    /// Replaces the output sink used by `PRN`.
    pub fn set_output(&mut self, output: Box<dyn Write>) {
        self.output = output;
    }

    /// True until a `HLT` executes.
    #[inline]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Dumps the current CPU state (PC, FL, and registers) to stderr.
    pub fn dump_state(&self) {
        eprintln!("PC = {:#04x}  FL = {}", self.pc, self.fl);
        self.regs.dump();
    }
}

impl fmt::Debug for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cpu")
            .field("pc", &self.pc)
            .field("fl", &self.fl)
            .field("running", &self.running)
            .field("regs", self.regs.values())
            .field("trace", &self.trace)
            .field("max_cycles", &self.max_cycles)
            .finish_non_exhaustive()
    }
}
