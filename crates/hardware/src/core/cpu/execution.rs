//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle of the CPU. It performs the following:
//! 1. **Fetch:** Reads the opcode and the two bytes after it, whether or not they are used.
//! 2. **Decode:** Maps the opcode byte to an [`Opcode`] or fails with an invalid-opcode error.
//! 3. **Execute:** Runs the handler and either jumps or advances the PC past the instruction.
//! 4. **Observability:** Emits trace lines and keeps the run statistics current.

use std::io::Write;

use super::Cpu;
use crate::common::error::CpuError;
use crate::isa::disasm::disassemble;
use crate::isa::{Instruction, Opcode};

impl Cpu {
    /// Fetches the instruction window at the current PC.
    ///
    /// Operand bytes are read unconditionally; addresses wrap within memory.
    pub const fn fetch(&self) -> Instruction {
        Instruction::new(
            self.ram_read(self.pc),
            self.ram_read(self.pc.wrapping_add(1)),
            self.ram_read(self.pc.wrapping_add(2)),
        )
    }

    /// Executes exactly one instruction.
    ///
    /// On success the PC either holds the address returned by the handler or
    /// has advanced by `1 + operand_count`. On error the PC is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CpuError::InvalidOpcode`] if the fetched byte is not an
    /// instruction, or any error raised by the handler.
    pub fn step(&mut self) -> Result<(), CpuError> {
        let inst = self.fetch();
        self.stats.cycles += 1;

        if self.trace {
            eprintln!("{}", self.trace_line(&inst));
        }

        let op = inst.opcode().map_err(|opcode| CpuError::InvalidOpcode {
            opcode,
            pc: self.pc,
        })?;

        tracing::trace!(pc = self.pc, "{}", disassemble(&inst));

        let target = self.execute(op, inst.operand_a, inst.operand_b)?;
        self.stats.record(op, target.is_some());

        self.pc = match target {
            Some(addr) => addr,
            None => self.pc.wrapping_add(inst.size()),
        };
        Ok(())
    }

    /// Runs until `HLT` executes.
    ///
    /// # Errors
    ///
    /// Stops at the first failing instruction and returns its error, or
    /// [`CpuError::CycleLimitExceeded`] once the configured budget is spent.
    pub fn run(&mut self) -> Result<(), CpuError> {
        while self.running {
            if let Some(limit) = self.max_cycles {
                if self.stats.cycles >= limit {
                    tracing::warn!(limit, pc = self.pc, "cycle limit reached");
                    return Err(CpuError::CycleLimitExceeded(limit));
                }
            }
            self.step()?;
        }
        self.output.flush()?;
        tracing::debug!(
            cycles = self.stats.cycles,
            retired = self.stats.instructions_retired,
            "halted"
        );
        Ok(())
    }

    /// Dispatches a decoded instruction to its handler.
    ///
    /// Returns the jump target for control-transfer instructions that take
    /// the branch, `None` otherwise.
    ///
    /// # Errors
    ///
    /// Propagates any error raised by the handler.
    pub fn execute(&mut self, op: Opcode, a: u8, b: u8) -> Result<Option<u8>, CpuError> {
        match op {
            Opcode::Hlt => self.op_hlt(),
            Opcode::Ldi => self.op_ldi(a, b),
            Opcode::Prn => self.op_prn(a),
            Opcode::Add | Opcode::Mul | Opcode::Cmp => self.op_alu(op, a, b),
            Opcode::Push => self.op_push(a),
            Opcode::Pop => self.op_pop(a),
            Opcode::Call => self.op_call(a),
            Opcode::Ret => Ok(self.op_ret()),
            Opcode::Jmp => self.op_jmp(a),
            Opcode::Jeq => self.op_jeq(a),
            Opcode::Jne => self.op_jne(a),
            Opcode::St => self.op_st(a, b),
        }
    }

    /// Formats the state of the machine before executing `inst`.
    ///
    /// `TRACE: PC | OP A B | R0 .. R7 | FL | disassembly`, all in hex.
    pub fn trace_line(&self, inst: &Instruction) -> String {
        use std::fmt::Write as _;

        let mut line = format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
            self.pc, inst.raw, inst.operand_a, inst.operand_b
        );
        for r in self.regs.values() {
            let _ = write!(line, " {r:02X}");
        }
        let _ = write!(line, " | {} | {}", self.fl, disassemble(inst));
        line
    }
}
