//! Instruction handlers.
//!
//! Each handler receives the raw operand bytes it needs and returns
//! `Some(addr)` when it redirects control flow, `None` when the PC should
//! advance past the instruction. Handlers validate every register operand
//! before mutating anything, so a failing instruction leaves no partial
//! effects behind.

use std::io::Write;

use super::Cpu;
use crate::common::error::CpuError;
use crate::core::units::alu::{Alu, AluResult};
use crate::isa::Opcode;

/// Handler outcome: jump target, if any.
type Flow = Result<Option<u8>, CpuError>;

impl Cpu {
    /// `HLT`: stop the run loop.
    pub(crate) fn op_hlt(&mut self) -> Flow {
        self.running = false;
        tracing::debug!(pc = self.pc, "HLT");
        Ok(None)
    }

    /// `LDI reg, imm`: `reg := imm`.
    pub(crate) fn op_ldi(&mut self, reg: u8, imm: u8) -> Flow {
        self.regs.write(reg, imm)?;
        Ok(None)
    }

    /// `PRN reg`: print the decimal value of `reg`.
    pub(crate) fn op_prn(&mut self, reg: u8) -> Flow {
        let val = self.regs.read(reg)?;
        writeln!(self.output, "{val}")?;
        Ok(None)
    }

    /// `ADD`, `MUL`, `CMP`: run the ALU on two registers.
    pub(crate) fn op_alu(&mut self, op: Opcode, reg_a: u8, reg_b: u8) -> Flow {
        let a = self.regs.read(reg_a)?;
        let b = self.regs.read(reg_b)?;
        match Alu::execute(op, a, b)? {
            AluResult::Value(v) => self.regs.write(reg_a, v)?,
            AluResult::Flags(fl) => self.fl = fl,
        }
        Ok(None)
    }

    /// `PUSH reg`: `SP -= 1; mem[SP] := reg`.
    pub(crate) fn op_push(&mut self, reg: u8) -> Flow {
        let val = self.regs.read(reg)?;
        self.stack_push(val);
        Ok(None)
    }

    /// `POP reg`: `reg := mem[SP]; SP += 1`.
    pub(crate) fn op_pop(&mut self, reg: u8) -> Flow {
        let _ = self.regs.read(reg)?;
        let val = self.stack_pop();
        self.regs.write(reg, val)?;
        Ok(None)
    }

    /// `CALL reg`: push the address after this instruction, jump to `reg`.
    pub(crate) fn op_call(&mut self, reg: u8) -> Flow {
        let target = self.regs.read(reg)?;
        // CALL is two bytes wide.
        let ret = self.pc.wrapping_add(2);
        self.stack_push(ret);
        tracing::debug!(from = self.pc, to = target, ret, "CALL");
        Ok(Some(target))
    }

    /// `RET`: pop the return address and jump to it.
    pub(crate) fn op_ret(&mut self) -> Option<u8> {
        let ret = self.stack_pop();
        tracing::debug!(from = self.pc, to = ret, "RET");
        Some(ret)
    }

    /// `JMP reg`: jump to `reg`.
    pub(crate) fn op_jmp(&self, reg: u8) -> Flow {
        Ok(Some(self.regs.read(reg)?))
    }

    /// `JEQ reg`: jump to `reg` if the equal flag is set.
    pub(crate) fn op_jeq(&self, reg: u8) -> Flow {
        let target = self.regs.read(reg)?;
        Ok(self.fl.is_equal().then_some(target))
    }

    /// `JNE reg`: jump to `reg` if the equal flag is clear.
    pub(crate) fn op_jne(&self, reg: u8) -> Flow {
        let target = self.regs.read(reg)?;
        Ok((!self.fl.is_equal()).then_some(target))
    }

    /// `ST reg_a, reg_b`: `mem[reg_a] := reg_b`.
    pub(crate) fn op_st(&mut self, reg_a: u8, reg_b: u8) -> Flow {
        let addr = self.regs.read(reg_a)?;
        let val = self.regs.read(reg_b)?;
        self.ram_write(addr, val);
        Ok(None)
    }
}
