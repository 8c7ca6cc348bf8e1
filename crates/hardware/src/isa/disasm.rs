//! Instruction Disassembler for the LS-8.
//!
//! Converts a fetched instruction window into a human-readable mnemonic
//! string for debug tracing, the `disasm` command, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::{Instruction, disasm::disassemble};
//! let text = disassemble(&Instruction::new(0b1000_0010, 0, 8));
//! assert_eq!(text, "LDI R0, 8");
//! ```

use super::instruction::Instruction;
use super::opcodes::Opcode;

/// Register names for R0-R7.
const REG_NAMES: [&str; 8] = ["R0", "R1", "R2", "R3", "R4", "R5", "R6", "R7"];

/// Returns the name for a register index.
#[inline]
fn reg(idx: u8) -> &'static str {
    REG_NAMES.get(idx as usize).copied().unwrap_or("R?")
}

/// Disassembles one instruction window.
///
/// Bytes that are not valid opcodes render as a `.byte` directive.
pub fn disassemble(inst: &Instruction) -> String {
    let Ok(op) = inst.opcode() else {
        return format!(".byte {:#04x}", inst.raw);
    };
    let (a, b) = (inst.operand_a, inst.operand_b);
    match op {
        Opcode::Hlt | Opcode::Ret => op.mnemonic().to_string(),
        Opcode::Ldi => format!("{op} {}, {b}", reg(a)),
        Opcode::Prn
        | Opcode::Push
        | Opcode::Pop
        | Opcode::Call
        | Opcode::Jmp
        | Opcode::Jeq
        | Opcode::Jne => format!("{op} {}", reg(a)),
        Opcode::Add | Opcode::Mul | Opcode::Cmp | Opcode::St => {
            format!("{op} {}, {}", reg(a), reg(b))
        }
    }
}

/// Disassembles a whole program image starting at address 0.
///
/// Walks the image by each instruction's encoded size and returns
/// `(address, text)` pairs. A byte that is not a valid opcode is emitted as
/// a single `.byte` and the walk resumes at the next address. Operand bytes
/// past the end of the image read as zero, matching how the CPU fetches them.
pub fn disassemble_program(image: &[u8]) -> Vec<(u8, String)> {
    let byte_at = |addr: usize| image.get(addr).copied().unwrap_or(0);
    let mut out = Vec::new();
    let mut addr = 0usize;
    while addr < image.len() {
        let inst = Instruction::new(byte_at(addr), byte_at(addr + 1), byte_at(addr + 2));
        out.push((addr as u8, disassemble(&inst)));
        addr += match inst.opcode() {
            Ok(_) => inst.size() as usize,
            Err(_) => 1,
        };
    }
    out
}
