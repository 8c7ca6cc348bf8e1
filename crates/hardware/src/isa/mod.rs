//! LS-8 Instruction Set Architecture.
//!
//! Contains the opcode table, the fetched-instruction representation, and a
//! disassembler used for tracing and the `disasm` command.
//!
//! Every LS-8 instruction is one opcode byte followed by up to two operand
//! bytes. Bits 7..6 of the opcode give the operand count.

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Fetched instruction (opcode plus raw operand bytes).
pub mod instruction;

/// Opcode encodings and the `Opcode` enum.
pub mod opcodes;

pub use instruction::Instruction;
pub use opcodes::Opcode;
