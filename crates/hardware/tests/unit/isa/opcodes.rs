//! # Opcode Table Tests

use ls8_core::isa::opcodes::{self, Opcode};
use ls8_core::isa::Instruction;
use rstest::rstest;
use std::collections::HashSet;

#[rstest]
#[case(Opcode::Hlt, 0b0000_0001, 0)]
#[case(Opcode::Ldi, 0b1000_0010, 2)]
#[case(Opcode::Prn, 0b0100_0111, 1)]
#[case(Opcode::Add, 0b1010_0000, 2)]
#[case(Opcode::Mul, 0b1010_0010, 2)]
#[case(Opcode::Push, 0b0100_0101, 1)]
#[case(Opcode::Pop, 0b0100_0110, 1)]
#[case(Opcode::Call, 0b0101_0000, 1)]
#[case(Opcode::Ret, 0b0001_0001, 0)]
#[case(Opcode::Jmp, 0b0101_0100, 1)]
#[case(Opcode::Cmp, 0b1010_0111, 2)]
#[case(Opcode::Jeq, 0b0101_0101, 1)]
#[case(Opcode::Jne, 0b0101_0110, 1)]
#[case(Opcode::St, 0b1000_0100, 2)]
fn test_opcode_encoding(#[case] op: Opcode, #[case] bits: u8, #[case] operands: u8) {
    assert_eq!(op.bits(), bits);
    assert_eq!(op.operand_count(), operands);
    assert_eq!(Opcode::try_from(bits), Ok(op));
}

#[test]
fn test_all_opcodes_distinct() {
    let set: HashSet<u8> = Opcode::ALL.iter().map(|op| op.bits()).collect();
    assert_eq!(set.len(), Opcode::ALL.len());
}

#[test]
fn test_unknown_bytes_rejected() {
    let known: HashSet<u8> = Opcode::ALL.iter().map(|op| op.bits()).collect();
    for raw in 0..=u8::MAX {
        if !known.contains(&raw) {
            assert_eq!(Opcode::try_from(raw), Err(raw));
        }
    }
}

#[test]
fn test_operand_count_from_high_bits() {
    assert_eq!(opcodes::operand_count(0b0011_1111), 0);
    assert_eq!(opcodes::operand_count(0b0100_0000), 1);
    assert_eq!(opcodes::operand_count(0b1000_0000), 2);
    assert_eq!(opcodes::operand_count(0b1100_0000), 3);
}

#[test]
fn test_instruction_size() {
    assert_eq!(Instruction::new(opcodes::HLT, 9, 9).size(), 1);
    assert_eq!(Instruction::new(opcodes::PRN, 0, 9).size(), 2);
    assert_eq!(Instruction::new(opcodes::LDI, 0, 9).size(), 3);
}

#[test]
fn test_instruction_decodes_opcode() {
    assert_eq!(Instruction::new(opcodes::CALL, 1, 0).opcode(), Ok(Opcode::Call));
    assert_eq!(Instruction::new(0, 0, 0).opcode(), Err(0));
}

#[test]
fn test_mnemonic_display() {
    assert_eq!(Opcode::Jne.to_string(), "JNE");
    assert_eq!(Opcode::St.mnemonic(), "ST");
}
