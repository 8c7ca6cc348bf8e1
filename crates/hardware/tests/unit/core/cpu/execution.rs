//! # CPU Execution Tests
//!
//! Tests for the fetch-decode-execute loop: PC advancement, dispatch
//! errors, operand over-fetch, and the cycle limit.

use crate::common::builder::program::ProgramBuilder;
use crate::common::harness::TestContext;
use ls8_core::config::Config;
use ls8_core::isa::opcodes::{HLT, LDI};
use ls8_core::CpuError;
use pretty_assertions::assert_eq;

#[test]
fn test_step_advances_by_instruction_size() {
    let image = ProgramBuilder::new().ldi(0, 1).prn(0).hlt().build();
    let mut ctx = TestContext::new().load_program(&image);

    ctx.step_n(1);
    assert_eq!(ctx.cpu.pc, 3);
    ctx.step_n(1);
    assert_eq!(ctx.cpu.pc, 5);
    ctx.step_n(1);
    assert_eq!(ctx.cpu.pc, 6);
}

#[test]
fn test_hlt_stops_run_loop() {
    let image = ProgramBuilder::new().hlt().ldi(0, 99).build();
    let mut ctx = TestContext::new().load_program(&image);
    ctx.run().unwrap();
    assert!(!ctx.cpu.is_running());
    assert_eq!(ctx.get_reg(0), 0);
}

#[test]
fn test_invalid_opcode_is_fatal() {
    let image = ProgramBuilder::new().ldi(0, 1).raw(&[0b1111_1111]).build();
    let mut ctx = TestContext::new().load_program(&image);

    let err = ctx.run().unwrap_err();
    assert!(matches!(
        err,
        CpuError::InvalidOpcode {
            opcode: 0b1111_1111,
            pc: 3
        }
    ));
    assert_eq!(ctx.cpu.pc, 3);
    assert!(ctx.cpu.is_running());
}

#[test]
fn test_empty_memory_is_invalid_opcode_zero() {
    let mut ctx = TestContext::new();
    let err = ctx.run().unwrap_err();
    assert!(matches!(err, CpuError::InvalidOpcode { opcode: 0, pc: 0 }));
}

#[test]
fn test_operands_past_program_read_as_zero() {
    // Bytes past the end of the image read as zero.
    let image = ProgramBuilder::new().ldi(0, 5).build();
    let mut ctx = TestContext::new().load_program(&image);
    ctx.step_n(1);
    let inst = ctx.cpu.fetch();
    assert_eq!((inst.raw, inst.operand_a, inst.operand_b), (0, 0, 0));
}

#[test]
fn test_fetch_wraps_at_end_of_memory() {
    let mut ctx = TestContext::new();
    ctx.cpu.ram_write(0xFF, LDI);
    ctx.cpu.ram_write(0x00, 2);
    ctx.cpu.ram_write(0x01, 77);
    ctx.cpu.ram_write(0x02, HLT);
    ctx.cpu.pc = 0xFF;

    ctx.run().unwrap();
    assert_eq!(ctx.get_reg(2), 77);
    assert_eq!(ctx.cpu.pc, 0x03);
}

#[test]
fn test_cycle_limit_stops_infinite_loop() {
    let mut config = Config::default();
    config.general.max_cycles = Some(50);

    // R0 = 0; JMP R0 forever.
    let image = ProgramBuilder::new().ldi(0, 3).jmp(0).build();
    let mut ctx = TestContext::with_config(&config).load_program(&image);

    let err = ctx.run().unwrap_err();
    assert!(matches!(err, CpuError::CycleLimitExceeded(50)));
    assert_eq!(ctx.cpu.stats.cycles, 50);
}

#[test]
fn test_cycle_limit_not_hit_by_short_program() {
    let mut config = Config::default();
    config.general.max_cycles = Some(3);
    let image = ProgramBuilder::new().ldi(0, 1).prn(0).hlt().build();
    let mut ctx = TestContext::with_config(&config).load_program(&image);
    ctx.run().unwrap();
    assert_eq!(ctx.printed(), vec![1]);
}

#[test]
fn test_register_operand_out_of_range_is_reported() {
    let image = ProgramBuilder::new().ldi(9, 1).hlt().build();
    let mut ctx = TestContext::new().load_program(&image);
    let err = ctx.run().unwrap_err();
    assert!(matches!(err, CpuError::RegisterOutOfRange(9)));
    assert_eq!(ctx.cpu.pc, 0);
}

#[test]
fn test_execute_dispatches_without_touching_pc() {
    let mut ctx = TestContext::new();
    ctx.set_reg(1, 0x42);
    let target = ctx
        .cpu
        .execute(ls8_core::isa::Opcode::Jmp, 1, 0)
        .unwrap();
    assert_eq!(target, Some(0x42));
    assert_eq!(ctx.cpu.pc, 0);
}

#[test]
fn test_output_failure_is_reported() {
    use crate::common::harness::BrokenPipe;

    let image = ProgramBuilder::new().ldi(0, 1).prn(0).hlt().build();
    let mut ctx = TestContext::new().load_program(&image);
    ctx.cpu.set_output(Box::new(BrokenPipe));
    let err = ctx.run().unwrap_err();
    assert!(matches!(err, CpuError::Output(_)));
}
