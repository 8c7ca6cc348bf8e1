//! # General-Purpose Register Tests
//!
//! Tests for the LS-8 general-purpose register file implementation.

use ls8_core::core::arch::gpr::Gpr;

#[test]
fn test_gpr_new_initializes_to_zero() {
    let gpr = Gpr::new();
    for i in 0..8 {
        assert_eq!(gpr.read(i).unwrap(), 0);
    }
}

#[test]
fn test_gpr_write_all_registers() {
    let mut gpr = Gpr::new();
    for i in 0..8u8 {
        gpr.write(i, i.wrapping_mul(31)).unwrap();
    }
    for i in 0..8u8 {
        assert_eq!(gpr.read(i).unwrap(), i.wrapping_mul(31));
    }
}

#[test]
fn test_gpr_multiple_writes_to_same_register() {
    let mut gpr = Gpr::new();
    gpr.write(5, 100).unwrap();
    assert_eq!(gpr.read(5).unwrap(), 100);
    gpr.write(5, 200).unwrap();
    assert_eq!(gpr.read(5).unwrap(), 200);
}

#[test]
fn test_gpr_register_independence() {
    let mut gpr = Gpr::new();
    gpr.write(1, 111).unwrap();
    gpr.write(2, 222).unwrap();
    gpr.write(3, 33).unwrap();

    assert_eq!(gpr.read(1).unwrap(), 111);
    assert_eq!(gpr.read(2).unwrap(), 222);
    assert_eq!(gpr.read(3).unwrap(), 33);
    assert_eq!(gpr.read(4).unwrap(), 0);
}

#[test]
fn test_gpr_rejects_index_eight() {
    let mut gpr = Gpr::new();
    assert!(gpr.read(8).is_err());
    assert!(gpr.write(8, 1).is_err());
    assert_eq!(gpr.as_array(), &[0; 8]);
}

#[test]
fn test_gpr_sp_accessors_alias_r6() {
    let mut gpr = Gpr::new();
    gpr.set_sp(0xF4);
    assert_eq!(gpr.sp(), 0xF4);
    assert_eq!(gpr.read(6).unwrap(), 0xF4);

    gpr.write(6, 0x10).unwrap();
    assert_eq!(gpr.sp(), 0x10);
    assert_eq!(gpr.read(5).unwrap(), 0);
    assert_eq!(gpr.read(7).unwrap(), 0);
}
