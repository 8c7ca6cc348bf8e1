//! # Flags Register Tests

use ls8_core::core::arch::flags::{FLAG_EQUAL, FLAG_GREATER, FLAG_LESS, Flags};
use proptest::prelude::*;
use std::cmp::Ordering;

#[test]
fn test_reset_has_no_flags() {
    assert_eq!(Flags::RESET.bits(), 0);
    assert!(!Flags::RESET.is_equal());
    assert_eq!(Flags::RESET.ordering(), None);
    assert_eq!(Flags::default(), Flags::RESET);
}

#[test]
fn test_compare_less() {
    let fl = Flags::compare(1, 2);
    assert_eq!(fl.bits(), FLAG_LESS);
    assert!(!fl.is_equal());
}

#[test]
fn test_compare_greater() {
    let fl = Flags::compare(9, 2);
    assert_eq!(fl.bits(), FLAG_GREATER);
    assert!(!fl.is_equal());
}

#[test]
fn test_compare_equal() {
    let fl = Flags::compare(7, 7);
    assert_eq!(fl.bits(), FLAG_EQUAL);
    assert!(fl.is_equal());
}

#[test]
fn test_display() {
    assert_eq!(Flags::RESET.to_string(), "---");
    assert_eq!(Flags::LESS.to_string(), "L--");
    assert_eq!(Flags::GREATER.to_string(), "-G-");
    assert_eq!(Flags::EQUAL.to_string(), "--E");
}

proptest! {
    #[test]
    fn prop_exactly_one_flag_matches_ordering(a: u8, b: u8) {
        let fl = Flags::compare(a, b);
        prop_assert_eq!(fl.bits().count_ones(), 1);
        prop_assert_eq!(fl.ordering(), Some(a.cmp(&b)));
        prop_assert_eq!(Flags::from(a.cmp(&b)), fl);
        prop_assert_eq!(fl.is_equal(), a.cmp(&b) == Ordering::Equal);
    }
}
