//! # Flags Register Tests

use std::cmp::Ordering;

use ls8_core::core::arch::flags::{Comparison, Flags};

#[test]
fn test_flags_start_cleared() {
    let flags = Flags::new();
    assert_eq!(flags.get(), None);
    assert_eq!(flags.bits(), 0);
    assert!(!flags.is_equal());
}

#[test]
fn test_comparison_bit_patterns() {
    assert_eq!(Comparison::Equal.bits(), 0b001);
    assert_eq!(Comparison::Greater.bits(), 0b010);
    assert_eq!(Comparison::Less.bits(), 0b100);
}

#[test]
fn test_set_replaces_previous_state() {
    let mut flags = Flags::new();
    flags.set(Comparison::Greater);
    flags.set(Comparison::Equal);
    assert_eq!(flags.bits(), 0b001);
    assert!(flags.is_equal());
    flags.set(Comparison::Less);
    assert_eq!(flags.bits().count_ones(), 1);
    assert!(!flags.is_equal());
}

#[test]
fn test_from_ordering() {
    assert_eq!(Comparison::from(Ordering::Less), Comparison::Less);
    assert_eq!(Comparison::from(Ordering::Equal), Comparison::Equal);
    assert_eq!(Comparison::from(Ordering::Greater), Comparison::Greater);
}

#[test]
fn test_display() {
    let mut flags = Flags::new();
    assert_eq!(flags.to_string(), "0b00000000 (-)");
    flags.set(Comparison::Less);
    assert_eq!(flags.to_string(), "0b00000100 (L)");
}
