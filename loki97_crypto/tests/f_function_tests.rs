use loki97_crypto::crypto::f_function::{expansion, keyed_permutation, round_function};
use loki97_crypto::crypto::sboxes::{modular_reduce, multiply_polynomials, s1, s2};

#[test]
fn test_sbox_values() {
    assert_eq!(s1(0), 39);
    assert_eq!(s1(1), 163);
    assert_eq!(s2(0), 45);
    assert_eq!(s2(1), 111);
    // x ^ mask == 0 cubes to 0
    assert_eq!(s1(0x1FFF), 0);
    assert_eq!(s2(0x07FF), 0);
}

#[test]
fn test_gf_arithmetic() {
    assert_eq!(multiply_polynomials(0b11, 0b11), 0b101);
    assert_eq!(modular_reduce(1 << 13, 0x2911, 13), 0x2911 ^ (1 << 13));
    assert_eq!(modular_reduce(0x7FF, 0xAA7, 11), 0x7FF);
}

#[test]
fn test_keyed_permutation_swaps_selected_bits() {
    let a = 0xFFFF_0000_0000_FFFF;
    assert_eq!(keyed_permutation(a, 0), a);
    assert_eq!(keyed_permutation(a, 0xFFFF_FFFF), 0x0000_FFFF_FFFF_0000);
    assert_eq!(keyed_permutation(a, 0x0000_00FF), 0xFFFF_00FF_0000_FF00);
}

#[test]
fn test_expansion_field_widths() {
    let fields = expansion(u64::MAX);
    assert_eq!(fields, [0x1FFF, 0x7FF, 0x1FFF, 0x7FF, 0x7FF, 0x1FFF, 0x7FF, 0x1FFF]);
    assert_eq!(expansion(1)[0], 1 << 8);
}

#[test]
fn test_round_function_depends_on_both_inputs() {
    let base = round_function(0x0123_4567_89AB_CDEF, 0).unwrap();
    assert_ne!(base, round_function(0x0123_4567_89AB_CDEE, 0).unwrap());
    assert_ne!(base, round_function(0x0123_4567_89AB_CDEF, 1 << 63).unwrap());
}
