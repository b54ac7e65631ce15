use std::sync::LazyLock;

static S1: LazyLock<Vec<u8>> = LazyLock::new(|| build_sbox(0x1FFF, 0x2911, 13));
static S2: LazyLock<Vec<u8>> = LazyLock::new(|| build_sbox(0x07FF, 0x0AA7, 11));

/// 13-bit input box: `(x ^ 0x1FFF)^3` in GF(2^13) mod 0x2911, low byte.
pub fn s1(input: u16) -> u8 {
    S1[(input & 0x1FFF) as usize]
}

/// 11-bit input box: `(x ^ 0x7FF)^3` in GF(2^11) mod 0xAA7, low byte.
pub fn s2(input: u16) -> u8 {
    S2[(input & 0x07FF) as usize]
}

fn build_sbox(mask: u64, modulus: u64, degree: u32) -> Vec<u8> {
    (0..1u64 << degree)
        .map(|i| {
            let x = i ^ mask;
            let squared = modular_reduce(multiply_polynomials(x, x), modulus, degree);
            let cubed = modular_reduce(multiply_polynomials(squared, x), modulus, degree);
            (cubed & 0xFF) as u8
        })
        .collect()
}

/// Carry-less product over GF(2).
pub fn multiply_polynomials(mut left: u64, mut right: u64) -> u64 {
    let mut result = 0;
    while right != 0 {
        if right & 1 != 0 {
            result ^= left;
        }
        left <<= 1;
        right >>= 1;
    }
    result
}

pub fn modular_reduce(mut value: u64, modulus: u64, degree: u32) -> u64 {
    while value >> degree != 0 {
        let highest_bit = 63 - value.leading_zeros();
        value ^= modulus << (highest_bit - degree);
    }
    value
}
