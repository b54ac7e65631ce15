use crate::crypto::permutation::LOKI_P;
use crate::crypto::sboxes::{s1, s2};
use symmetric_cipher::crypto::cipher_error::CipherResult;
use symmetric_cipher::crypto::utils::{rearrange, IndexingRule};

type SBox = fn(u16) -> u8;

const SA: [SBox; 8] = [s1, s2, s1, s2, s2, s1, s2, s1];
const SB: [SBox; 8] = [s2, s2, s1, s1, s2, s2, s1, s1];

/// Bits `hi..=lo` of `value`.
fn bits(value: u64, hi: u32, lo: u32) -> u16 {
    ((value >> lo) & ((1u64 << (hi - lo + 1)) - 1)) as u16
}

/// `f(A, B) = Sb(P(Sa(E(KP(A, B)))), B)`
pub fn round_function(a: u64, b: u64) -> CipherResult<u64> {
    let expanded = expansion(keyed_permutation(a, b));

    let substituted: Vec<u8> = expanded
        .iter()
        .zip(SA.iter())
        .map(|(&input, sbox)| sbox(input))
        .collect();

    let permuted = rearrange(&substituted, &LOKI_P, IndexingRule::Lowest0)?;

    let selectors = [
        bits(b, 63, 61),
        bits(b, 60, 58),
        bits(b, 57, 53),
        bits(b, 52, 48),
        bits(b, 47, 45),
        bits(b, 44, 42),
        bits(b, 41, 37),
        bits(b, 36, 32),
    ];

    let mut out = [0u8; 8];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = SB[i]((selectors[i] << 8) | permuted[i] as u16);
    }
    Ok(u64::from_be_bytes(out))
}

/// Swaps the bits of the two 32-bit halves of `a` where the low word of `b` has ones.
pub fn keyed_permutation(a: u64, b: u64) -> u64 {
    let sk = b as u32;
    let left = (a >> 32) as u32;
    let right = a as u32;
    let new_left = (left & !sk) | (right & sk);
    let new_right = (right & !sk) | (left & sk);
    ((new_left as u64) << 32) | new_right as u64
}

/// Eight overlapping fields of 13 or 11 bits, matching the Sa box widths.
pub fn expansion(a: u64) -> [u16; 8] {
    [
        (bits(a, 4, 0) << 8) | bits(a, 63, 56),
        bits(a, 58, 48),
        bits(a, 52, 40),
        bits(a, 42, 32),
        bits(a, 34, 24),
        bits(a, 28, 16),
        bits(a, 18, 8),
        bits(a, 12, 0),
    ]
}
