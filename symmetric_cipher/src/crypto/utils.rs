use crate::crypto::cipher_error::{CipherError, CipherResult};
use bitvec::prelude::*;

/// How the entries of a permutation table address bits of the input.
///
/// `Highest*` rules count from the most significant bit of the first byte,
/// `Lowest*` rules count from the least significant bit of the last byte.
/// The digit is the number of the first bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexingRule {
    Lowest0,
    Lowest1,
    Highest0,
    Highest1,
}

impl IndexingRule {
    fn base(self) -> usize {
        match self {
            IndexingRule::Lowest0 | IndexingRule::Highest0 => 0,
            IndexingRule::Lowest1 | IndexingRule::Highest1 => 1,
        }
    }

    fn lowest_first(self) -> bool {
        matches!(self, IndexingRule::Lowest0 | IndexingRule::Lowest1)
    }
}

/// Builds `ceil(table.len() / 8)` bytes where output bit `k` is the input bit
/// addressed by `table[k]`. Output bits are numbered with the same rule as
/// the input, so `Lowest*` tables fill the output from its last bit.
pub fn rearrange(text: &[u8], table: &[usize], rule: IndexingRule) -> CipherResult<Vec<u8>> {
    let source = text.view_bits::<Msb0>();
    let total = source.len();
    let out_bits = table.len().div_ceil(8) * 8;
    let mut output = bitvec![u8, Msb0; 0; out_bits];

    for (k, &entry) in table.iter().enumerate() {
        let index = entry
            .checked_sub(rule.base())
            .filter(|&index| index < total)
            .ok_or(CipherError::PermutationOutOfBounds {
                index: entry,
                bits: total,
            })?;

        let (src, dst) = if rule.lowest_first() {
            (total - 1 - index, out_bits - 1 - k)
        } else {
            (index, k)
        };
        output.set(dst, source[src]);
    }

    Ok(output.into_vec())
}

pub fn xor_blocks(left: &[u8], right: &[u8]) -> Vec<u8> {
    left.iter().zip(right.iter()).map(|(a, b)| a ^ b).collect()
}

pub fn xor_in_place(target: &mut [u8], other: &[u8]) {
    target
        .iter_mut()
        .zip(other.iter())
        .for_each(|(a, b)| *a ^= b);
}

/// Big-endian addition of `addend` into `counter`, dropping the final carry.
pub fn add_wrapping_be(counter: &mut [u8], addend: &[u8]) {
    let mut carry = 0u16;
    let mut addend = addend.iter().rev();
    for byte in counter.iter_mut().rev() {
        let sum = *byte as u16 + *addend.next().unwrap_or(&0) as u16 + carry;
        *byte = sum as u8;
        carry = sum >> 8;
    }
}

pub fn swap_halves(block: &[u8]) -> Vec<u8> {
    let (left, right) = block.split_at(block.len() / 2);
    [right, left].concat()
}

pub fn ensure_len(block: &[u8], expected: usize, what: &str) -> CipherResult<()> {
    if block.len() != expected {
        return Err(CipherError::invalid(format!(
            "{what} must be {expected} bytes, got {}",
            block.len()
        )));
    }
    Ok(())
}
