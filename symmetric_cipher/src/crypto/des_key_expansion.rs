use crate::crypto::cipher_error::{CipherError, CipherResult};
use crate::crypto::des_tables::{PC1, PC2, SHIFT_BITS};
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::{rearrange, IndexingRule};
use bitvec::prelude::*;

pub struct DesKeyExpansion;

impl DesKeyExpansion {
    /// Turns a 56-bit key into the 64-bit form by appending an odd parity
    /// bit after every 7 key bits.
    pub fn expand_short_key(key: &[u8]) -> Vec<u8> {
        let mut expanded: BitVec<u8, Msb0> = BitVec::with_capacity(64);
        for group in key.view_bits::<Msb0>().chunks(7) {
            expanded.extend_from_bitslice(group);
            expanded.push(group.count_ones() % 2 == 0);
        }
        expanded.into_vec()
    }
}

impl KeyExpansion for DesKeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> CipherResult<Vec<Vec<u8>>> {
        let key = match key.len() {
            7 => Self::expand_short_key(key),
            8 => key.to_vec(),
            other => {
                return Err(CipherError::invalid(format!(
                    "DES key must be 7 or 8 bytes, got {other}"
                )))
            }
        };

        // PC-1 drops the parity bits: 64 -> 56 bits
        let permuted = rearrange(&key, &PC1, IndexingRule::Highest1)?;
        let bits = permuted.view_bits::<Msb0>();
        let mut c = bits[..28].to_bitvec();
        let mut d = bits[28..56].to_bitvec();

        SHIFT_BITS
            .iter()
            .map(|&shift| {
                c.rotate_left(shift);
                d.rotate_left(shift);

                let mut cd = c.clone();
                cd.extend_from_bitslice(&d);
                rearrange(&cd.into_vec(), &PC2, IndexingRule::Highest1)
            })
            .collect()
    }
}
