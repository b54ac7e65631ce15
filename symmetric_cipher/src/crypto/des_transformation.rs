use crate::crypto::cipher_error::CipherResult;
use crate::crypto::des_tables::{E, P, S_BOXES};
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::utils::{ensure_len, rearrange, xor_blocks, IndexingRule};
use bitvec::prelude::*;

/// DES round function: expansion, key mixing, S-boxes, P-permutation.
pub struct DesTransformation;

impl EncryptionTransformation for DesTransformation {
    fn transform(&self, r_block: &[u8], round_key: &[u8]) -> CipherResult<Vec<u8>> {
        ensure_len(r_block, 4, "DES half block")?;
        ensure_len(round_key, 6, "DES round key")?;

        let expanded = rearrange(r_block, &E, IndexingRule::Highest1)?;
        let mixed = xor_blocks(&expanded, round_key);

        let mut substituted = bitvec![u8, Msb0; 0; 32];
        for (box_index, group) in mixed.view_bits::<Msb0>().chunks_exact(6).enumerate() {
            let row = ((group[0] as usize) << 1) | group[5] as usize;
            let col = group[1..5].load_be::<usize>();
            let value = S_BOXES[box_index][row * 16 + col];
            substituted[box_index * 4..box_index * 4 + 4].store_be(value);
        }

        rearrange(&substituted.into_vec(), &P, IndexingRule::Highest1)
    }
}
