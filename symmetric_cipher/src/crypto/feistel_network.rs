use crate::crypto::cipher_error::{CipherError, CipherResult};
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::utils::xor_blocks;
use std::sync::Arc;

/// Balanced Feistel network. Each round computes `R' = L ^ f(R, k)`, `L' = R`;
/// the halves are swapped once more at the end so that decryption is the
/// same walk over the reversed key list.
pub struct FeistelNetwork {
    transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
}

impl FeistelNetwork {
    pub fn new(transformation: Arc<dyn EncryptionTransformation + Send + Sync>) -> Self {
        Self { transformation }
    }

    pub fn encrypt_with_round_keys(
        &self,
        block: &[u8],
        round_keys: &[Vec<u8>],
    ) -> CipherResult<Vec<u8>> {
        self.run_rounds(block, round_keys.iter())
    }

    pub fn decrypt_with_round_keys(
        &self,
        block: &[u8],
        round_keys: &[Vec<u8>],
    ) -> CipherResult<Vec<u8>> {
        self.run_rounds(block, round_keys.iter().rev())
    }

    fn run_rounds<'k>(
        &self,
        block: &[u8],
        round_keys: impl Iterator<Item = &'k Vec<u8>>,
    ) -> CipherResult<Vec<u8>> {
        if block.is_empty() || block.len() % 2 != 0 {
            return Err(CipherError::invalid("Feistel block size must be even"));
        }

        let (left, right) = block.split_at(block.len() / 2);
        let mut left = left.to_vec();
        let mut right = right.to_vec();

        for round_key in round_keys {
            let feistel_out = self.transformation.transform(&right, round_key)?;
            let new_right = xor_blocks(&left, &feistel_out);
            left = std::mem::replace(&mut right, new_right);
        }

        Ok([right, left].concat())
    }
}
