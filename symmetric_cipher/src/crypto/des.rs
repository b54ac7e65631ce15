use crate::crypto::cipher_error::CipherResult;
use crate::crypto::cipher_traits::SymmetricCipher;
use crate::crypto::des_key_expansion::DesKeyExpansion;
use crate::crypto::des_tables::{FP, IP};
use crate::crypto::des_transformation::DesTransformation;
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::{ensure_len, rearrange, IndexingRule};
use std::sync::Arc;

pub struct DES {
    feistel_network: FeistelNetwork,
    round_keys: Vec<Vec<u8>>,
}

impl DES {
    pub const BLOCK_SIZE: usize = 8;

    /// Accepts a 7-byte key or an 8-byte key whose parity bits are ignored.
    pub fn new(key: &[u8]) -> CipherResult<Self> {
        Self::with_components(
            Arc::new(DesKeyExpansion),
            Arc::new(DesTransformation),
            key,
        )
    }

    pub fn with_components(
        key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
        key: &[u8],
    ) -> CipherResult<Self> {
        let round_keys = key_expansion.generate_round_keys(key)?;
        Ok(DES {
            feistel_network: FeistelNetwork::new(transformation),
            round_keys,
        })
    }

    pub fn round_keys(&self) -> &[Vec<u8>] {
        &self.round_keys
    }
}

impl SymmetricCipher for DES {
    fn encrypt_block(&self, block: &[u8]) -> CipherResult<Vec<u8>> {
        ensure_len(block, Self::BLOCK_SIZE, "DES block")?;
        let permuted = rearrange(block, &IP, IndexingRule::Highest1)?;
        let result = self
            .feistel_network
            .encrypt_with_round_keys(&permuted, &self.round_keys)?;
        rearrange(&result, &FP, IndexingRule::Highest1)
    }

    fn decrypt_block(&self, block: &[u8]) -> CipherResult<Vec<u8>> {
        ensure_len(block, Self::BLOCK_SIZE, "DES block")?;
        let permuted = rearrange(block, &IP, IndexingRule::Highest1)?;
        let result = self
            .feistel_network
            .decrypt_with_round_keys(&permuted, &self.round_keys)?;
        rearrange(&result, &FP, IndexingRule::Highest1)
    }

    fn block_size(&self) -> usize {
        Self::BLOCK_SIZE
    }
}
