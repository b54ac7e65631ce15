use crate::crypto::cipher_error::CipherResult;
use crate::crypto::cipher_traits::SymmetricCipher;
use crate::crypto::deal_key_expansion::DealKeyExpansion;
use crate::crypto::des_adapter::DesAdapter;
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::{ensure_len, swap_halves};
use std::sync::Arc;

/// DEAL: a Feistel network over 128-bit blocks whose round function is DES.
pub struct DEAL {
    feistel_network: FeistelNetwork,
    round_keys: Vec<Vec<u8>>,
}

impl DEAL {
    pub const BLOCK_SIZE: usize = 16;

    pub fn new(key: &[u8]) -> CipherResult<Self> {
        let round_keys = DealKeyExpansion.generate_round_keys(key)?;
        let adapter = DesAdapter::for_round_keys(&round_keys)?;
        Ok(DEAL {
            feistel_network: FeistelNetwork::new(Arc::new(adapter)),
            round_keys,
        })
    }

    pub fn rounds(&self) -> usize {
        self.round_keys.len()
    }

    pub fn round_keys(&self) -> &[Vec<u8>] {
        &self.round_keys
    }
}

impl SymmetricCipher for DEAL {
    fn encrypt_block(&self, block: &[u8]) -> CipherResult<Vec<u8>> {
        ensure_len(block, Self::BLOCK_SIZE, "DEAL block")?;
        self.feistel_network
            .encrypt_with_round_keys(&swap_halves(block), &self.round_keys)
    }

    fn decrypt_block(&self, block: &[u8]) -> CipherResult<Vec<u8>> {
        ensure_len(block, Self::BLOCK_SIZE, "DEAL block")?;
        let result = self
            .feistel_network
            .decrypt_with_round_keys(block, &self.round_keys)?;
        Ok(swap_halves(&result))
    }

    fn block_size(&self) -> usize {
        Self::BLOCK_SIZE
    }
}
