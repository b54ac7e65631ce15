use crate::crypto::algorithm::Algorithm;
use crate::crypto::chat_error::{ChatError, ChatResult};
use rand::RngCore;
use symmetric_cipher::{CipherContext, CipherMode, PaddingMode};

/// What both sides of a conversation agree on before any key exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSettings {
    pub algorithm: Algorithm,
    pub mode: CipherMode,
    pub padding: PaddingMode,
    pub iv: Vec<u8>,
}

impl ChatSettings {
    pub fn new(algorithm: Algorithm, mode: CipherMode, padding: PaddingMode, iv: Vec<u8>) -> ChatResult<Self> {
        if iv.len() != algorithm.block_size() {
            return Err(ChatError::InvalidSettings(format!(
                "{algorithm} needs a {}-byte IV, got {}",
                algorithm.block_size(),
                iv.len()
            )));
        }
        Ok(Self {
            algorithm,
            mode,
            padding,
            iv,
        })
    }

    /// Settings with a fresh IV drawn from `rng`.
    pub fn generate(algorithm: Algorithm, mode: CipherMode, padding: PaddingMode, rng: &mut impl RngCore) -> Self {
        Self {
            algorithm,
            mode,
            padding,
            iv: CipherContext::generate_iv(algorithm.block_size(), rng),
        }
    }
}
