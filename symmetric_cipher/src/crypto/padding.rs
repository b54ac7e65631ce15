use crate::crypto::cipher_error::{CipherError, CipherResult};
use crate::crypto::cipher_types::PaddingMode;
use rand::RngCore;

impl PaddingMode {
    /// Completes the final plaintext block. `tail` holds the `len % block_size`
    /// leftover bytes, so it may be empty, in which case a whole padding block
    /// is produced.
    pub fn fill(self, tail: &[u8], block_size: usize) -> CipherResult<Vec<u8>> {
        self.fill_with(tail, block_size, &mut rand::rng())
    }

    pub fn fill_with(
        self,
        tail: &[u8],
        block_size: usize,
        rng: &mut impl RngCore,
    ) -> CipherResult<Vec<u8>> {
        if tail.len() >= block_size || block_size > u8::MAX as usize {
            return Err(CipherError::invalid(format!(
                "cannot pad {} bytes to a {block_size}-byte block",
                tail.len()
            )));
        }

        let pad_len = block_size - tail.len();
        let mut block = Vec::with_capacity(block_size);
        block.extend_from_slice(tail);

        match self {
            PaddingMode::NoPadding => {
                return Err(CipherError::invalid(
                    "input length must be a multiple of the block size without padding",
                ))
            }
            PaddingMode::Zeros => block.resize(block_size, 0),
            PaddingMode::ANSI_X923 => {
                block.resize(block_size - 1, 0);
                block.push(pad_len as u8);
            }
            PaddingMode::PKCS7 => block.resize(block_size, pad_len as u8),
            PaddingMode::ISO10126 => {
                let mut noise = vec![0u8; pad_len - 1];
                rng.fill_bytes(&mut noise);
                block.extend_from_slice(&noise);
                block.push(pad_len as u8);
            }
        }

        Ok(block)
    }

    /// Strips padding from the final decrypted block. The trailing count byte
    /// is trusted without checking the rest of the padding.
    pub fn unpack(self, block: &[u8]) -> CipherResult<Vec<u8>> {
        match self {
            PaddingMode::NoPadding => Ok(block.to_vec()),
            PaddingMode::Zeros => {
                let end = block.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
                Ok(block[..end].to_vec())
            }
            PaddingMode::ANSI_X923 | PaddingMode::PKCS7 | PaddingMode::ISO10126 => {
                let Some(&last) = block.last() else {
                    return Ok(Vec::new());
                };
                let pad_len = last as usize;
                if pad_len > block.len() {
                    return Err(CipherError::invalid(format!(
                        "{self} padding length {pad_len} exceeds the {}-byte block",
                        block.len()
                    )));
                }
                Ok(block[..block.len() - pad_len].to_vec())
            }
        }
    }
}
