use crate::crypto::cipher_error::{CipherError, CipherResult};
use crate::crypto::cipher_traits::SymmetricCipher;
use crate::crypto::des::DES;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::xor_in_place;
use hex_literal::hex;

/// Fixed DES key the DEAL key schedule mixes with.
pub const DEAL_MIXING_KEY: [u8; 8] = hex!("12 34 56 78 90 AB CD EF");

/// Round constant folded into the later round keys. Its first byte starts as
/// `0x80` and is shifted right by 1, 2, 4, 8 bits after successive uses.
struct RoundConstant {
    value: [u8; 8],
    shift: u32,
}

impl RoundConstant {
    fn new() -> Self {
        let mut value = [0u8; 8];
        value[0] = 0x80;
        Self { value, shift: 1 }
    }

    fn take(&mut self) -> [u8; 8] {
        let current = self.value;
        self.value[0] = self.value[0].checked_shr(self.shift).unwrap_or(0);
        self.shift *= 2;
        current
    }
}

/// DEAL key schedule: 6 round keys for 128- and 192-bit keys, 8 for 256-bit keys.
pub struct DealKeyExpansion;

impl KeyExpansion for DealKeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> CipherResult<Vec<Vec<u8>>> {
        if !matches!(key.len(), 16 | 24 | 32) {
            return Err(CipherError::invalid(format!(
                "DEAL key must be 16, 24 or 32 bytes, got {}",
                key.len()
            )));
        }

        let des = DES::new(&DEAL_MIXING_KEY)?;
        let chunks: Vec<&[u8]> = key.chunks(8).collect();
        let mut constant = RoundConstant::new();
        let mut round_keys: Vec<Vec<u8>> = Vec::with_capacity(8);

        let mix = |chunk: &[u8], previous: Option<&Vec<u8>>, constant: Option<[u8; 8]>| {
            let mut block = chunk.to_vec();
            if let Some(previous) = previous {
                xor_in_place(&mut block, previous);
            }
            if let Some(constant) = constant {
                xor_in_place(&mut block, &constant);
            }
            des.encrypt_block(&block)
        };

        match chunks.len() {
            2 => {
                round_keys.push(mix(chunks[0], None, None)?);
                let second = mix(chunks[1], round_keys.last(), None)?;
                round_keys.push(second);
                for i in 2..6 {
                    let next = mix(chunks[i % 2], round_keys.last(), Some(constant.take()))?;
                    round_keys.push(next);
                }
            }
            3 => {
                round_keys.push(mix(chunks[0], None, None)?);
                for chunk in &chunks[1..] {
                    let next = mix(chunk, round_keys.last(), None)?;
                    round_keys.push(next);
                }
                for i in 3..6 {
                    let next = mix(chunks[i - 3], round_keys.last(), Some(constant.take()))?;
                    round_keys.push(next);
                }
            }
            _ => {
                round_keys.push(mix(chunks[0], None, None)?);
                for chunk in &chunks[1..] {
                    let next = mix(chunk, round_keys.last(), None)?;
                    round_keys.push(next);
                }
                for i in 3..7 {
                    let next = mix(chunks[i - 3], round_keys.last(), Some(constant.take()))?;
                    round_keys.push(next);
                }
            }
        }

        Ok(round_keys)
    }
}
