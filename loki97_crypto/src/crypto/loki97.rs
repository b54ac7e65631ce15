use crate::crypto::f_function::round_function;
use crate::crypto::key_schedule::expand_key;
use symmetric_cipher::crypto::cipher_error::CipherResult;
use symmetric_cipher::crypto::cipher_traits::SymmetricCipher;
use symmetric_cipher::crypto::utils::ensure_len;

const ROUNDS: usize = 16;

#[derive(Clone)]
pub struct Loki97Cipher {
    /// 48 subkeys, three per round.
    subkeys: Vec<u64>,
}

impl Loki97Cipher {
    pub const BLOCK_SIZE: usize = 16;

    pub fn new(master_key: &[u8]) -> CipherResult<Self> {
        Ok(Loki97Cipher {
            subkeys: expand_key(master_key)?,
        })
    }

    pub fn subkeys(&self) -> &[u64] {
        &self.subkeys
    }

    fn split(block: &[u8]) -> CipherResult<(u64, u64)> {
        ensure_len(block, Self::BLOCK_SIZE, "LOKI97 block")?;
        let mut high = [0u8; 8];
        let mut low = [0u8; 8];
        high.copy_from_slice(&block[..8]);
        low.copy_from_slice(&block[8..]);
        Ok((u64::from_be_bytes(high), u64::from_be_bytes(low)))
    }

    fn join(high: u64, low: u64) -> Vec<u8> {
        [high.to_be_bytes(), low.to_be_bytes()].concat()
    }
}

impl SymmetricCipher for Loki97Cipher {
    fn encrypt_block(&self, block: &[u8]) -> CipherResult<Vec<u8>> {
        let (mut l, mut r) = Self::split(block)?;
        for round in self.subkeys.chunks_exact(3).take(ROUNDS) {
            let previous_r = r;
            r = l ^ round_function(r.wrapping_add(round[0]), round[1])?;
            l = previous_r.wrapping_add(round[0]).wrapping_add(round[2]);
        }
        Ok(Self::join(r, l))
    }

    fn decrypt_block(&self, block: &[u8]) -> CipherResult<Vec<u8>> {
        let (mut r, mut l) = Self::split(block)?;
        for round in self.subkeys.chunks_exact(3).take(ROUNDS).rev() {
            let previous_l = l;
            l = r ^ round_function(l.wrapping_sub(round[2]), round[1])?;
            r = previous_l.wrapping_sub(round[2]).wrapping_sub(round[0]);
        }
        Ok(Self::join(l, r))
    }

    fn block_size(&self) -> usize {
        Self::BLOCK_SIZE
    }
}
