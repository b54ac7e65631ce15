use crate::crypto::key_schedule::expand_key;
use symmetric_cipher::crypto::cipher_error::{CipherError, CipherResult};
use symmetric_cipher::crypto::cipher_traits::SymmetricCipher;
use symmetric_cipher::crypto::utils::ensure_len;

/// RC5 word width; the block is two words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordSize {
    W16,
    W32,
    W64,
}

impl WordSize {
    pub fn from_bits(bits: usize) -> CipherResult<Self> {
        match bits {
            16 => Ok(WordSize::W16),
            32 => Ok(WordSize::W32),
            64 => Ok(WordSize::W64),
            other => Err(CipherError::invalid(format!(
                "RC5 word size must be 16, 32 or 64 bits, got {other}"
            ))),
        }
    }

    pub fn bits(self) -> u32 {
        match self {
            WordSize::W16 => 16,
            WordSize::W32 => 32,
            WordSize::W64 => 64,
        }
    }

    pub fn bytes(self) -> usize {
        self.bits() as usize / 8
    }

    fn mask(self) -> u64 {
        u64::MAX >> (64 - self.bits())
    }

    /// `P` and `Q` derived from e and the golden ratio.
    pub(crate) fn magic(self) -> (u64, u64) {
        match self {
            WordSize::W16 => (0xB7E1, 0x9E37),
            WordSize::W32 => (0xB7E1_5163, 0x9E37_79B9),
            WordSize::W64 => (0xB7E1_5162_8AED_2A6B, 0x9E37_79B9_7F4A_7C15),
        }
    }

    pub(crate) fn add(self, a: u64, b: u64) -> u64 {
        a.wrapping_add(b) & self.mask()
    }

    pub(crate) fn sub(self, a: u64, b: u64) -> u64 {
        a.wrapping_sub(b) & self.mask()
    }

    pub(crate) fn rotl(self, x: u64, amount: u64) -> u64 {
        let w = self.bits();
        let s = (amount % w as u64) as u32;
        if s == 0 {
            x
        } else {
            ((x << s) | (x >> (w - s))) & self.mask()
        }
    }

    pub(crate) fn rotr(self, x: u64, amount: u64) -> u64 {
        let w = self.bits() as u64;
        self.rotl(x, w - amount % w)
    }

    fn load(self, bytes: &[u8]) -> u64 {
        bytes.iter().rev().fold(0u64, |acc, &b| (acc << 8) | b as u64)
    }

    fn store(self, word: u64, out: &mut Vec<u8>) {
        out.extend((0..self.bytes()).map(|i| (word >> (8 * i)) as u8));
    }
}

pub struct RC5 {
    word: WordSize,
    rounds: usize,
    s: Vec<u64>,
}

impl RC5 {
    pub const DEFAULT_ROUNDS: usize = 12;

    /// `word_bits` is 16, 32 or 64; `rounds` is 1..=255; the key holds at most 255 bytes.
    pub fn new(word_bits: usize, rounds: usize, key: &[u8]) -> CipherResult<Self> {
        let word = WordSize::from_bits(word_bits)?;
        if !(1..=255).contains(&rounds) {
            return Err(CipherError::invalid(format!(
                "RC5 rounds must be in 1..=255, got {rounds}"
            )));
        }
        if key.len() > 255 {
            return Err(CipherError::invalid(format!(
                "RC5 key must be at most 255 bytes, got {}",
                key.len()
            )));
        }

        Ok(RC5 {
            word,
            rounds,
            s: expand_key(word, rounds, key),
        })
    }

    /// Picks the word size from a 4, 8 or 16 byte block and uses 12 rounds.
    pub fn with_block_size(key: &[u8], block_size: usize) -> CipherResult<Self> {
        Self::new(block_size * 4, Self::DEFAULT_ROUNDS, key)
    }

    pub fn word_size(&self) -> WordSize {
        self.word
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    fn split(&self, block: &[u8]) -> CipherResult<(u64, u64)> {
        ensure_len(block, self.block_size(), "RC5 block")?;
        let (a, b) = block.split_at(self.word.bytes());
        Ok((self.word.load(a), self.word.load(b)))
    }

    fn join(&self, a: u64, b: u64) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.block_size());
        self.word.store(a, &mut out);
        self.word.store(b, &mut out);
        out
    }
}

impl SymmetricCipher for RC5 {
    fn encrypt_block(&self, block: &[u8]) -> CipherResult<Vec<u8>> {
        let w = self.word;
        let (a, b) = self.split(block)?;
        let mut a = w.add(a, self.s[0]);
        let mut b = w.add(b, self.s[1]);

        for i in 1..=self.rounds {
            a = w.add(w.rotl(a ^ b, b), self.s[2 * i]);
            b = w.add(w.rotl(b ^ a, a), self.s[2 * i + 1]);
        }

        Ok(self.join(a, b))
    }

    fn decrypt_block(&self, block: &[u8]) -> CipherResult<Vec<u8>> {
        let w = self.word;
        let (mut a, mut b) = self.split(block)?;

        for i in (1..=self.rounds).rev() {
            b = w.rotr(w.sub(b, self.s[2 * i + 1]), a) ^ a;
            a = w.rotr(w.sub(a, self.s[2 * i]), b) ^ b;
        }

        Ok(self.join(w.sub(a, self.s[0]), w.sub(b, self.s[1])))
    }

    fn block_size(&self) -> usize {
        2 * self.word.bytes()
    }
}
