use crate::crypto::chat_error::ChatError;
use loki97_crypto::Loki97Cipher;
use rc5_crypto::RC5;
use std::fmt;
use std::str::FromStr;
use symmetric_cipher::crypto::deal::DEAL;
use symmetric_cipher::crypto::des::DES;
use symmetric_cipher::{CipherResult, SymmetricCipher};

/// Block ciphers a conversation can be set up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Des,
    Deal,
    Rc5,
    Loki97,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [Algorithm::Des, Algorithm::Deal, Algorithm::Rc5, Algorithm::Loki97];

    /// Session key length in bytes.
    pub fn key_len(self) -> usize {
        match self {
            Algorithm::Des => 8,
            Algorithm::Deal => 32,
            Algorithm::Rc5 => 16,
            Algorithm::Loki97 => 32,
        }
    }

    pub fn block_size(self) -> usize {
        match self {
            Algorithm::Des => DES::BLOCK_SIZE,
            Algorithm::Deal => DEAL::BLOCK_SIZE,
            Algorithm::Rc5 => 8,
            Algorithm::Loki97 => Loki97Cipher::BLOCK_SIZE,
        }
    }

    /// RC5 is built as RC5-32/12 so that its block is 8 bytes.
    pub fn build_cipher(self, key: &[u8]) -> CipherResult<Box<dyn SymmetricCipher + Send + Sync>> {
        let cipher: Box<dyn SymmetricCipher + Send + Sync> = match self {
            Algorithm::Des => Box::new(DES::new(key)?),
            Algorithm::Deal => Box::new(DEAL::new(key)?),
            Algorithm::Rc5 => Box::new(RC5::with_block_size(key, self.block_size())?),
            Algorithm::Loki97 => Box::new(Loki97Cipher::new(key)?),
        };
        Ok(cipher)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Des => "DES",
            Algorithm::Deal => "DEAL",
            Algorithm::Rc5 => "RC5",
            Algorithm::Loki97 => "LOKI97",
        };
        f.write_str(name)
    }
}

impl FromStr for Algorithm {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ChatError::UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_cipher_matches_declared_block_size() {
        for algorithm in Algorithm::ALL {
            let key = vec![0x5Au8; algorithm.key_len()];
            let cipher = algorithm.build_cipher(&key).unwrap();
            assert_eq!(cipher.block_size(), algorithm.block_size(), "{algorithm}");
        }
    }

    #[test]
    fn names_roundtrip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
        }
        assert_eq!("loki97".parse::<Algorithm>().unwrap(), Algorithm::Loki97);
        assert!(matches!("AES".parse::<Algorithm>(), Err(ChatError::UnknownAlgorithm(_))));
    }
}
