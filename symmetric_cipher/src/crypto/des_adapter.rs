use crate::crypto::cipher_error::CipherResult;
use crate::crypto::cipher_traits::SymmetricCipher;
use crate::crypto::des::DES;
use crate::crypto::encryption_transformation::EncryptionTransformation;
use std::collections::HashMap;

/// Uses a whole DES encryption as a Feistel round function, the round key
/// being the DES key. Instances for known round keys are built up front so
/// the DES key schedule is not rerun for every block.
#[derive(Default)]
pub struct DesAdapter {
    prepared: HashMap<Vec<u8>, DES>,
}

impl DesAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_round_keys(round_keys: &[Vec<u8>]) -> CipherResult<Self> {
        let prepared = round_keys
            .iter()
            .map(|key| Ok((key.clone(), DES::new(key)?)))
            .collect::<CipherResult<HashMap<_, _>>>()?;
        Ok(Self { prepared })
    }
}

impl EncryptionTransformation for DesAdapter {
    fn transform(&self, data: &[u8], round_key: &[u8]) -> CipherResult<Vec<u8>> {
        match self.prepared.get(round_key) {
            Some(des) => des.encrypt_block(data),
            None => DES::new(round_key)?.encrypt_block(data),
        }
    }
}
