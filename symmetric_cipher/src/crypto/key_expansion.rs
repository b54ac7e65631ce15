use crate::crypto::cipher_error::CipherResult;

pub trait KeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> CipherResult<Vec<Vec<u8>>>;
}
