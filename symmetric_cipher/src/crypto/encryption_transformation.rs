use crate::crypto::cipher_error::CipherResult;

/// Round function of a Feistel network.
pub trait EncryptionTransformation {
    fn transform(&self, input_block: &[u8], round_key: &[u8]) -> CipherResult<Vec<u8>>;
}
