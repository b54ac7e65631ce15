use crate::crypto::cipher_error::CipherResult;

/// A fixed-size block transform. Implementations validate the block length
/// and keep their round keys immutable after construction, so one instance
/// can be shared between worker threads.
pub trait SymmetricCipher {
    fn encrypt_block(&self, block: &[u8]) -> CipherResult<Vec<u8>>;
    fn decrypt_block(&self, block: &[u8]) -> CipherResult<Vec<u8>>;
    fn block_size(&self) -> usize;
}

impl<C: SymmetricCipher + ?Sized> SymmetricCipher for Box<C> {
    fn encrypt_block(&self, block: &[u8]) -> CipherResult<Vec<u8>> {
        (**self).encrypt_block(block)
    }

    fn decrypt_block(&self, block: &[u8]) -> CipherResult<Vec<u8>> {
        (**self).decrypt_block(block)
    }

    fn block_size(&self) -> usize {
        (**self).block_size()
    }
}
