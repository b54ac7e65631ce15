use crate::crypto::dh_error::DhError;
use num_bigint::BigUint;
use rand::RngCore;

#[derive(Debug, Clone)]
pub struct KeyPair {
    pub private_key: BigUint,
    pub public_key: BigUint,
}

impl KeyPair {
    /// Minimal big-endian encoding of the public value, as sent to the peer.
    pub fn public_key_bytes(&self) -> Vec<u8> {
        self.public_key.to_bytes_be()
    }
}

pub trait KeyExchangeAlgorithm: Sized {
    type Parameters;
    type SharedSecret;

    fn new(params: Self::Parameters) -> Result<Self, DhError>;
    fn generate_keypair(&self, rng: &mut impl RngCore) -> KeyPair;

    /// Rebuilds a key pair from a stored private exponent.
    fn restore_keypair(&self, private_key: BigUint) -> Result<KeyPair, DhError>;

    fn compute_shared_secret(
        &self,
        own_private_key: &BigUint,
        other_public_key: &BigUint,
    ) -> Result<Self::SharedSecret, DhError>;
}
