use crate::crypto::dh_error::DhError;
use crate::crypto::key_exchange_traits::{KeyExchangeAlgorithm, KeyPair};
use hex_literal::hex;
use log::debug;
use num_bigint::BigUint;
use num_traits::One;
use rand::RngCore;

/// 512-bit safe prime of the RFC 2409 construction.
const STANDARD_PRIME: [u8; 64] = hex!(
    "FFFFFFFFFFFFFFFF C90FDAA22168C234 C4C6628B80DC1CD1 29024E088A67CC74
     020BBEA63B139B22 514A08798E3404DD EF9519B3CD3A439D FFFFFFFFFFFFFFFF"
);
const STANDARD_GENERATOR: u32 = 2;

#[derive(Clone, Debug)]
pub struct DhParameters {
    pub p: BigUint,
    pub g: BigUint,
}

impl DhParameters {
    /// The process-wide group shared by every conversation.
    pub fn standard() -> Self {
        DhParameters {
            p: BigUint::from_bytes_be(&STANDARD_PRIME),
            g: BigUint::from(STANDARD_GENERATOR),
        }
    }
}

pub struct DiffieHellman {
    params: DhParameters,
}

impl DiffieHellman {
    pub fn standard() -> Self {
        DiffieHellman {
            params: DhParameters::standard(),
        }
    }

    pub fn params(&self) -> &DhParameters {
        &self.params
    }

    /// Accepts values in `[2, p - 1)`.
    fn in_range(&self, value: &BigUint) -> bool {
        let p_minus_1 = &self.params.p - BigUint::one();
        *value >= BigUint::from(2u32) && *value < p_minus_1
    }
}

impl KeyExchangeAlgorithm for DiffieHellman {
    type Parameters = DhParameters;
    type SharedSecret = Vec<u8>;

    fn new(params: Self::Parameters) -> Result<Self, DhError> {
        if params.p <= BigUint::from(3u32) {
            return Err(DhError::InvalidParameters("p must be a prime greater than 3"));
        }
        if !params.p.bit(0) {
            return Err(DhError::InvalidParameters("p must be odd"));
        }
        if params.g <= BigUint::one() || params.g >= &params.p - BigUint::one() {
            return Err(DhError::InvalidParameters("g must be in (1, p - 1)"));
        }
        Ok(Self { params })
    }

    /// The private exponent has one bit less than `p` with its top bit set,
    /// i.e. it lies in `[2^(n-2), 2^(n-1))` for an `n`-bit prime.
    fn generate_keypair(&self, rng: &mut impl RngCore) -> KeyPair {
        let exponent_bits = self.params.p.bits() - 1;
        let mut bytes = vec![0u8; exponent_bits.div_ceil(8) as usize];
        rng.fill_bytes(&mut bytes);

        let mask = (BigUint::one() << exponent_bits) - BigUint::one();
        let top = BigUint::one() << (exponent_bits - 1);
        let private_key = (BigUint::from_bytes_be(&bytes) & mask) | top;
        let public_key = self.params.g.modpow(&private_key, &self.params.p);

        debug!("generated DH key pair with a {exponent_bits}-bit exponent");
        KeyPair {
            private_key,
            public_key,
        }
    }

    fn restore_keypair(&self, private_key: BigUint) -> Result<KeyPair, DhError> {
        if !self.in_range(&private_key) {
            return Err(DhError::InvalidPrivateKey);
        }
        let public_key = self.params.g.modpow(&private_key, &self.params.p);
        Ok(KeyPair {
            private_key,
            public_key,
        })
    }

    /// `other_public_key ^ own_private_key mod p` as minimal big-endian bytes.
    fn compute_shared_secret(
        &self,
        own_private_key: &BigUint,
        other_public_key: &BigUint,
    ) -> Result<Self::SharedSecret, DhError> {
        if !self.in_range(own_private_key) {
            return Err(DhError::InvalidPrivateKey);
        }
        if !self.in_range(other_public_key) {
            return Err(DhError::InvalidPublicKey);
        }

        Ok(other_public_key
            .modpow(own_private_key, &self.params.p)
            .to_bytes_be())
    }
}
