pub mod crypto;
pub use crypto::dh_error::DhError;
pub use crypto::diffie_hellman_algorithm::{DhParameters, DiffieHellman};
pub use crypto::key_exchange_traits::{KeyExchangeAlgorithm, KeyPair};
