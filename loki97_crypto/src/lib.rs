pub mod crypto;
pub use crypto::loki97::Loki97Cipher;
