pub mod crypto;
pub use crypto::cipher_context::*;
pub use crypto::cipher_error::{CipherError, CipherResult};
pub use crypto::cipher_task::{CipherTask, EncryptionProgress};
pub use crypto::cipher_traits::*;
pub use crypto::cipher_types::*;
