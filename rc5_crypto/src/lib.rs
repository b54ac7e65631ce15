pub mod crypto;
pub use crypto::rc5::{WordSize, RC5};
