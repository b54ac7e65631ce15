pub mod crypto;
pub use crypto::algorithm::Algorithm;
pub use crypto::chat_error::{ChatError, ChatResult};
pub use crypto::chat_session::{derive_session_key, ChatSession};
pub use crypto::chat_settings::ChatSettings;
