//! Per-conversation encryption: which cipher, how it is configured and
//! where its key comes from.

pub mod algorithm;
pub mod chat_error;
pub mod chat_session;
pub mod chat_settings;
