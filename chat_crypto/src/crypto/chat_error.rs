use dh_crypto::DhError;
use std::string::FromUtf8Error;
use symmetric_cipher::CipherError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    KeyExchange(#[from] DhError),

    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("invalid chat settings: {0}")]
    InvalidSettings(String),

    #[error("decrypted message is not valid UTF-8")]
    InvalidMessage(#[from] FromUtf8Error),
}

pub type ChatResult<T> = Result<T, ChatError>;
