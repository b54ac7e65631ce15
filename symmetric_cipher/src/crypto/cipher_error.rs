use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CipherError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),

    #[error("operation was cancelled")]
    Cancelled,

    /// A permutation table addressed a bit the input does not have.
    #[error("permutation index {index} is outside of a {bits}-bit input")]
    PermutationOutOfBounds { index: usize, bits: usize },

    #[error("background task failed: {0}")]
    TaskFailed(String),
}

impl CipherError {
    pub fn invalid(message: impl Into<String>) -> Self {
        CipherError::InvalidArgument(message.into())
    }
}

pub type CipherResult<T> = Result<T, CipherError>;
