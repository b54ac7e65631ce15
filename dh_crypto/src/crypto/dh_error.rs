use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DhError {
    #[error("invalid group parameters: {0}")]
    InvalidParameters(&'static str),

    #[error("private exponent is outside [2, p - 1)")]
    InvalidPrivateKey,

    #[error("peer public value is outside [2, p - 1)")]
    InvalidPublicKey,
}
