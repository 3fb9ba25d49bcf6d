//! Crypto primitive error types

use thiserror::Error;

/// Cryptographic operation error
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Initialization failed: {0}")]
    InitializationFailure(String),

    #[error("Crypto library not initialized")]
    NotInitialized,

    #[error("Encryption failed: {0}")]
    Encryption(String),

    #[error("Invalid key material: degenerate public key")]
    InvalidKeyMaterial,

    /// Every AEAD open failure maps here, whatever the cause.
    #[error("Decryption failed: authentication failed")]
    AuthenticationFailed,

    #[error("Invalid {what} length: expected {expected}, got {actual}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

pub type CryptoResult<T> = Result<T, CryptoError>;

impl CryptoError {
    pub(crate) fn invalid_length(what: &'static str, expected: usize, actual: usize) -> Self {
        Self::InvalidLength {
            what,
            expected,
            actual,
        }
    }
}
