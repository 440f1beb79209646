//! Cryptographic error types.

use thiserror::Error;

/// Cryptographic errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Key, nonce, IV or tag has the wrong length for the scheme
    #[error("invalid {parameter} length: expected {expected}, got {actual}")]
    InvalidParameter {
        /// Which parameter was rejected
        parameter: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Tag verification failed
    #[error("authentication failure")]
    AuthenticationFailure,

    /// Buffer inconsistent with its declared layout
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Algorithm identifier not recognised
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Mode identifier not recognised
    #[error("unknown mode: {0}")]
    UnknownMode(String),
}

impl CryptoError {
    /// Reject `actual` unless it equals `expected`.
    pub(crate) fn check_len(
        parameter: &'static str,
        expected: usize,
        actual: usize,
    ) -> Result<(), Self> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self::InvalidParameter {
                parameter,
                expected,
                actual,
            })
        }
    }
}
