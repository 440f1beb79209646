//! Integrity service errors.

use lwc_crypto::CryptoError;
use std::io;
use thiserror::Error;

/// Errors from sealing or verifying a file
#[derive(Debug, Error)]
pub enum IntegrityError {
    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Key, nonce or layout rejected by the AEAD
    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    /// File is shorter than an integrity extract
    #[error("file too short to hold an integrity extract: {actual} < {expected} bytes")]
    Truncated {
        /// Extract length for the algorithm
        expected: u64,
        /// File length
        actual: u64,
    },
}
