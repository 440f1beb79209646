//! # LWC Crypto
//!
//! Lightweight permutation-based authenticated encryption.
//!
//! This crate provides:
//! - Elephant: duplex AEAD over a 1600-bit Keccak-style permutation
//! - ISAP: duplex AEAD over a 320-bit Ascon-style permutation
//! - CBC-like and OFB-like chaining modes over either scheme
//! - Constant-time tag verification
//!
//! ## Scheme Parameters
//!
//! | Scheme | State | Key | Nonce | Tag | Rounds (init/block) | Tag derivation |
//! |--------|-------|-----|-------|-----|---------------------|----------------|
//! | Elephant | 25 x 64 bit | 16 | 8 | 8 | 12 / 12 | lock-step state |
//! | ISAP | 5 x 64 bit | 16 | 16 | 16 | 12 / 6 | independent state |
//!
//! Both schemes exchange 8 bytes with the state per duplex step. All lengths
//! are in bytes.
//!
//! ## Usage
//!
//! ```
//! use lwc_crypto::{Algorithm, Mode};
//!
//! let algorithm: Algorithm = "elephant".parse()?;
//! let key = [7u8; 16];
//! let nonce = [1u8; 8];
//!
//! let sealed = algorithm.seal(Mode::Cbc, b"payload", &key, &nonce, None)?;
//! let opened = algorithm.open(Mode::Cbc, &sealed.ciphertext, &key, &nonce, &sealed.tag, None)?;
//! assert_eq!(opened, b"payload");
//! # Ok::<(), lwc_crypto::CryptoError>(())
//! ```
//!
//! Nonce uniqueness per key is the caller's responsibility.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod aead;
pub mod algorithm;
pub mod codec;
pub mod constant_time;
pub mod duplex;
pub mod error;
pub mod modes;
pub mod permutation;
pub mod scheme;
pub mod state;

pub use aead::{Aead, AuthenticatedData};
pub use algorithm::{Algorithm, Mode};
pub use error::CryptoError;
pub use modes::{KeystreamObserver, KeystreamRecorder, NoopObserver};
pub use scheme::{Elephant, Isap, Scheme};

/// Key size shared by both schemes
pub const KEY_SIZE: usize = 16;

/// Elephant nonce size
pub const ELEPHANT_NONCE_SIZE: usize = 8;

/// Elephant tag size
pub const ELEPHANT_TAG_SIZE: usize = 8;

/// ISAP nonce size
pub const ISAP_NONCE_SIZE: usize = 16;

/// ISAP tag size
pub const ISAP_TAG_SIZE: usize = 16;

/// Bytes processed per duplex step
pub const RATE: usize = 8;
