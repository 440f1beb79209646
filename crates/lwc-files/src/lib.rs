//! # LWC Files
//!
//! File integrity sealing for LWC.
//!
//! This crate provides:
//! - Streaming BLAKE3 digests of file contents
//! - Integrity extracts: the digest encrypted with Elephant or ISAP
//! - Sealing (append the extract) and verification of sealed files
//!
//! ## Sealed File Layout
//!
//! | Part | Length |
//! |------|--------|
//! | Original content | any |
//! | Encrypted digest | 32 |
//! | Tag | 8 (Elephant) / 16 (ISAP) |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod digest;
pub mod error;
pub mod integrity;

pub use error::IntegrityError;
pub use integrity::IntegrityService;

/// Read buffer size for streaming digests (64 KiB)
pub const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Digest length in bytes
pub const DIGEST_SIZE: usize = 32;
