//! Sealing and verifying files with an encrypted digest extract.
//!
//! An extract is `encrypt(digest).ciphertext || tag`, appended to the file
//! it describes. Verification splits it off again, decrypts it and compares
//! the recovered digest against a fresh digest of the remaining content.

use crate::digest::{hash_file, hash_reader};
use crate::{DIGEST_SIZE, IntegrityError};
use lwc_crypto::constant_time::ct_eq;
use lwc_crypto::{Algorithm, AuthenticatedData, CryptoError};
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

/// File integrity service bound to one AEAD scheme.
///
/// # Example
///
/// ```no_run
/// use lwc_crypto::Algorithm;
/// use lwc_files::IntegrityService;
///
/// let service = IntegrityService::new(Algorithm::Elephant);
/// let key = [0u8; 16];
/// let nonce = [1u8; 8];
///
/// service.seal_file("report.pdf", &key, &nonce)?;
/// assert!(service.verify_file("report.pdf", &key, &nonce)?);
/// # Ok::<(), lwc_files::IntegrityError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegrityService {
    algorithm: Algorithm,
}

impl IntegrityService {
    /// Create a service using `algorithm`.
    #[must_use]
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    /// Scheme in use.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Length of an extract: encrypted digest plus tag.
    #[must_use]
    pub fn extract_len(&self) -> usize {
        DIGEST_SIZE + self.algorithm.tag_len()
    }

    /// Digest `path` and encrypt the digest.
    ///
    /// # Errors
    ///
    /// I/O errors, or [`IntegrityError::Crypto`] for a wrong key or nonce length.
    pub fn generate_extract<P: AsRef<Path>>(
        &self,
        path: P,
        key: &[u8],
        nonce: &[u8],
    ) -> Result<Vec<u8>, IntegrityError> {
        let path = path.as_ref();
        self.check_lengths(key, nonce)?;

        let digest = hash_file(path)?;
        let sealed = self.algorithm.encrypt(&digest, key, nonce, None)?;
        tracing::debug!(
            "Generated {} extract for {} ({} bytes)",
            self.algorithm,
            path.display(),
            sealed.len()
        );
        Ok(sealed.to_extract())
    }

    /// Append `extract` to the end of `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened for appending.
    pub fn append_extract<P: AsRef<Path>>(
        &self,
        path: P,
        extract: &[u8],
    ) -> Result<(), IntegrityError> {
        let mut file = OpenOptions::new().append(true).open(path)?;
        file.write_all(extract)?;
        file.sync_all()?;
        Ok(())
    }

    /// Generate an extract for `path` and append it. Returns the extract.
    ///
    /// # Errors
    ///
    /// As [`IntegrityService::generate_extract`] and [`IntegrityService::append_extract`].
    pub fn seal_file<P: AsRef<Path>>(
        &self,
        path: P,
        key: &[u8],
        nonce: &[u8],
    ) -> Result<Vec<u8>, IntegrityError> {
        let path = path.as_ref();
        let extract = self.generate_extract(path, key, nonce)?;
        self.append_extract(path, &extract)?;
        tracing::info!("Sealed {} with {}", path.display(), self.algorithm);
        Ok(extract)
    }

    /// Check a sealed file.
    ///
    /// Returns `Ok(false)` if the extract fails authentication or the content
    /// digest no longer matches.
    ///
    /// # Errors
    ///
    /// [`IntegrityError::Truncated`] if the file cannot hold an extract,
    /// I/O errors, or [`IntegrityError::Crypto`] for a wrong key or nonce length.
    pub fn verify_file<P: AsRef<Path>>(
        &self,
        path: P,
        key: &[u8],
        nonce: &[u8],
    ) -> Result<bool, IntegrityError> {
        let path = path.as_ref();
        self.check_lengths(key, nonce)?;

        let mut file = File::open(path)?;
        let content_len = self.content_len(file.metadata()?.len())?;

        let mut extract = vec![0u8; self.extract_len()];
        file.seek(SeekFrom::Start(content_len))?;
        file.read_exact(&mut extract)?;
        let sealed = AuthenticatedData::from_extract(&extract, self.algorithm.tag_len())?;

        let recorded = match self
            .algorithm
            .decrypt(&sealed.ciphertext, key, nonce, &sealed.tag, None)
        {
            Ok(digest) => digest,
            Err(CryptoError::AuthenticationFailure) => {
                tracing::warn!("Integrity extract of {} failed authentication", path.display());
                return Ok(false);
            }
            Err(e) => return Err(e.into()),
        };

        file.seek(SeekFrom::Start(0))?;
        let actual = hash_reader(&mut file, content_len)?;
        let intact = ct_eq(&recorded, &actual);

        if intact {
            tracing::info!("Verified {} ({} content bytes)", path.display(), content_len);
        } else {
            tracing::warn!("Content digest mismatch for {}", path.display());
        }
        Ok(intact)
    }

    /// Remove a trailing extract, restoring the original content.
    ///
    /// Does not check the extract.
    ///
    /// # Errors
    ///
    /// [`IntegrityError::Truncated`] if the file cannot hold an extract, or I/O errors.
    pub fn strip_extract<P: AsRef<Path>>(&self, path: P) -> Result<(), IntegrityError> {
        let path = path.as_ref();
        let file = OpenOptions::new().write(true).open(path)?;
        let content_len = self.content_len(file.metadata()?.len())?;
        file.set_len(content_len)?;
        file.sync_all()?;
        tracing::debug!("Stripped extract from {}", path.display());
        Ok(())
    }

    fn content_len(&self, file_len: u64) -> Result<u64, IntegrityError> {
        let expected = self.extract_len() as u64;
        file_len
            .checked_sub(expected)
            .ok_or(IntegrityError::Truncated {
                expected,
                actual: file_len,
            })
    }

    /// Reject bad parameters before touching the file.
    fn check_lengths(&self, key: &[u8], nonce: &[u8]) -> Result<(), IntegrityError> {
        for (parameter, expected, actual) in [
            ("key", self.algorithm.key_len(), key.len()),
            ("nonce", self.algorithm.nonce_len(), nonce.len()),
        ] {
            if expected != actual {
                return Err(CryptoError::InvalidParameter {
                    parameter,
                    expected,
                    actual,
                }
                .into());
            }
        }
        Ok(())
    }
}
