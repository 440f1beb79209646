//! AEAD contract shared by both schemes.
//!
//! Every [`Scheme`] gets the [`Aead`] capability through a blanket impl:
//!
//! - direct `encrypt` / `decrypt` over the duplex core
//! - CBC-like chaining (`encrypt_cbc` / `decrypt_cbc`)
//! - OFB-like chaining (`encrypt_ofb` / `decrypt_ofb`, plus observed variants)
//!
//! ## Usage
//!
//! ```
//! use lwc_crypto::{Aead, Isap};
//!
//! let key = [0x11u8; 16];
//! let nonce = [0x22u8; 16];
//!
//! let sealed = Isap.encrypt(b"secret", &key, &nonce, Some(b"hdr"))?;
//! let opened = Isap.decrypt(&sealed.ciphertext, &key, &nonce, &sealed.tag, Some(b"hdr"))?;
//! assert_eq!(opened, b"secret");
//! # Ok::<(), lwc_crypto::CryptoError>(())
//! ```

use crate::CryptoError;
use crate::duplex;
use crate::modes::{KeystreamObserver, cbc, ofb};
use crate::scheme::Scheme;

/// Ciphertext together with its authentication tag.
///
/// `ciphertext` always has the plaintext's length; `tag` has the scheme's
/// fixed tag length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedData {
    /// Encrypted bytes.
    pub ciphertext: Vec<u8>,
    /// Authentication tag.
    pub tag: Vec<u8>,
}

impl AuthenticatedData {
    /// Serialize as `ciphertext || tag`.
    #[must_use]
    pub fn to_extract(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.ciphertext.len() + self.tag.len());
        out.extend_from_slice(&self.ciphertext);
        out.extend_from_slice(&self.tag);
        out
    }

    /// Split `ciphertext || tag` back into its parts.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::MalformedInput`] if `bytes` is shorter than `tag_len`.
    pub fn from_extract(bytes: &[u8], tag_len: usize) -> Result<Self, CryptoError> {
        let Some(split) = bytes.len().checked_sub(tag_len) else {
            return Err(CryptoError::MalformedInput(format!(
                "{} bytes cannot hold a {tag_len}-byte tag",
                bytes.len()
            )));
        };
        let (ciphertext, tag) = bytes.split_at(split);
        Ok(Self {
            ciphertext: ciphertext.to_vec(),
            tag: tag.to_vec(),
        })
    }

    /// Total serialized length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ciphertext.len() + self.tag.len()
    }

    /// True when both parts are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ciphertext.is_empty() && self.tag.is_empty()
    }
}

/// Uniform AEAD capability of a scheme.
///
/// All lengths are validated before any state is touched. Decryption never
/// returns plaintext unless the tag verifies.
pub trait Aead: Scheme {
    /// Key length in bytes.
    fn key_len(&self) -> usize {
        Self::KEY_SIZE
    }

    /// Nonce (and IV) length in bytes.
    fn nonce_len(&self) -> usize {
        Self::NONCE_SIZE
    }

    /// Tag length in bytes.
    fn tag_len(&self) -> usize {
        Self::TAG_SIZE
    }

    /// Encrypt and authenticate.
    ///
    /// # Errors
    ///
    /// [`CryptoError::InvalidParameter`] on a wrong key or nonce length.
    fn encrypt(
        &self,
        plaintext: &[u8],
        key: &[u8],
        nonce: &[u8],
        ad: Option<&[u8]>,
    ) -> Result<AuthenticatedData, CryptoError> {
        duplex::encrypt::<Self>(plaintext, key, nonce, ad)
    }

    /// Verify and decrypt.
    ///
    /// # Errors
    ///
    /// [`CryptoError::InvalidParameter`] on a wrong length,
    /// [`CryptoError::AuthenticationFailure`] if the tag does not match.
    fn decrypt(
        &self,
        ciphertext: &[u8],
        key: &[u8],
        nonce: &[u8],
        tag: &[u8],
        ad: Option<&[u8]>,
    ) -> Result<Vec<u8>, CryptoError> {
        duplex::decrypt::<Self>(ciphertext, key, nonce, tag, ad)
    }

    /// CBC-like chained encryption.
    ///
    /// # Errors
    ///
    /// [`CryptoError::InvalidParameter`] on a wrong key or IV length.
    fn encrypt_cbc(
        &self,
        plaintext: &[u8],
        key: &[u8],
        iv: &[u8],
        ad: Option<&[u8]>,
    ) -> Result<AuthenticatedData, CryptoError> {
        cbc::encrypt::<Self>(plaintext, key, iv, ad)
    }

    /// CBC-like chained decryption.
    ///
    /// # Errors
    ///
    /// As [`Aead::decrypt`].
    fn decrypt_cbc(
        &self,
        ciphertext: &[u8],
        key: &[u8],
        iv: &[u8],
        tag: &[u8],
        ad: Option<&[u8]>,
    ) -> Result<Vec<u8>, CryptoError> {
        cbc::decrypt::<Self>(ciphertext, key, iv, tag, ad)
    }

    /// OFB-like keystream encryption.
    ///
    /// # Errors
    ///
    /// [`CryptoError::InvalidParameter`] on a wrong key or IV length.
    fn encrypt_ofb(
        &self,
        plaintext: &[u8],
        key: &[u8],
        iv: &[u8],
        ad: Option<&[u8]>,
    ) -> Result<AuthenticatedData, CryptoError> {
        ofb::encrypt::<Self>(plaintext, key, iv, ad, &mut crate::modes::NoopObserver)
    }

    /// OFB-like keystream decryption.
    ///
    /// # Errors
    ///
    /// As [`Aead::decrypt`].
    fn decrypt_ofb(
        &self,
        ciphertext: &[u8],
        key: &[u8],
        iv: &[u8],
        tag: &[u8],
        ad: Option<&[u8]>,
    ) -> Result<Vec<u8>, CryptoError> {
        ofb::decrypt::<Self>(ciphertext, key, iv, tag, ad, &mut crate::modes::NoopObserver)
    }

    /// [`Aead::encrypt_ofb`], reporting each keystream block to `observer`.
    ///
    /// # Errors
    ///
    /// As [`Aead::encrypt_ofb`].
    fn encrypt_ofb_observed(
        &self,
        plaintext: &[u8],
        key: &[u8],
        iv: &[u8],
        ad: Option<&[u8]>,
        observer: &mut dyn KeystreamObserver,
    ) -> Result<AuthenticatedData, CryptoError> {
        ofb::encrypt::<Self>(plaintext, key, iv, ad, observer)
    }

    /// [`Aead::decrypt_ofb`], reporting each keystream block to `observer`.
    ///
    /// The observer only sees keystream once the tag has verified.
    ///
    /// # Errors
    ///
    /// As [`Aead::decrypt_ofb`].
    fn decrypt_ofb_observed(
        &self,
        ciphertext: &[u8],
        key: &[u8],
        iv: &[u8],
        tag: &[u8],
        ad: Option<&[u8]>,
        observer: &mut dyn KeystreamObserver,
    ) -> Result<Vec<u8>, CryptoError> {
        ofb::decrypt::<Self>(ciphertext, key, iv, tag, ad, observer)
    }
}

impl<S: Scheme> Aead for S {}
