//! Runtime scheme and mode selection.
//!
//! Identifiers are parsed once at the boundary (CLI flags, config files);
//! everything past that point dispatches on the closed enums.

use crate::CryptoError;
use crate::aead::{Aead, AuthenticatedData};
use crate::modes::KeystreamObserver;
use crate::scheme::{Elephant, Isap};
use core::fmt;
use core::str::FromStr;

/// AEAD scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Keccak-style permutation, 8-byte nonce and tag.
    Elephant,
    /// Ascon-style permutation, 16-byte nonce and tag.
    #[default]
    Isap,
}

/// How a message is fed through the scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Single duplex pass.
    #[default]
    Direct,
    /// CBC-like block chaining.
    Cbc,
    /// OFB-like keystream chaining.
    Ofb,
}

macro_rules! dispatch {
    ($self:expr, $scheme:ident => $body:expr) => {
        match $self {
            Algorithm::Elephant => {
                let $scheme = Elephant;
                $body
            }
            Algorithm::Isap => {
                let $scheme = Isap;
                $body
            }
        }
    };
}

impl Algorithm {
    /// All supported schemes.
    pub const ALL: [Self; 2] = [Self::Elephant, Self::Isap];

    /// Canonical identifier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Elephant => "elephant",
            Self::Isap => "isap",
        }
    }

    /// Key length in bytes.
    #[must_use]
    pub fn key_len(self) -> usize {
        dispatch!(self, s => s.key_len())
    }

    /// Nonce and IV length in bytes.
    #[must_use]
    pub fn nonce_len(self) -> usize {
        dispatch!(self, s => s.nonce_len())
    }

    /// Tag length in bytes.
    #[must_use]
    pub fn tag_len(self) -> usize {
        dispatch!(self, s => s.tag_len())
    }

    /// See [`Aead::encrypt`].
    ///
    /// # Errors
    ///
    /// [`CryptoError::InvalidParameter`] on a wrong key or nonce length.
    pub fn encrypt(
        self,
        plaintext: &[u8],
        key: &[u8],
        nonce: &[u8],
        ad: Option<&[u8]>,
    ) -> Result<AuthenticatedData, CryptoError> {
        dispatch!(self, s => s.encrypt(plaintext, key, nonce, ad))
    }

    /// See [`Aead::decrypt`].
    ///
    /// # Errors
    ///
    /// [`CryptoError::InvalidParameter`] or [`CryptoError::AuthenticationFailure`].
    pub fn decrypt(
        self,
        ciphertext: &[u8],
        key: &[u8],
        nonce: &[u8],
        tag: &[u8],
        ad: Option<&[u8]>,
    ) -> Result<Vec<u8>, CryptoError> {
        dispatch!(self, s => s.decrypt(ciphertext, key, nonce, tag, ad))
    }

    /// See [`Aead::encrypt_cbc`].
    ///
    /// # Errors
    ///
    /// [`CryptoError::InvalidParameter`] on a wrong key or IV length.
    pub fn encrypt_cbc(
        self,
        plaintext: &[u8],
        key: &[u8],
        iv: &[u8],
        ad: Option<&[u8]>,
    ) -> Result<AuthenticatedData, CryptoError> {
        dispatch!(self, s => s.encrypt_cbc(plaintext, key, iv, ad))
    }

    /// See [`Aead::decrypt_cbc`].
    ///
    /// # Errors
    ///
    /// [`CryptoError::InvalidParameter`] or [`CryptoError::AuthenticationFailure`].
    pub fn decrypt_cbc(
        self,
        ciphertext: &[u8],
        key: &[u8],
        iv: &[u8],
        tag: &[u8],
        ad: Option<&[u8]>,
    ) -> Result<Vec<u8>, CryptoError> {
        dispatch!(self, s => s.decrypt_cbc(ciphertext, key, iv, tag, ad))
    }

    /// See [`Aead::encrypt_ofb`].
    ///
    /// # Errors
    ///
    /// [`CryptoError::InvalidParameter`] on a wrong key or IV length.
    pub fn encrypt_ofb(
        self,
        plaintext: &[u8],
        key: &[u8],
        iv: &[u8],
        ad: Option<&[u8]>,
    ) -> Result<AuthenticatedData, CryptoError> {
        dispatch!(self, s => s.encrypt_ofb(plaintext, key, iv, ad))
    }

    /// See [`Aead::decrypt_ofb`].
    ///
    /// # Errors
    ///
    /// [`CryptoError::InvalidParameter`] or [`CryptoError::AuthenticationFailure`].
    pub fn decrypt_ofb(
        self,
        ciphertext: &[u8],
        key: &[u8],
        iv: &[u8],
        tag: &[u8],
        ad: Option<&[u8]>,
    ) -> Result<Vec<u8>, CryptoError> {
        dispatch!(self, s => s.decrypt_ofb(ciphertext, key, iv, tag, ad))
    }

    /// See [`Aead::encrypt_ofb_observed`].
    ///
    /// # Errors
    ///
    /// As [`Algorithm::encrypt_ofb`].
    pub fn encrypt_ofb_observed(
        self,
        plaintext: &[u8],
        key: &[u8],
        iv: &[u8],
        ad: Option<&[u8]>,
        observer: &mut dyn KeystreamObserver,
    ) -> Result<AuthenticatedData, CryptoError> {
        dispatch!(self, s => s.encrypt_ofb_observed(plaintext, key, iv, ad, observer))
    }

    /// See [`Aead::decrypt_ofb_observed`].
    ///
    /// # Errors
    ///
    /// As [`Algorithm::decrypt_ofb`].
    pub fn decrypt_ofb_observed(
        self,
        ciphertext: &[u8],
        key: &[u8],
        iv: &[u8],
        tag: &[u8],
        ad: Option<&[u8]>,
        observer: &mut dyn KeystreamObserver,
    ) -> Result<Vec<u8>, CryptoError> {
        dispatch!(self, s => s.decrypt_ofb_observed(ciphertext, key, iv, tag, ad, observer))
    }

    /// Encrypt in the given mode. `nonce` doubles as the IV for chained modes.
    ///
    /// # Errors
    ///
    /// As the mode-specific method.
    pub fn seal(
        self,
        mode: Mode,
        plaintext: &[u8],
        key: &[u8],
        nonce: &[u8],
        ad: Option<&[u8]>,
    ) -> Result<AuthenticatedData, CryptoError> {
        match mode {
            Mode::Direct => self.encrypt(plaintext, key, nonce, ad),
            Mode::Cbc => self.encrypt_cbc(plaintext, key, nonce, ad),
            Mode::Ofb => self.encrypt_ofb(plaintext, key, nonce, ad),
        }
    }

    /// Decrypt in the given mode.
    ///
    /// # Errors
    ///
    /// As the mode-specific method.
    pub fn open(
        self,
        mode: Mode,
        ciphertext: &[u8],
        key: &[u8],
        nonce: &[u8],
        tag: &[u8],
        ad: Option<&[u8]>,
    ) -> Result<Vec<u8>, CryptoError> {
        match mode {
            Mode::Direct => self.decrypt(ciphertext, key, nonce, tag, ad),
            Mode::Cbc => self.decrypt_cbc(ciphertext, key, nonce, tag, ad),
            Mode::Ofb => self.decrypt_ofb(ciphertext, key, nonce, tag, ad),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "elephant" => Ok(Self::Elephant),
            "isap" => Ok(Self::Isap),
            _ => Err(CryptoError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl Mode {
    /// All modes.
    pub const ALL: [Self; 3] = [Self::Direct, Self::Cbc, Self::Ofb];

    /// Canonical identifier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Cbc => "cbc",
            Self::Ofb => "ofb",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" | "none" => Ok(Self::Direct),
            "cbc" => Ok(Self::Cbc),
            "ofb" => Ok(Self::Ofb),
            _ => Err(CryptoError::UnknownMode(s.to_string())),
        }
    }
}
