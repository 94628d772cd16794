//! Symmetric transform capability: AES in CBC mode with PKCS#7 padding.
//!
//! This module provides:
//! - [`CipherProvider`] — the capability the token codec consumes
//! - [`CipherAlgorithm`] — the selectable AES key sizes
//! - [`AesCbcProvider`] — the default provider, backed by `aes` + `cbc`
//!
//! # Output Layout
//!
//! ```text
//! IV (16 bytes) || ciphertext (multiple of 16 bytes)
//! ```
//!
//! A fresh IV is drawn from `OsRng` on every call and a new block-mode
//! instance is built per call, so one provider can be shared across threads.

use crate::error::CryptoError;
use crate::memory::SecretBuffer;
use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// AES block length in bytes.
pub const BLOCK_LEN: usize = 16;

/// CBC initialization vector length in bytes (one block).
pub const IV_LEN: usize = BLOCK_LEN;

// ---------------------------------------------------------------------------
// Capability
// ---------------------------------------------------------------------------

/// Keyed symmetric transform with a random IV per encryption.
///
/// The key is fixed at construction. Implementations must be reentrant:
/// concurrent calls on one instance must not share IV or transform state.
pub trait CipherProvider: Send + Sync {
    /// Length of the IV prepended to every ciphertext.
    fn iv_len(&self) -> usize;

    /// Encrypt `plaintext` under a fresh random IV, returning `IV || ciphertext`.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidArgument`] if `plaintext` is empty.
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError>;

    /// Split the IV off `framed` and decrypt the remainder.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidArgument`] if `framed` is empty, and
    /// [`CryptoError::DecryptionFailure`] on a short input, a misaligned
    /// ciphertext, or invalid padding.
    fn decrypt(&self, framed: &[u8]) -> Result<SecretBuffer, CryptoError>;
}

// ---------------------------------------------------------------------------
// AES-CBC
// ---------------------------------------------------------------------------

/// AES key size, always in CBC mode with PKCS#7 padding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CipherAlgorithm {
    /// AES-128-CBC, 16-byte key.
    #[default]
    #[serde(rename = "aes-128-cbc")]
    Aes128Cbc,
    /// AES-192-CBC, 24-byte key.
    #[serde(rename = "aes-192-cbc")]
    Aes192Cbc,
    /// AES-256-CBC, 32-byte key.
    #[serde(rename = "aes-256-cbc")]
    Aes256Cbc,
}

impl CipherAlgorithm {
    /// Key length in bytes required by this algorithm.
    #[must_use]
    pub const fn key_len(self) -> usize {
        match self {
            Self::Aes128Cbc => 16,
            Self::Aes192Cbc => 24,
            Self::Aes256Cbc => 32,
        }
    }
}

/// AES-CBC provider holding a fixed key.
#[derive(Clone, Debug)]
pub struct AesCbcProvider {
    algorithm: CipherAlgorithm,
    key: SecretBuffer,
}

impl AesCbcProvider {
    /// Create a provider for the default algorithm (AES-128-CBC).
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidKeySize`] if `key` is not 16 bytes.
    pub fn new(key: &[u8]) -> Result<Self, CryptoError> {
        Self::with_algorithm(CipherAlgorithm::default(), key)
    }

    /// Create a provider for an explicit AES key size.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidKeySize`] if `key` does not match
    /// [`CipherAlgorithm::key_len`].
    pub fn with_algorithm(algorithm: CipherAlgorithm, key: &[u8]) -> Result<Self, CryptoError> {
        if key.len() != algorithm.key_len() {
            return Err(CryptoError::InvalidKeySize {
                expected: algorithm.key_len(),
                actual: key.len(),
            });
        }
        Ok(Self {
            algorithm,
            key: SecretBuffer::new(key),
        })
    }

    /// The configured algorithm.
    #[must_use]
    pub const fn algorithm(&self) -> CipherAlgorithm {
        self.algorithm
    }

    /// Encrypt with a caller-chosen IV. Used for known-answer tests; never
    /// reuse an IV under the same key in production.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidArgument`] if `plaintext` is empty.
    pub fn encrypt_with_iv(
        &self,
        plaintext: &[u8],
        iv: &[u8; IV_LEN],
    ) -> Result<Vec<u8>, CryptoError> {
        if plaintext.is_empty() {
            return Err(CryptoError::InvalidArgument("plaintext"));
        }
        let key = self.key.expose();
        let ciphertext = match self.algorithm {
            CipherAlgorithm::Aes128Cbc => seal::<cbc::Encryptor<aes::Aes128>>(key, iv, plaintext),
            CipherAlgorithm::Aes192Cbc => seal::<cbc::Encryptor<aes::Aes192>>(key, iv, plaintext),
            CipherAlgorithm::Aes256Cbc => seal::<cbc::Encryptor<aes::Aes256>>(key, iv, plaintext),
        }?;
        let mut out = Vec::with_capacity(IV_LEN.saturating_add(ciphertext.len()));
        out.extend_from_slice(iv);
        out.extend_from_slice(&ciphertext);
        Ok(out)
    }
}

impl CipherProvider for AesCbcProvider {
    fn iv_len(&self) -> usize {
        IV_LEN
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if plaintext.is_empty() {
            return Err(CryptoError::InvalidArgument("plaintext"));
        }
        let mut iv = [0u8; IV_LEN];
        OsRng
            .try_fill_bytes(&mut iv)
            .map_err(|_| CryptoError::EncryptionFailure)?;
        self.encrypt_with_iv(plaintext, &iv)
    }

    fn decrypt(&self, framed: &[u8]) -> Result<SecretBuffer, CryptoError> {
        if framed.is_empty() {
            return Err(CryptoError::InvalidArgument("ciphertext"));
        }
        if framed.len() < IV_LEN {
            return Err(CryptoError::DecryptionFailure);
        }
        let (iv, body) = framed.split_at(IV_LEN);
        if body.is_empty() || body.len().checked_rem(BLOCK_LEN) != Some(0) {
            return Err(CryptoError::DecryptionFailure);
        }
        let key = self.key.expose();
        let plaintext = match self.algorithm {
            CipherAlgorithm::Aes128Cbc => open::<cbc::Decryptor<aes::Aes128>>(key, iv, body),
            CipherAlgorithm::Aes192Cbc => open::<cbc::Decryptor<aes::Aes192>>(key, iv, body),
            CipherAlgorithm::Aes256Cbc => open::<cbc::Decryptor<aes::Aes256>>(key, iv, body),
        }?;
        Ok(SecretBuffer::from_vec(plaintext))
    }
}

fn seal<E>(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError>
where
    E: KeyIvInit + BlockEncryptMut,
{
    let encryptor = E::new_from_slices(key, iv).map_err(|_| CryptoError::EncryptionFailure)?;
    Ok(encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

fn open<D>(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError>
where
    D: KeyIvInit + BlockDecryptMut,
{
    let decryptor = D::new_from_slices(key, iv).map_err(|_| CryptoError::DecryptionFailure)?;
    decryptor
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CryptoError::DecryptionFailure)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
