//! Token codec: sign-then-verify orchestration around the two providers.
//!
//! This module provides:
//! - [`TokenCodec::encrypt`] — text to base64 token
//! - [`TokenCodec::decrypt`] — base64 token back to text, verifying the tag first
//!
//! # Pipeline
//!
//! ```text
//! encrypt: text -> UTF-16LE -> cipher.encrypt -> IV||ct
//!          tag = digest(key || IV||ct)
//!          base64(len(tag) || tag || IV||ct)
//!
//! decrypt: base64 -> len || tag || IV||ct
//!          compare(tag, digest(key || IV||ct)) in constant time
//!          cipher.decrypt(IV||ct) -> UTF-16LE -> text
//! ```
//!
//! # Limitations
//!
//! The tag is a plain digest over `key || data`, not HMAC. With
//! Merkle–Damgård digests (MD5, SHA-1, SHA-256, SHA-512) this construction is
//! open to length extension in principle and carries none of the proofs of a
//! standard MAC or AEAD mode. It is kept for token compatibility; new designs
//! should prefer an AEAD such as AES-GCM.
//!
//! # Error Collapsing
//!
//! Every encrypt-path failure surfaces as [`CryptoError::EncryptionFailure`].
//! Every decrypt-path failure surfaces as [`CryptoError::DecryptionFailure`],
//! except a tag mismatch, which is [`CryptoError::TamperedOrCorruptedInput`].
//! Padding errors are only reachable after the tag has verified, so the
//! distinction does not form a padding oracle.

use crate::bytes::{combine, compare_bytes};
use crate::cipher::{AesCbcProvider, CipherProvider};
use crate::config::CodecConfig;
use crate::digest::{DigestAlgorithm, DigestProvider};
use crate::error::CryptoError;
use crate::kdf::derive_key;
use crate::memory::SecretBuffer;
use crate::text::{decode_utf16le, encode_utf16le};
use crate::token::Token;
use zeroize::Zeroize;

/// Encrypts text into tamper-evident tokens and back.
///
/// The key is fixed at construction and never mutated, and both providers
/// build fresh transform state per call, so a codec can be shared across
/// threads behind an `Arc` without locking.
#[derive(Debug)]
pub struct TokenCodec<C = AesCbcProvider, D = DigestAlgorithm> {
    key: SecretBuffer,
    cipher: C,
    digest: D,
}

impl TokenCodec {
    /// Build a codec with the default algorithms (AES-128-CBC, SHA-256).
    ///
    /// The key is the first 16 characters of `passphrase`, UTF-8 encoded.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidKeySize`] if that prefix is not exactly
    /// 16 bytes (passphrase too short, or multi-byte characters in it).
    pub fn new(passphrase: &str) -> Result<Self, CryptoError> {
        Self::with_config(passphrase, &CodecConfig::default())
    }

    /// Build a codec with explicitly configured algorithms.
    ///
    /// The number of passphrase characters used equals the cipher key length.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidKeySize`] if the derived key does not fit
    /// the configured cipher.
    pub fn with_config(passphrase: &str, config: &CodecConfig) -> Result<Self, CryptoError> {
        let key = derive_key(passphrase, config.cipher.key_len())?;
        let cipher = AesCbcProvider::with_algorithm(config.cipher, key.expose())?;
        tracing::debug!(
            cipher = ?config.cipher,
            digest = ?config.digest,
            "token codec initialised"
        );
        Ok(Self {
            key,
            cipher,
            digest: config.digest,
        })
    }
}

impl<C: CipherProvider, D: DigestProvider> TokenCodec<C, D> {
    /// Assemble a codec from custom providers.
    ///
    /// `key` is the signing key mixed into every tag and must be the key
    /// `cipher` was built with.
    #[must_use]
    pub fn from_parts(key: &[u8], cipher: C, digest: D) -> Self {
        Self {
            key: SecretBuffer::new(key),
            cipher,
            digest,
        }
    }

    /// Encrypt `text` into a base64 token.
    ///
    /// Two calls with the same text yield different tokens.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::EncryptionFailure`] on any failure, including
    /// empty `text` (the cipher refuses empty plaintext).
    pub fn encrypt(&self, text: &str) -> Result<String, CryptoError> {
        self.seal(text).map_err(|cause| {
            tracing::debug!(%cause, "token encryption failed");
            CryptoError::EncryptionFailure
        })
    }

    /// Verify and decrypt a token produced by [`encrypt`](Self::encrypt).
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::TamperedOrCorruptedInput`] if the tag does not
    /// match, and [`CryptoError::DecryptionFailure`] for every other failure.
    pub fn decrypt(&self, token: &str) -> Result<String, CryptoError> {
        self.open(token).map_err(|cause| match cause {
            CryptoError::TamperedOrCorruptedInput => {
                tracing::debug!("token integrity check failed");
                cause
            }
            _ => {
                tracing::debug!(%cause, "token decryption failed");
                CryptoError::DecryptionFailure
            }
        })
    }

    fn seal(&self, text: &str) -> Result<String, CryptoError> {
        let mut plaintext = encode_utf16le(text);
        let sealed = self.cipher.encrypt(&plaintext);
        plaintext.zeroize();

        let payload = sealed?;
        let tag = self.sign(&payload);
        let encoded = Token { tag, payload }.encode()?;
        tracing::trace!(token_len = encoded.len(), "token encrypted");
        Ok(encoded)
    }

    fn open(&self, token: &str) -> Result<String, CryptoError> {
        let token = Token::decode(token)?;
        let expected = self.sign(&token.payload);
        if !compare_bytes(&token.tag, &expected) {
            return Err(CryptoError::TamperedOrCorruptedInput);
        }
        let plaintext = self.cipher.decrypt(&token.payload)?;
        let text = decode_utf16le(plaintext.expose())?;
        tracing::trace!(payload_len = token.payload.len(), "token decrypted");
        Ok(text)
    }

    fn sign(&self, payload: &[u8]) -> Vec<u8> {
        let mut signed = combine(self.key.expose(), payload);
        let tag = self.digest.digest(&signed);
        signed.zeroize();
        tag
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
