//! Passphrase-to-key derivation.
//!
//! The key is the UTF-8 encoding of the first `key_len` characters of the
//! passphrase, where `key_len` is the cipher key length (16 for the default
//! AES-128-CBC). There is no stretching and no salt.
//!
//! # Short Passphrases
//!
//! A passphrase whose prefix does not encode to exactly `key_len` bytes is
//! rejected with [`CryptoError::InvalidKeySize`]. This covers passphrases
//! with fewer than `key_len` characters and prefixes containing multi-byte
//! characters. A shorter or longer key is never used silently.

use crate::error::CryptoError;
use crate::memory::SecretBuffer;

/// Number of passphrase characters used by the default cipher.
pub const DEFAULT_KEY_CHARS: usize = 16;

/// Derive a `key_len`-byte key from `passphrase`.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidKeySize`] if the UTF-8 encoding of the first
/// `key_len` characters is not exactly `key_len` bytes long.
pub fn derive_key(passphrase: &str, key_len: usize) -> Result<SecretBuffer, CryptoError> {
    let prefix_end = passphrase
        .char_indices()
        .nth(key_len)
        .map_or(passphrase.len(), |(idx, _)| idx);
    let prefix = &passphrase[..prefix_end];
    if prefix.len() != key_len {
        return Err(CryptoError::InvalidKeySize {
            expected: key_len,
            actual: prefix.len(),
        });
    }
    Ok(SecretBuffer::new(prefix.as_bytes()))
}
