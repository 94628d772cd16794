//! Token framing: length-prefixed integrity tag followed by `IV || ciphertext`.
//!
//! # Wire Layout
//!
//! ```text
//! Tag Len (1 B) | Tag (Tag Len B) | IV || Ciphertext
//! ```
//!
//! The framed bytes are carried as standard, padded base64. Parsing here is
//! purely structural; the codec verifies the tag.

use crate::bytes::combine;
use crate::error::CryptoError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// A parsed token.
#[must_use = "a token must be encoded or verified"]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Integrity tag over `key || payload`.
    pub tag: Vec<u8>,
    /// `IV || ciphertext` as produced by the cipher provider.
    pub payload: Vec<u8>,
}

impl Token {
    /// Serialize to `tag_len || tag || payload`.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::EncryptionFailure`] if the tag is longer than
    /// 255 bytes and cannot be described by the prefix byte.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CryptoError> {
        let tag_len = u8::try_from(self.tag.len()).map_err(|_| CryptoError::EncryptionFailure)?;
        Ok(combine(&[tag_len], &combine(&self.tag, &self.payload)))
    }

    /// Parse `tag_len || tag || payload`.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::DecryptionFailure`] if the input is empty or the
    /// declared tag length runs past the end of the input.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let (&tag_len, rest) = bytes.split_first().ok_or(CryptoError::DecryptionFailure)?;
        let tag_len = usize::from(tag_len);
        if tag_len > rest.len() {
            return Err(CryptoError::DecryptionFailure);
        }
        let (tag, payload) = rest.split_at(tag_len);
        Ok(Self {
            tag: tag.to_vec(),
            payload: payload.to_vec(),
        })
    }

    /// Serialize and base64-encode.
    ///
    /// # Errors
    ///
    /// See [`Token::to_bytes`].
    pub fn encode(&self) -> Result<String, CryptoError> {
        self.to_bytes().map(|bytes| STANDARD.encode(bytes))
    }

    /// Base64-decode and parse.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::DecryptionFailure`] on malformed base64 or a
    /// malformed frame.
    pub fn decode(token: &str) -> Result<Self, CryptoError> {
        let bytes = STANDARD
            .decode(token)
            .map_err(|_| CryptoError::DecryptionFailure)?;
        Self::from_bytes(&bytes)
    }
}
