//! Codec configuration: which cipher and digest back a [`TokenCodec`].
//!
//! ```json
//! { "cipher": "aes-128-cbc", "digest": "sha256" }
//! ```
//!
//! Both fields are optional and fall back to the defaults.
//!
//! [`TokenCodec`]: crate::codec::TokenCodec

use crate::cipher::CipherAlgorithm;
use crate::digest::DigestAlgorithm;
use crate::error::CryptoError;
use serde::{Deserialize, Serialize};

/// Algorithm selection for a token codec.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    /// Symmetric transform. Also fixes the key length.
    pub cipher: CipherAlgorithm,
    /// Integrity tag digest.
    pub digest: DigestAlgorithm,
}

impl CodecConfig {
    /// Parse a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidConfig`] on malformed JSON, unknown
    /// fields, or unknown algorithm names.
    pub fn from_json(json: &str) -> Result<Self, CryptoError> {
        serde_json::from_str(json).map_err(|e| CryptoError::InvalidConfig(e.to_string()))
    }

    /// Serialize this configuration to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidConfig`] if serialization fails.
    pub fn to_json(&self) -> Result<String, CryptoError> {
        serde_json::to_string(self).map_err(|e| CryptoError::InvalidConfig(e.to_string()))
    }
}
