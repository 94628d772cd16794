//! Fixed-width text encoding for token plaintext.
//!
//! Plaintext is carried as UTF-16 little-endian code units, two bytes each,
//! while the key is UTF-8. Tokens stay readable by peers that expect this
//! asymmetry.

use crate::error::CryptoError;

/// Encode `text` as UTF-16LE bytes.
#[must_use]
pub fn encode_utf16le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

/// Decode UTF-16LE bytes back into a `String`.
///
/// # Errors
///
/// Returns [`CryptoError::DecryptionFailure`] if `bytes` has odd length or
/// contains an unpaired surrogate.
pub fn decode_utf16le(bytes: &[u8]) -> Result<String, CryptoError> {
    let chunks = bytes.chunks_exact(2);
    if !chunks.remainder().is_empty() {
        return Err(CryptoError::DecryptionFailure);
    }
    let units: Vec<u16> = chunks
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).map_err(|_| CryptoError::DecryptionFailure)
}
