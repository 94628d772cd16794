//! Error types for `slug-hasher`.

use thiserror::Error;

/// Errors produced by key derivation, the providers, and the token codec.
///
/// The token codec collapses every primitive failure into one of the coarse
/// variants below. The underlying cause is logged at `debug` level and never
/// carried in the returned value, so callers cannot tell a bad padding from a
/// bad base64 alphabet.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Key length does not match what the configured cipher requires.
    #[error("invalid key size: {actual} bytes (expected {expected})")]
    InvalidKeySize {
        /// Length required by the cipher.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// A required buffer was empty.
    #[error("invalid argument: {0} must not be empty")]
    InvalidArgument(&'static str),

    /// Any failure on the encrypt path.
    #[error("encrypt method failed")]
    EncryptionFailure,

    /// Any failure on the decrypt path other than a tag mismatch.
    #[error("decrypt method failed")]
    DecryptionFailure,

    /// The integrity tag did not match the recomputed digest.
    #[error("input value was improperly signed or tampered with")]
    TamperedOrCorruptedInput,

    /// Codec configuration could not be parsed.
    #[error("invalid codec configuration: {0}")]
    InvalidConfig(String),
}
