//! Digest capability used to compute token integrity tags.
//!
//! The codec only needs "fixed-size digest of a buffer". [`DigestAlgorithm`]
//! covers the algorithms selectable through configuration: the SHA-2 family
//! and SHA-1 come from `ring::digest`, MD5 from the `md-5` crate. MD5 and
//! SHA-1 exist for interop with peers that still emit those tags.

use md5::{Digest as _, Md5};
use ring::digest;
use serde::{Deserialize, Serialize};

/// Deterministic, stateless fixed-size digest.
///
/// Implementations must be total: every input, including the empty buffer,
/// yields an output of exactly [`output_len`](Self::output_len) bytes.
pub trait DigestProvider: Send + Sync {
    /// Digest `buffer`.
    fn digest(&self, buffer: &[u8]) -> Vec<u8>;

    /// Length in bytes of every value returned by [`digest`](Self::digest).
    fn output_len(&self) -> usize;
}

/// Digest algorithms selectable by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigestAlgorithm {
    /// MD5, 16 bytes. Legacy interop only.
    Md5,
    /// SHA-1, 20 bytes. Legacy interop only.
    Sha1,
    /// SHA-256, 32 bytes.
    #[default]
    Sha256,
    /// SHA-384, 48 bytes.
    Sha384,
    /// SHA-512, 64 bytes.
    Sha512,
}

impl DigestAlgorithm {
    fn ring_algorithm(self) -> Option<&'static digest::Algorithm> {
        match self {
            Self::Md5 => None,
            Self::Sha1 => Some(&digest::SHA1_FOR_LEGACY_USE_ONLY),
            Self::Sha256 => Some(&digest::SHA256),
            Self::Sha384 => Some(&digest::SHA384),
            Self::Sha512 => Some(&digest::SHA512),
        }
    }
}

impl DigestProvider for DigestAlgorithm {
    fn digest(&self, buffer: &[u8]) -> Vec<u8> {
        match self.ring_algorithm() {
            Some(algorithm) => digest::digest(algorithm, buffer).as_ref().to_vec(),
            None => Md5::digest(buffer).to_vec(),
        }
    }

    fn output_len(&self) -> usize {
        match self.ring_algorithm() {
            Some(algorithm) => algorithm.output_len(),
            None => 16,
        }
    }
}
