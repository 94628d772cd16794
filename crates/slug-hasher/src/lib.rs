//! `slug-hasher` — passphrase-keyed, tamper-evident text tokens.
//!
//! A [`TokenCodec`] turns text into a base64 token carrying a digest tag and
//! an AES-CBC ciphertext, and rejects tokens whose tag does not verify. The
//! block cipher and the digest are reached through the [`CipherProvider`] and
//! [`DigestProvider`] traits so either can be swapped without touching the
//! framing.
//!
//! No I/O, no async, no global state.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod memory;

pub mod bytes;
pub mod text;

pub mod cipher;
pub mod digest;
pub mod kdf;

pub mod config;
pub mod token;

pub mod codec;

pub use bytes::{combine, compare_bytes};
pub use cipher::{AesCbcProvider, CipherAlgorithm, CipherProvider, BLOCK_LEN, IV_LEN};
pub use codec::TokenCodec;
pub use config::CodecConfig;
pub use digest::{DigestAlgorithm, DigestProvider};
pub use error::CryptoError;
pub use kdf::{derive_key, DEFAULT_KEY_CHARS};
pub use memory::SecretBuffer;
pub use token::Token;
