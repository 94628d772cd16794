//! NIST SP 800-38A — CBC-AES Known-Answer Test vectors.
//!
//! The provider always applies PKCS#7 padding, so a four-block plaintext
//! yields the four NIST ciphertext blocks followed by one padding block.

use super::hex;
use slug_hasher::{AesCbcProvider, CipherAlgorithm, CipherProvider, BLOCK_LEN, IV_LEN};

const IV: &str = "000102030405060708090a0b0c0d0e0f";

fn iv() -> [u8; IV_LEN] {
    hex(IV).try_into().expect("16-byte IV")
}

/// F.2.1 CBC-AES128.Encrypt
#[test]
fn nist_f_2_1_cbc_aes128() {
    let key = hex("2b7e151628aed2a6abf7158809cf4f3c");
    let plaintext = hex(concat!(
        "6bc1bee22e409f96e93d7e117393172a",
        "ae2d8a571e03ac9c9eb76fac45af8e51",
        "30c81c46a35ce411e5fbc1191a0a52ef",
        "f69f2445df4f9b17ad2b417be66c3710",
    ));
    let expected = hex(concat!(
        "7649abac8119b246cee98e9b12e9197d",
        "5086cb9b507219ee95db113a917678b2",
        "73bed6b8e3c1743b7116e69e22229516",
        "3ff1caa1681fac09120eca307586e1a7",
    ));

    let provider = AesCbcProvider::new(&key).expect("key should be valid");
    let framed = provider
        .encrypt_with_iv(&plaintext, &iv())
        .expect("encrypt should succeed");

    assert_eq!(&framed[..IV_LEN], hex(IV).as_slice(), "IV is prepended");
    let ciphertext = &framed[IV_LEN..];
    assert_eq!(ciphertext.len(), expected.len() + BLOCK_LEN);
    assert_eq!(&ciphertext[..expected.len()], expected.as_slice());

    let decrypted = provider.decrypt(&framed).expect("decrypt should succeed");
    assert_eq!(decrypted.expose(), plaintext.as_slice());
}

/// F.2.5 CBC-AES256.Encrypt, first two blocks.
#[test]
fn nist_f_2_5_cbc_aes256() {
    let key = hex("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4");
    let plaintext = hex(concat!(
        "6bc1bee22e409f96e93d7e117393172a",
        "ae2d8a571e03ac9c9eb76fac45af8e51",
    ));
    let expected = hex(concat!(
        "f58c4c04d6e5f1ba779eabfb5f7bfbd6",
        "9cfc4e967edb808d679f777bc6702c7d",
    ));

    let provider = AesCbcProvider::with_algorithm(CipherAlgorithm::Aes256Cbc, &key)
        .expect("key should be valid");
    let framed = provider
        .encrypt_with_iv(&plaintext, &iv())
        .expect("encrypt should succeed");
    assert_eq!(&framed[IV_LEN..IV_LEN + expected.len()], expected.as_slice());

    let decrypted = provider.decrypt(&framed).expect("decrypt should succeed");
    assert_eq!(decrypted.expose(), plaintext.as_slice());
}

/// PKCS#7 on a short plaintext: the padding block decrypts back exactly.
#[test]
fn short_plaintext_pads_to_one_block() {
    let provider = AesCbcProvider::new(&hex("2b7e151628aed2a6abf7158809cf4f3c"))
        .expect("key should be valid");
    let framed = provider
        .encrypt_with_iv(b"abc", &iv())
        .expect("encrypt should succeed");
    assert_eq!(framed.len(), IV_LEN + BLOCK_LEN);
    assert_eq!(provider.decrypt(&framed).expect("decrypt").expose(), b"abc");
}
