//! Password-based AES-GCM through the public API and the base64 wire format.

use rand::rngs::StdRng;
use rand::SeedableRng;

use cryptolab_core::symmetric::{
    decrypt_password, encrypt_password, SymmetricEnvelope, DECRYPTION_FAILED_MESSAGE, TAG_LEN,
};
use cryptolab_core::{DecryptionResult, SymmetricKeySize};

const PASSWORD: &str = "correct horse battery staple";

fn generic_failure() -> DecryptionResult {
    DecryptionResult::Failure {
        message: DECRYPTION_FAILED_MESSAGE.to_string(),
    }
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5EED)
}

#[test]
fn roundtrip_every_key_size() {
    let mut rng = rng();
    for size in SymmetricKeySize::ALL {
        let sealed = encrypt_password(&mut rng, "Hello, World!", PASSWORD, size)
            .expect("encrypt should succeed");
        assert_eq!(sealed.algorithm, size.label());
        let opened = decrypt_password(&sealed.encrypted, PASSWORD, size);
        assert_eq!(opened.plaintext(), Some("Hello, World!"), "{size}");
    }
}

#[test]
fn roundtrip_max_size_unicode_payload() {
    let plaintext = "密".repeat(10_000);
    let sealed = encrypt_password(&mut rng(), &plaintext, PASSWORD, SymmetricKeySize::Aes256)
        .expect("encrypt should succeed");
    let envelope = SymmetricEnvelope::decode(&sealed.encrypted).expect("decode should succeed");
    assert_eq!(envelope.ciphertext.len(), plaintext.len() + TAG_LEN);
    let opened = decrypt_password(&sealed.encrypted, PASSWORD, SymmetricKeySize::Aes256);
    assert_eq!(opened.plaintext(), Some(plaintext.as_str()));
}

#[test]
fn same_input_never_repeats_ciphertext() {
    let mut rng = rng();
    let a = encrypt_password(&mut rng, "same", PASSWORD, SymmetricKeySize::Aes128)
        .expect("encrypt should succeed");
    let b = encrypt_password(&mut rng, "same", PASSWORD, SymmetricKeySize::Aes128)
        .expect("encrypt should succeed");
    assert_ne!(a.encrypted, b.encrypted);
}

#[test]
fn every_failure_is_the_same_generic_result() {
    let sealed = encrypt_password(&mut rng(), "secret", PASSWORD, SymmetricKeySize::Aes256)
        .expect("encrypt should succeed");

    let mut flipped = SymmetricEnvelope::decode(&sealed.encrypted).expect("decode");
    flipped.ciphertext[0] ^= 0x01;
    let mut salt_flipped = SymmetricEnvelope::decode(&sealed.encrypted).expect("decode");
    salt_flipped.salt[0] ^= 0x01;
    let mut nonce_flipped = SymmetricEnvelope::decode(&sealed.encrypted).expect("decode");
    nonce_flipped.nonce[11] ^= 0x80;

    let cases = [
        decrypt_password(&sealed.encrypted, "wrong password", SymmetricKeySize::Aes256),
        decrypt_password(&sealed.encrypted, PASSWORD, SymmetricKeySize::Aes192),
        decrypt_password(&flipped.encode(), PASSWORD, SymmetricKeySize::Aes256),
        decrypt_password(&salt_flipped.encode(), PASSWORD, SymmetricKeySize::Aes256),
        decrypt_password(&nonce_flipped.encode(), PASSWORD, SymmetricKeySize::Aes256),
        decrypt_password("not base64 at all!", PASSWORD, SymmetricKeySize::Aes256),
        decrypt_password("AAAA", PASSWORD, SymmetricKeySize::Aes256),
    ];
    for result in cases {
        assert_eq!(result, generic_failure());
    }
}

#[test]
fn result_serializes_with_status_tag() {
    let sealed = encrypt_password(&mut rng(), "json", PASSWORD, SymmetricKeySize::Aes128)
        .expect("encrypt should succeed");
    let opened = decrypt_password(&sealed.encrypted, PASSWORD, SymmetricKeySize::Aes128);
    let json = serde_json::to_value(&opened).expect("serialize should succeed");
    assert_eq!(json["status"], "success");
    assert_eq!(json["plaintext"], "json");

    let failed = decrypt_password(&sealed.encrypted, "nope", SymmetricKeySize::Aes128);
    let json = serde_json::to_value(&failed).expect("serialize should succeed");
    assert_eq!(json["status"], "failure");
    assert_eq!(json["message"], DECRYPTION_FAILED_MESSAGE);
}
