//! RSA interoperability vectors.
//!
//! The key pair, PSS signature and OAEP ciphertext below were produced by
//! OpenSSL (via Python `cryptography`): RSA-2048, e = 65537, PSS with
//! MGF1-SHA256 and a 32-byte salt, OAEP with SHA-256 and no label. The PEM
//! fixtures wrap at 64 columns, unlike the single-line export format.

use cryptolab_core::asymmetric::{
    decrypt_with_private_key, export_public_key, import_private_key, import_public_key, KeyUsage,
};
use cryptolab_core::signing::{verify_signature, verify_signature_pem};

const PUBLIC_PEM: &str = include_str!("../fixtures/rsa2048_public.pem");
const PRIVATE_PEM: &str = include_str!("../fixtures/rsa2048_private.pem");

const SIGNED_MESSAGE: &str = "CryptoLab signed message";
const PSS_SIGNATURE: &str = "HbUWDh1m/abmYO3W1CeBdFguzs3GZgtTzTVTKHLs0ZZUZmmVRIGVKH985KGMHT89nE4T3LY/sSNJ3jMcVvxIhpXK/TwTLJjcYoBJHEcWVf4VQGpctnk3RQLFeHs/xcRJK3I9w/NSxp0tO8B+eU3C82BTD45eLRShZz4LAfsZdPny7pRs1Vjhp4cCfROR4RkUAy3PoHmS9UAoSSlFUpdjUxfObda0O40ACONRgbIwefoGLfyFV79OAjcyS16tyLg62FnUKL7Tk/bW7f3IxlmUuJQCqJPKponlAnaKn00Rtb7Qv2k7rbLJhwF33mwjYsHWO5LW/YtsLT2dJPPFJ2wTdw==";

const OAEP_PLAINTEXT: &str = "CryptoLab OAEP vector";
const OAEP_CIPHERTEXT: &str = "T4JiYQ7kwemHyXl/K9B4CcMpUkcLSg/lvkE36KYeIzVi8tEngxeRCHqNOnnYChCBRmqHvtKx99q62WOLsyFiCJ4Uq7DHjjxdPY5PkbN90Scl8XxwBiRmG6BqHB7u6vf+0xHMjPKSGZKSJUYfAt945Wwy+SJ5jr8ryD7GkLVzyRko4OOWID6UrO1fOaVUBhjWR7s5EOBLp4en70RIpu7H3NN2wgqjTi+2J++0pNeZaS2vSGqGkRbPQbDfyMI36u2pkEzq1NpOQiAcuBOKkep36Cj8q69U7XzzteH7RyACLpagcNK47rraCIFwBhc6BG3TxaZ9K/AV4uGZB0rHOm4ITg==";

#[test]
fn openssl_pss_signature_verifies() {
    assert!(verify_signature_pem(SIGNED_MESSAGE, PSS_SIGNATURE, PUBLIC_PEM));
    assert!(!verify_signature_pem("CryptoLab signed message!", PSS_SIGNATURE, PUBLIC_PEM));
}

#[test]
fn openssl_oaep_ciphertext_decrypts() {
    let result = decrypt_with_private_key(OAEP_CIPHERTEXT, PRIVATE_PEM);
    assert_eq!(result.plaintext(), Some(OAEP_PLAINTEXT));
}

#[test]
fn wrapped_fixture_reexports_as_single_line() {
    let handle = import_public_key(PUBLIC_PEM, KeyUsage::Signing).expect("import");
    assert_eq!(handle.modulus_bits(), 2048);
    let exported = export_public_key(&handle).expect("export");
    assert_eq!(exported.lines().count(), 3);

    let body: String = PUBLIC_PEM
        .lines()
        .filter(|line| !line.starts_with("-----"))
        .collect();
    assert_eq!(exported.lines().nth(1), Some(body.as_str()));
    assert!(verify_signature(SIGNED_MESSAGE, PSS_SIGNATURE, &handle));
}

#[test]
fn private_fixture_matches_public_fixture() {
    let private = import_private_key(PRIVATE_PEM, KeyUsage::Signing).expect("import");
    let derived = export_public_key(&private.public_handle()).expect("export");
    let imported = import_public_key(PUBLIC_PEM, KeyUsage::Signing).expect("import");
    assert_eq!(derived, export_public_key(&imported).expect("export"));
}
