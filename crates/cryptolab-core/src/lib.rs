//! `cryptolab-core`: cryptographic operations core for CryptoLab.
//!
//! Password-based AES-GCM, RSA-OAEP encryption, RSA-PSS signatures, digests
//! and PBKDF2 stretching, exposed as one-shot functions returning immutable
//! results. Zero network, zero async, no global state: randomness is always
//! passed in by the caller.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod catalog;
pub mod config;
pub mod encoding;
pub mod results;
pub mod validation;

pub mod digest;
pub mod symmetric;

pub mod asymmetric;
pub mod signing;

pub mod lab;

pub use asymmetric::{
    decrypt_with_private_key, encrypt_with_public_key, export_private_key, export_public_key,
    generate_encryption_key_pair, generate_signing_key_pair, import_private_key,
    import_public_key, KeyUsage, PrivateKeyHandle, PublicKeyHandle, RsaKeyPair,
};
pub use catalog::{
    find_algorithm, AlgorithmKind, CryptoAlgorithm, HashAlgorithm, HashAlgorithmInfo, RsaModulus,
    SymmetricKeySize, CRYPTO_ALGORITHMS, HASH_ALGORITHMS,
};
pub use config::CryptoConfig;
pub use digest::{compare_digests, compute_digest, derive_stretched_key, generate_salt};
pub use error::{CryptoError, InputKind};
pub use lab::CryptoLab;
pub use results::{DecryptionResult, EncryptionResult, HashResult, SignatureResult};
pub use signing::{sign_and_bundle, sign_message, verify_signature, verify_signature_pem};
pub use symmetric::{decrypt_password, encrypt_password, SymmetricEnvelope};
pub use validation::{
    sanitize_input, score_key_strength, validate_input, KeyStrengthScore, StrengthLevel,
};
