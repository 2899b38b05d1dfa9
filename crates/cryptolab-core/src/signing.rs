//! RSA-PSS signatures (SHA-256, 32-byte salt).
//!
//! This module provides:
//! - [`sign_message`]: sign the UTF-8 bytes of a message, base64 output
//! - [`verify_signature`]: fail-closed verification against a key handle
//! - [`verify_signature_pem`]: same, against a pasted SPKI PEM
//! - [`sign_and_bundle`]: sign and package both exported keys into a
//!   [`SignatureResult`] for display
//!
//! Verification never returns an error. Malformed base64, a signature of the
//! wrong length, a non-matching key and a tampered message are all `false`.

use rand::{CryptoRng, RngCore};
use rsa::Pss;
use sha2::{Digest, Sha256};

use crate::asymmetric::{
    export_private_key, export_public_key, import_public_key, KeyUsage, PrivateKeyHandle,
    PublicKeyHandle, RsaKeyPair,
};
use crate::encoding::{decode_base64, encode_base64};
use crate::error::CryptoError;
use crate::results::SignatureResult;

/// PSS salt length in bytes (equal to the SHA-256 output length).
pub const PSS_SALT_LEN: usize = 32;

fn pss() -> Pss {
    Pss::new_with_salt::<Sha256>(PSS_SALT_LEN)
}

/// Sign `message` with a signing-bound private key.
///
/// The RNG supplies both the PSS salt and RSA blinding.
///
/// # Errors
///
/// - [`CryptoError::KeyUsageMismatch`] for an encryption key
/// - [`CryptoError::Signature`] if the RSA operation fails
pub fn sign_message<R: RngCore + CryptoRng>(
    rng: &mut R,
    message: &str,
    private_key: &PrivateKeyHandle,
) -> Result<String, CryptoError> {
    let key = private_key.require(KeyUsage::Signing)?;
    let hashed = Sha256::digest(message.as_bytes());
    let signature = key
        .sign_with_rng(rng, pss(), &hashed)
        .map_err(|e| CryptoError::Signature(format!("RSA-PSS signing failed: {e}")))?;
    tracing::debug!(message_len = message.len(), "RSA-PSS signed");
    Ok(encode_base64(&signature))
}

/// Verify a base64 signature over `message`.
///
/// Fails closed: any error is reported as `false`, including an
/// encryption-bound key.
#[must_use]
pub fn verify_signature(message: &str, signature_b64: &str, public_key: &PublicKeyHandle) -> bool {
    let Ok(key) = public_key.require(KeyUsage::Signing) else {
        return false;
    };
    let Ok(signature) = decode_base64(signature_b64) else {
        return false;
    };
    let hashed = Sha256::digest(message.as_bytes());
    let verified = key.verify(pss(), &hashed, &signature).is_ok();
    tracing::debug!(verified, "RSA-PSS verification");
    verified
}

/// Verify against a public key given as SPKI PEM. A malformed PEM is `false`.
#[must_use]
pub fn verify_signature_pem(message: &str, signature_b64: &str, public_key_pem: &str) -> bool {
    import_public_key(public_key_pem, KeyUsage::Signing)
        .is_ok_and(|handle| verify_signature(message, signature_b64, &handle))
}

/// Sign `message` and bundle the signature with both exported keys.
///
/// # Errors
///
/// Propagates signing and export errors.
pub fn sign_and_bundle<R: RngCore + CryptoRng>(
    rng: &mut R,
    message: &str,
    key_pair: &RsaKeyPair,
) -> Result<SignatureResult, CryptoError> {
    let signature = sign_message(rng, message, &key_pair.private)?;
    Ok(SignatureResult {
        signature,
        public_key: export_public_key(&key_pair.public)?,
        private_key: export_private_key(&key_pair.private)?,
        message: message.to_string(),
        verified: None,
    })
}
