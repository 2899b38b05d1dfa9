//! Digest engine: hashing, constant-time comparison, salts, PBKDF2 stretching.
//!
//! This module provides:
//! - [`compute_digest`]: SHA-1 / SHA-256 / SHA-512 / MD5, lowercase hex
//! - [`compare_digests`]: fixed-time comparison of two digest strings
//! - [`generate_salt`]: random salt, hex-encoded
//! - [`derive_stretched_key`]: PBKDF2-HMAC-SHA256 for password storage
//! - [`generate_random_key_hex`]: random AES key material, hex-encoded
//!
//! SHA-* and PBKDF2 come from `ring`; MD5 from `md-5` since `ring` has none.

use std::num::NonZeroU32;

use chrono::Utc;
use data_encoding::HEXLOWER;
use md5::{Digest, Md5};
use rand::{CryptoRng, RngCore};
use ring::{digest, pbkdf2};
use zeroize::Zeroizing;

use crate::catalog::{HashAlgorithm, SymmetricKeySize};
use crate::error::CryptoError;
use crate::results::HashResult;

/// PBKDF2 output length in bytes (256 bits).
pub const STRETCHED_KEY_LEN: usize = 32;

/// Default salt length for [`generate_salt`] callers.
pub const DEFAULT_SALT_LEN: usize = 16;

/// Largest salt [`generate_salt`] will produce, in bytes.
pub const MAX_SALT_LEN: usize = 1_024;

/// Default PBKDF2 iteration count.
pub const DEFAULT_STRETCH_ITERATIONS: u32 = 100_000;

// ---------------------------------------------------------------------------
// Digests
// ---------------------------------------------------------------------------

/// Raw digest bytes of `data`.
#[must_use]
pub fn digest_bytes(data: &[u8], algorithm: HashAlgorithm) -> Vec<u8> {
    match algorithm {
        HashAlgorithm::Sha1 => ring_digest(&digest::SHA1_FOR_LEGACY_USE_ONLY, data),
        HashAlgorithm::Sha256 => ring_digest(&digest::SHA256, data),
        HashAlgorithm::Sha512 => ring_digest(&digest::SHA512, data),
        HashAlgorithm::Md5 => Md5::digest(data).to_vec(),
    }
}

fn ring_digest(algorithm: &'static digest::Algorithm, data: &[u8]) -> Vec<u8> {
    digest::digest(algorithm, data).as_ref().to_vec()
}

/// Hash the UTF-8 bytes of `input` and hex-encode the digest.
pub fn compute_digest(input: &str, algorithm: HashAlgorithm) -> HashResult {
    let hash = HEXLOWER.encode(&digest_bytes(input.as_bytes(), algorithm));
    tracing::debug!(algorithm = %algorithm, input_len = input.len(), "computed digest");
    HashResult {
        hash,
        algorithm: algorithm.id().to_string(),
        input: input.to_string(),
        timestamp: Utc::now(),
    }
}

/// Compare two digest strings without short-circuiting on content.
///
/// Returns `false` immediately on length mismatch; digest length is public.
/// Otherwise every byte is visited and differences are OR-accumulated.
#[must_use]
pub fn compare_digests(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    std::hint::black_box(diff) == 0
}

// ---------------------------------------------------------------------------
// Salts and key material
// ---------------------------------------------------------------------------

/// Fill `byte_len` bytes from `rng` and hex-encode them.
///
/// # Errors
///
/// Returns [`CryptoError::KeyDerivation`] if `byte_len` is zero or above
/// [`MAX_SALT_LEN`], or if the RNG fails.
pub fn generate_salt<R: RngCore + CryptoRng>(
    rng: &mut R,
    byte_len: usize,
) -> Result<String, CryptoError> {
    if byte_len == 0 || byte_len > MAX_SALT_LEN {
        return Err(CryptoError::KeyDerivation(format!(
            "salt length must be between 1 and {MAX_SALT_LEN} bytes, got {byte_len}"
        )));
    }
    let mut salt = vec![0u8; byte_len];
    rng.try_fill_bytes(&mut salt)
        .map_err(|e| CryptoError::KeyDerivation(format!("CSPRNG fill failed: {e}")))?;
    Ok(HEXLOWER.encode(&salt))
}

/// Random AES key of the given size, hex-encoded.
///
/// For demonstration: the symmetric engine never uses raw keys, it derives
/// them from passwords.
///
/// # Errors
///
/// Returns [`CryptoError::KeyDerivation`] if the RNG fails.
pub fn generate_random_key_hex<R: RngCore + CryptoRng>(
    rng: &mut R,
    size: SymmetricKeySize,
) -> Result<String, CryptoError> {
    let mut key = Zeroizing::new(vec![0u8; size.key_len()]);
    rng.try_fill_bytes(&mut key)
        .map_err(|e| CryptoError::KeyDerivation(format!("CSPRNG fill failed: {e}")))?;
    Ok(HEXLOWER.encode(&key))
}

// ---------------------------------------------------------------------------
// PBKDF2
// ---------------------------------------------------------------------------

/// PBKDF2-HMAC-SHA256 into `out`.
///
/// # Errors
///
/// Returns [`CryptoError::KeyDerivation`] if `iterations` is zero or `out`
/// is empty.
pub(crate) fn pbkdf2_sha256(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    out: &mut [u8],
) -> Result<(), CryptoError> {
    let iterations = NonZeroU32::new(iterations)
        .ok_or_else(|| CryptoError::KeyDerivation("iterations must be non-zero".into()))?;
    if out.is_empty() {
        return Err(CryptoError::KeyDerivation("output length must be non-zero".into()));
    }
    pbkdf2::derive(pbkdf2::PBKDF2_HMAC_SHA256, iterations, salt, password, out);
    Ok(())
}

/// Stretch a password for storage: PBKDF2-HMAC-SHA256, 256-bit output, hex.
///
/// `salt` is used as given (its UTF-8 bytes), so a hex salt from
/// [`generate_salt`] is hashed as text, not decoded.
///
/// Unlike the symmetric engine's internal derivation, this returns exportable
/// bytes.
///
/// # Errors
///
/// Returns [`CryptoError::KeyDerivation`] if `iterations` is zero.
pub fn derive_stretched_key(
    password: &str,
    salt: &str,
    iterations: u32,
) -> Result<String, CryptoError> {
    let mut out = Zeroizing::new([0u8; STRETCHED_KEY_LEN]);
    pbkdf2_sha256(password.as_bytes(), salt.as_bytes(), iterations, &mut out[..])?;
    tracing::debug!(iterations, "derived stretched key");
    Ok(HEXLOWER.encode(&out[..]))
}
