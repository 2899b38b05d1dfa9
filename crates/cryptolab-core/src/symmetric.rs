//! Password-based AES-GCM encryption.
//!
//! This module provides:
//! - [`encrypt_password`]: derive a key from a password and seal plaintext
//! - [`decrypt_password`]: re-derive the key and open a sealed blob
//! - [`SymmetricEnvelope`]: salt + nonce + ciphertext‖tag container
//!
//! # Wire Format
//!
//! `base64(salt (16) || nonce (12) || ciphertext || tag (16))`
//!
//! The key is derived with PBKDF2-HMAC-SHA256 over 100,000 iterations and
//! never leaves this module. No additional authenticated data is used.

use aes_gcm::aead::consts::U12;
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{Aead, AeadCore, KeyInit};
use aes_gcm::aes::Aes192;
use aes_gcm::{Aes128Gcm, Aes256Gcm, AesGcm};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use crate::catalog::SymmetricKeySize;
use crate::digest::pbkdf2_sha256;
use crate::encoding::{decode_base64, encode_base64};
use crate::error::CryptoError;
use crate::results::{DecryptionResult, EncryptionResult};

/// Salt length in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// AES-GCM nonce length in bytes (96 bits).
pub const NONCE_LEN: usize = 12;

/// AES-GCM authentication tag length in bytes (128 bits).
pub const TAG_LEN: usize = 16;

/// PBKDF2-HMAC-SHA256 iteration count. Part of the wire contract.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Shortest decodable blob: salt + nonce.
pub const MIN_ENVELOPE_LEN: usize = SALT_LEN + NONCE_LEN;

/// Largest AES key in bytes.
const MAX_KEY_LEN: usize = 32;

/// Generic message for every symmetric decryption failure.
pub const DECRYPTION_FAILED_MESSAGE: &str =
    "Decryption failed. Please check your password and encrypted data.";

type Aes192Gcm = AesGcm<Aes192, U12>;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Parsed symmetric blob.
///
/// Everything except the password needed to decrypt travels here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymmetricEnvelope {
    /// Random PBKDF2 salt, unique per encryption.
    pub salt: [u8; SALT_LEN],
    /// Random AES-GCM nonce, unique per encryption.
    pub nonce: [u8; NONCE_LEN],
    /// Ciphertext with the 16-byte tag appended.
    pub ciphertext: Vec<u8>,
}

impl SymmetricEnvelope {
    /// Serialize to wire format: `salt || nonce || ciphertext‖tag`.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(MIN_ENVELOPE_LEN.saturating_add(self.ciphertext.len()));
        out.extend_from_slice(&self.salt);
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Deserialize from wire format.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Decryption`] if the input is shorter than 28 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() < MIN_ENVELOPE_LEN {
            return Err(CryptoError::Decryption);
        }
        let (salt_bytes, rest) = bytes.split_at(SALT_LEN);
        let (nonce_bytes, ciphertext) = rest.split_at(NONCE_LEN);

        let mut salt = [0u8; SALT_LEN];
        salt.copy_from_slice(salt_bytes);
        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(nonce_bytes);

        Ok(Self {
            salt,
            nonce,
            ciphertext: ciphertext.to_vec(),
        })
    }

    /// Base64 text form.
    #[must_use]
    pub fn encode(&self) -> String {
        encode_base64(&self.to_bytes())
    }

    /// Parse base64 text.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Decryption`] for bad base64 or a short blob.
    pub fn decode(text: &str) -> Result<Self, CryptoError> {
        let bytes = decode_base64(text).map_err(|_| CryptoError::Decryption)?;
        Self::from_bytes(&bytes)
    }
}

// ---------------------------------------------------------------------------
// Key derivation
// ---------------------------------------------------------------------------

/// Derive an AES key of `size` from `password` and `salt`.
fn derive_key(
    password: &str,
    salt: &[u8; SALT_LEN],
    size: SymmetricKeySize,
) -> Result<Zeroizing<[u8; MAX_KEY_LEN]>, CryptoError> {
    let mut key = Zeroizing::new([0u8; MAX_KEY_LEN]);
    pbkdf2_sha256(
        password.as_bytes(),
        salt,
        PBKDF2_ITERATIONS,
        &mut key[..size.key_len()],
    )?;
    Ok(key)
}

// ---------------------------------------------------------------------------
// AEAD dispatch
// ---------------------------------------------------------------------------

fn seal_with<C>(key: &[u8], nonce: &[u8; NONCE_LEN], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError>
where
    C: Aead + AeadCore<NonceSize = U12> + KeyInit,
{
    let cipher = C::new_from_slice(key)
        .map_err(|_| CryptoError::Encryption(format!("invalid key length: {} bytes", key.len())))?;
    cipher
        .encrypt(GenericArray::from_slice(nonce), plaintext)
        .map_err(|_| CryptoError::Encryption("AES-GCM encryption failed".into()))
}

fn open_with<C>(key: &[u8], nonce: &[u8; NONCE_LEN], ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError>
where
    C: Aead + AeadCore<NonceSize = U12> + KeyInit,
{
    let cipher = C::new_from_slice(key).map_err(|_| CryptoError::Decryption)?;
    cipher
        .decrypt(GenericArray::from_slice(nonce), ciphertext)
        .map_err(|_| CryptoError::Decryption)
}

fn seal(
    size: SymmetricKeySize,
    key: &[u8],
    nonce: &[u8; NONCE_LEN],
    plaintext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    match size {
        SymmetricKeySize::Aes128 => seal_with::<Aes128Gcm>(key, nonce, plaintext),
        SymmetricKeySize::Aes192 => seal_with::<Aes192Gcm>(key, nonce, plaintext),
        SymmetricKeySize::Aes256 => seal_with::<Aes256Gcm>(key, nonce, plaintext),
    }
}

fn open(
    size: SymmetricKeySize,
    key: &[u8],
    nonce: &[u8; NONCE_LEN],
    ciphertext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    match size {
        SymmetricKeySize::Aes128 => open_with::<Aes128Gcm>(key, nonce, ciphertext),
        SymmetricKeySize::Aes192 => open_with::<Aes192Gcm>(key, nonce, ciphertext),
        SymmetricKeySize::Aes256 => open_with::<Aes256Gcm>(key, nonce, ciphertext),
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Encrypt `plaintext` under a key derived from `password`.
///
/// Draws a fresh 16-byte salt and 12-byte nonce from `rng` on every call, so
/// two encryptions of the same input never produce the same blob.
///
/// # Errors
///
/// Returns [`CryptoError::Encryption`] if the RNG, key derivation or cipher
/// fails.
pub fn encrypt_password<R: RngCore + CryptoRng>(
    rng: &mut R,
    plaintext: &str,
    password: &str,
    size: SymmetricKeySize,
) -> Result<EncryptionResult, CryptoError> {
    let mut salt = [0u8; SALT_LEN];
    let mut nonce = [0u8; NONCE_LEN];
    rng.try_fill_bytes(&mut salt)
        .and_then(|()| rng.try_fill_bytes(&mut nonce))
        .map_err(|e| CryptoError::Encryption(format!("CSPRNG fill failed: {e}")))?;

    let key = derive_key(password, &salt, size)
        .map_err(|e| CryptoError::Encryption(e.to_string()))?;
    let ciphertext = seal(size, &key[..size.key_len()], &nonce, plaintext.as_bytes())?;

    let envelope = SymmetricEnvelope {
        salt,
        nonce,
        ciphertext,
    };
    tracing::debug!(
        algorithm = size.label(),
        plaintext_len = plaintext.len(),
        "sealed symmetric envelope"
    );
    Ok(EncryptionResult::new(envelope.encode(), size.label()))
}

/// Decrypt a blob produced by [`encrypt_password`].
///
/// Every failure, whether bad base64, a truncated blob, a wrong password,
/// a flipped byte or non-UTF-8 output, yields the same
/// [`DecryptionResult::Failure`].
pub fn decrypt_password(encoded: &str, password: &str, size: SymmetricKeySize) -> DecryptionResult {
    match try_decrypt(encoded, password, size) {
        Ok(plaintext) => DecryptionResult::Success { plaintext },
        Err(_) => {
            tracing::warn!(algorithm = size.label(), "symmetric decryption rejected");
            DecryptionResult::failure(DECRYPTION_FAILED_MESSAGE)
        }
    }
}

fn try_decrypt(encoded: &str, password: &str, size: SymmetricKeySize) -> Result<String, CryptoError> {
    let envelope = SymmetricEnvelope::decode(encoded)?;
    let key = derive_key(password, &envelope.salt, size)?;
    let plaintext = open(size, &key[..size.key_len()], &envelope.nonce, &envelope.ciphertext)?;
    String::from_utf8(plaintext).map_err(|e| {
        e.into_bytes().zeroize();
        CryptoError::Decryption
    })
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
