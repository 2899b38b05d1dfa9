//! Cryptographic error types for `cryptolab-core`.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which kind of user input is being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputKind {
    /// Text to be encrypted, hashed or signed.
    Plaintext,
    /// Base64 ciphertext pasted back for decryption.
    Ciphertext,
    /// Password or passphrase. Validated but never sanitized.
    Password,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plaintext => f.write_str("Plain text"),
            Self::Ciphertext => f.write_str("Encrypted text"),
            Self::Password => f.write_str("Password"),
        }
    }
}

/// Errors produced by cryptographic operations.
///
/// Input errors carry a specific message. Decryption failures are
/// deliberately generic so callers cannot tell a wrong key from corrupted data.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Input was empty after trimming whitespace.
    #[error("{0} is required")]
    EmptyInput(InputKind),

    /// Input exceeds the character ceiling for its kind.
    #[error("{kind} is too long (max {max} characters)")]
    InputTooLarge {
        /// Which input was rejected.
        kind: InputKind,
        /// Configured ceiling in characters.
        max: usize,
    },

    /// Algorithm id is not in the catalog.
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// RSA-OAEP payload larger than the modulus allows.
    #[error("RSA can only encrypt up to {max} bytes (got {len}); use symmetric encryption for larger data")]
    PlaintextTooLarge {
        /// UTF-8 length of the rejected plaintext.
        len: usize,
        /// Maximum OAEP-SHA256 payload for the modulus.
        max: usize,
    },

    /// Encryption failed (key derivation, cipher construction, RSA padding).
    #[error("encryption failed: {0}")]
    Encryption(String),

    /// Decryption failed. Never says why.
    #[error("decryption failed")]
    Decryption,

    /// PBKDF2 parameter rejected (zero iterations, bad output length).
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    /// Invalid key material (bad PEM, bad DER, wrong modulus size).
    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(String),

    /// A key generated for one padding scheme was used with the other.
    #[error("key usage mismatch: expected {expected} key, got {actual} key")]
    KeyUsageMismatch {
        /// Usage the operation needs.
        expected: crate::asymmetric::KeyUsage,
        /// Usage the handle was created for.
        actual: crate::asymmetric::KeyUsage,
    },

    /// Signature creation failure.
    #[error("signature error: {0}")]
    Signature(String),

    /// Configuration parsing or validation failure.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CryptoError {
    /// Returns `true` for errors caused by user input rather than by a
    /// cryptographic operation. These are safe to show verbatim.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput(_)
                | Self::InputTooLarge { .. }
                | Self::UnsupportedAlgorithm(_)
                | Self::PlaintextTooLarge { .. }
        )
    }
}
