//! Immutable result values returned to callers.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};

/// Successful encryption output.
///
/// `encrypted` is self-describing: for the symmetric engine it carries salt
/// and nonce, for RSA it is the raw OAEP block. Only the key or password is
/// needed to reverse it.
#[must_use = "encrypted data must be stored or transmitted"]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptionResult {
    /// Base64 ciphertext.
    pub encrypted: String,
    /// Algorithm label, e.g. `AES-256-GCM` or `RSA-2048`.
    pub algorithm: String,
    /// Creation time (UTC). Serialized with millisecond precision.
    #[serde(serialize_with = "serialize_millis")]
    pub timestamp: DateTime<Utc>,
}

impl EncryptionResult {
    pub(crate) fn new(encrypted: String, algorithm: impl Into<String>) -> Self {
        Self {
            encrypted,
            algorithm: algorithm.into(),
            timestamp: Utc::now(),
        }
    }

    /// Timestamp as ISO-8601 with millisecond precision, e.g.
    /// `2024-05-01T12:00:00.000Z`.
    #[must_use]
    pub fn timestamp_iso(&self) -> String {
        iso_timestamp(&self.timestamp)
    }
}

/// Outcome of a decryption attempt. Exactly one of plaintext or message.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum DecryptionResult {
    /// Authenticated plaintext.
    Success {
        /// Recovered UTF-8 text.
        plaintext: String,
    },
    /// Generic failure. Identical for wrong key and corrupted input.
    Failure {
        /// Human-readable diagnostic with no detail about the cause.
        message: String,
    },
}

impl DecryptionResult {
    pub(crate) fn failure(message: &str) -> Self {
        Self::Failure {
            message: message.to_string(),
        }
    }

    /// `true` if decryption succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The recovered plaintext, if any.
    #[must_use]
    pub fn plaintext(&self) -> Option<&str> {
        match self {
            Self::Success { plaintext } => Some(plaintext),
            Self::Failure { .. } => None,
        }
    }
}

/// Digest output.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashResult {
    /// Lowercase hex digest, two characters per byte.
    pub hash: String,
    /// Digest id, e.g. `SHA-256`.
    pub algorithm: String,
    /// Hashed input, retained for display only.
    pub input: String,
    /// Creation time (UTC). Serialized with millisecond precision.
    #[serde(serialize_with = "serialize_millis")]
    pub timestamp: DateTime<Utc>,
}

impl HashResult {
    /// Timestamp as ISO-8601 with millisecond precision.
    #[must_use]
    pub fn timestamp_iso(&self) -> String {
        iso_timestamp(&self.timestamp)
    }
}

/// Signature bundle produced by the signing flow.
///
/// Carries the exported private key so a learning UI can show it. A
/// production port should drop `private_key` and expose it only through an
/// explicit reveal step. This type intentionally does NOT implement
/// `Serialize` and masks the private key in `Debug`.
#[must_use]
pub struct SignatureResult {
    /// Base64 RSA-PSS signature.
    pub signature: String,
    /// Signer's public key, SPKI PEM.
    pub public_key: String,
    /// Signer's private key, PKCS8 PEM. Secret.
    pub private_key: SecretString,
    /// The signed message.
    pub message: String,
    /// Result of a follow-up verification, if one was run.
    pub verified: Option<bool>,
}

impl SignatureResult {
    /// Reveal the private key PEM. Keep exposure short-lived.
    #[must_use]
    pub fn reveal_private_key(&self) -> &str {
        self.private_key.expose_secret()
    }
}

impl fmt::Debug for SignatureResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureResult")
            .field("signature", &self.signature)
            .field("public_key", &self.public_key)
            .field("private_key", &"***")
            .field("message", &self.message)
            .field("verified", &self.verified)
            .finish()
    }
}

fn iso_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_millis<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&iso_timestamp(ts))
}
