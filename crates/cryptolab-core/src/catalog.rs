//! Supported algorithm catalog.
//!
//! This module provides:
//! - [`SymmetricKeySize`], [`RsaModulus`], [`HashAlgorithm`]: closed enums,
//!   one per operation family, parsed from the string ids the UI sends
//! - [`CRYPTO_ALGORITHMS`] / [`HASH_ALGORITHMS`]: static descriptor tables
//! - [`find_algorithm`] / [`find_hash_algorithm`]: id lookup
//!
//! Adding an algorithm means adding an enum variant; every `match` over the
//! family then fails to compile until the new variant is handled.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CryptoError;

// ---------------------------------------------------------------------------
// Operation families
// ---------------------------------------------------------------------------

/// AES-GCM key size for the symmetric engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum SymmetricKeySize {
    /// AES-128-GCM.
    Aes128,
    /// AES-192-GCM.
    Aes192,
    /// AES-256-GCM.
    Aes256,
}

impl SymmetricKeySize {
    /// Every supported size, smallest first.
    pub const ALL: [Self; 3] = [Self::Aes128, Self::Aes192, Self::Aes256];

    /// Key length in bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Aes128 => 128,
            Self::Aes192 => 192,
            Self::Aes256 => 256,
        }
    }

    /// Key length in bytes.
    #[must_use]
    pub const fn key_len(self) -> usize {
        match self {
            Self::Aes128 => 16,
            Self::Aes192 => 24,
            Self::Aes256 => 32,
        }
    }

    /// Result label, e.g. `AES-256-GCM`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Aes128 => "AES-128-GCM",
            Self::Aes192 => "AES-192-GCM",
            Self::Aes256 => "AES-256-GCM",
        }
    }

    /// Resolve a bit count.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::UnsupportedAlgorithm`] for anything other than
    /// 128, 192 or 256.
    pub fn from_bits(bits: u32) -> Result<Self, CryptoError> {
        match bits {
            128 => Ok(Self::Aes128),
            192 => Ok(Self::Aes192),
            256 => Ok(Self::Aes256),
            other => Err(CryptoError::UnsupportedAlgorithm(format!("AES-{other}-GCM"))),
        }
    }
}

impl TryFrom<u32> for SymmetricKeySize {
    type Error = CryptoError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
    }
}

impl From<SymmetricKeySize> for u32 {
    fn from(size: SymmetricKeySize) -> Self {
        size.bits()
    }
}

impl fmt::Display for SymmetricKeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// RSA modulus size for the asymmetric engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum RsaModulus {
    /// 2048-bit modulus.
    Rsa2048,
    /// 4096-bit modulus.
    Rsa4096,
}

/// OAEP overhead with SHA-256: `2 * hash_len + 2`.
pub const OAEP_SHA256_OVERHEAD: usize = 42;

impl RsaModulus {
    /// Modulus length in bits.
    #[must_use]
    pub const fn bits(self) -> usize {
        match self {
            Self::Rsa2048 => 2048,
            Self::Rsa4096 => 4096,
        }
    }

    /// Modulus length in bytes (also the ciphertext and signature length).
    #[must_use]
    pub const fn byte_len(self) -> usize {
        self.bits() / 8
    }

    /// Largest plaintext RSA-OAEP-SHA256 can carry under this modulus.
    #[must_use]
    pub const fn max_oaep_plaintext(self) -> usize {
        self.byte_len().saturating_sub(OAEP_SHA256_OVERHEAD)
    }

    /// Result label, e.g. `RSA-2048`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rsa2048 => "RSA-2048",
            Self::Rsa4096 => "RSA-4096",
        }
    }

    /// Resolve a bit count.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::UnsupportedAlgorithm`] for anything other than
    /// 2048 or 4096.
    pub fn from_bits(bits: u32) -> Result<Self, CryptoError> {
        match bits {
            2048 => Ok(Self::Rsa2048),
            4096 => Ok(Self::Rsa4096),
            other => Err(CryptoError::UnsupportedAlgorithm(format!("RSA-{other}"))),
        }
    }
}

impl TryFrom<u32> for RsaModulus {
    type Error = CryptoError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
    }
}

impl From<RsaModulus> for u32 {
    fn from(modulus: RsaModulus) -> Self {
        match modulus {
            RsaModulus::Rsa2048 => 2048,
            RsaModulus::Rsa4096 => 4096,
        }
    }
}

impl fmt::Display for RsaModulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Digest algorithm for the digest engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// SHA-1 (160-bit). Broken; kept for comparison only.
    #[serde(rename = "SHA-1")]
    Sha1,
    /// SHA-256.
    #[serde(rename = "SHA-256")]
    Sha256,
    /// SHA-512.
    #[serde(rename = "SHA-512")]
    Sha512,
    /// MD5 (128-bit). Broken; kept for comparison only.
    #[serde(rename = "MD5")]
    Md5,
}

impl HashAlgorithm {
    /// Every supported digest.
    pub const ALL: [Self; 4] = [Self::Sha256, Self::Sha512, Self::Sha1, Self::Md5];

    /// Catalog id, e.g. `SHA-256`.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Sha1 => "SHA-1",
            Self::Sha256 => "SHA-256",
            Self::Sha512 => "SHA-512",
            Self::Md5 => "MD5",
        }
    }

    /// Digest length in bytes.
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha512 => 64,
            Self::Md5 => 16,
        }
    }

    /// Length of the hex-encoded digest.
    #[must_use]
    pub const fn hex_len(self) -> usize {
        self.output_len().saturating_mul(2)
    }

    /// `true` for digests that must be shown as non-secure.
    #[must_use]
    pub const fn is_deprecated(self) -> bool {
        matches!(self, Self::Sha1 | Self::Md5)
    }
}

impl FromStr for HashAlgorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SHA-1" | "SHA1" => Ok(Self::Sha1),
            "SHA-256" | "SHA256" => Ok(Self::Sha256),
            "SHA-512" | "SHA512" => Ok(Self::Sha512),
            "MD5" => Ok(Self::Md5),
            _ => Err(CryptoError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// ---------------------------------------------------------------------------
// Descriptor tables
// ---------------------------------------------------------------------------

/// Symmetric or asymmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AlgorithmKind {
    /// Shared-secret cipher.
    Symmetric,
    /// Public-key cipher.
    Asymmetric,
}

/// Read-only descriptor for an encryption algorithm, consumed by UI layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoAlgorithm {
    /// Stable id, e.g. `aes-256-gcm`.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Symmetric or asymmetric.
    pub kind: AlgorithmKind,
    /// Supported key lengths in bits.
    pub key_lengths: &'static [u32],
    /// One-sentence description.
    pub description: &'static str,
    /// Typical applications.
    pub use_cases: &'static [&'static str],
}

/// Read-only descriptor for a digest algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HashAlgorithmInfo {
    /// Catalog id, e.g. `SHA-256`.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-sentence description.
    pub description: &'static str,
    /// Must be shown as non-secure.
    pub deprecated: bool,
}

/// Encryption algorithms offered by the core.
pub const CRYPTO_ALGORITHMS: &[CryptoAlgorithm] = &[
    CryptoAlgorithm {
        id: "aes-256-gcm",
        name: "AES-256-GCM",
        kind: AlgorithmKind::Symmetric,
        key_lengths: &[256],
        description: "Advanced Encryption Standard with 256-bit key and Galois Counter Mode",
        use_cases: &["File encryption", "Database encryption", "Secure communications"],
    },
    CryptoAlgorithm {
        id: "aes-192-gcm",
        name: "AES-192-GCM",
        kind: AlgorithmKind::Symmetric,
        key_lengths: &[192],
        description: "Advanced Encryption Standard with 192-bit key and Galois Counter Mode",
        use_cases: &["Secure messaging", "Data protection", "Cloud storage"],
    },
    CryptoAlgorithm {
        id: "aes-128-gcm",
        name: "AES-128-GCM",
        kind: AlgorithmKind::Symmetric,
        key_lengths: &[128],
        description: "Advanced Encryption Standard with 128-bit key and Galois Counter Mode",
        use_cases: &["Web applications", "Mobile apps", "IoT devices"],
    },
    CryptoAlgorithm {
        id: "rsa-2048",
        name: "RSA-2048",
        kind: AlgorithmKind::Asymmetric,
        key_lengths: &[2048],
        description: "RSA encryption with 2048-bit key length",
        use_cases: &["Digital signatures", "Key exchange", "Certificate authorities"],
    },
    CryptoAlgorithm {
        id: "rsa-4096",
        name: "RSA-4096",
        kind: AlgorithmKind::Asymmetric,
        key_lengths: &[4096],
        description: "RSA encryption with 4096-bit key length for maximum security",
        use_cases: &[
            "High-security applications",
            "Government communications",
            "Financial systems",
        ],
    },
];

/// Digest algorithms offered by the core.
pub const HASH_ALGORITHMS: &[HashAlgorithmInfo] = &[
    HashAlgorithmInfo {
        id: "SHA-256",
        name: "SHA-256",
        description: "Secure Hash Algorithm 256-bit",
        deprecated: false,
    },
    HashAlgorithmInfo {
        id: "SHA-512",
        name: "SHA-512",
        description: "Secure Hash Algorithm 512-bit",
        deprecated: false,
    },
    HashAlgorithmInfo {
        id: "SHA-1",
        name: "SHA-1",
        description: "Secure Hash Algorithm 160-bit (deprecated)",
        deprecated: true,
    },
    HashAlgorithmInfo {
        id: "MD5",
        name: "MD5",
        description: "Message Digest 5 (deprecated, for comparison only)",
        deprecated: true,
    },
];

/// Look up an encryption algorithm descriptor by id (case-insensitive).
///
/// # Errors
///
/// Returns [`CryptoError::UnsupportedAlgorithm`] for unknown ids.
pub fn find_algorithm(id: &str) -> Result<&'static CryptoAlgorithm, CryptoError> {
    let wanted = id.trim();
    CRYPTO_ALGORITHMS
        .iter()
        .find(|a| a.id.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| CryptoError::UnsupportedAlgorithm(id.to_string()))
}

/// Look up a digest descriptor.
#[must_use]
pub fn find_hash_algorithm(algorithm: HashAlgorithm) -> &'static HashAlgorithmInfo {
    let id = algorithm.id();
    HASH_ALGORITHMS
        .iter()
        .find(|info| info.id == id)
        .unwrap_or(&HASH_ALGORITHMS[0])
}

/// Resolve a catalog id to the symmetric key size it names.
///
/// # Errors
///
/// Returns [`CryptoError::UnsupportedAlgorithm`] if the id is unknown or
/// names an asymmetric algorithm.
pub fn symmetric_key_size(id: &str) -> Result<SymmetricKeySize, CryptoError> {
    let algorithm = find_algorithm(id)?;
    match (algorithm.kind, algorithm.key_lengths) {
        (AlgorithmKind::Symmetric, [bits]) => SymmetricKeySize::from_bits(*bits),
        _ => Err(CryptoError::UnsupportedAlgorithm(id.to_string())),
    }
}

/// Resolve a catalog id to the RSA modulus it names.
///
/// # Errors
///
/// Returns [`CryptoError::UnsupportedAlgorithm`] if the id is unknown or
/// names a symmetric algorithm.
pub fn rsa_modulus(id: &str) -> Result<RsaModulus, CryptoError> {
    let algorithm = find_algorithm(id)?;
    match (algorithm.kind, algorithm.key_lengths) {
        (AlgorithmKind::Asymmetric, [bits]) => RsaModulus::from_bits(*bits),
        _ => Err(CryptoError::UnsupportedAlgorithm(id.to_string())),
    }
}
