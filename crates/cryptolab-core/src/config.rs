//! Tunable limits and defaults for the [`crate::lab::CryptoLab`] facade.
//!
//! The symmetric wire contract (salt, nonce, PBKDF2 rounds) is fixed and not
//! configurable; only input ceilings and defaults for the optional parameters
//! live here.

use serde::{Deserialize, Serialize};

use crate::catalog::{RsaModulus, SymmetricKeySize};
use crate::digest::{DEFAULT_SALT_LEN, DEFAULT_STRETCH_ITERATIONS, MAX_SALT_LEN};
use crate::error::CryptoError;
use crate::validation::{InputLimits, MAX_CIPHERTEXT_CHARS, MAX_PLAINTEXT_CHARS};

/// Lowest PBKDF2 round count accepted for key stretching.
pub const MIN_STRETCH_ITERATIONS: u32 = 1_000;

/// Facade configuration. Loadable from JSON; unknown keys are rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct CryptoConfig {
    /// Plaintext ceiling in characters.
    pub max_plaintext_chars: usize,
    /// Ciphertext ceiling in characters.
    pub max_ciphertext_chars: usize,
    /// Salt length for `generate_salt` when the caller gives none.
    pub default_salt_len: usize,
    /// PBKDF2 rounds for key stretching when the caller gives none.
    pub default_stretch_iterations: u32,
    /// Floor for caller-supplied stretching rounds.
    pub min_stretch_iterations: u32,
    /// Modulus for key generation when the caller gives none.
    pub default_rsa_modulus: RsaModulus,
    /// AES key size when the caller gives none.
    pub default_symmetric_key: SymmetricKeySize,
}

impl Default for CryptoConfig {
    fn default() -> Self {
        Self {
            max_plaintext_chars: MAX_PLAINTEXT_CHARS,
            max_ciphertext_chars: MAX_CIPHERTEXT_CHARS,
            default_salt_len: DEFAULT_SALT_LEN,
            default_stretch_iterations: DEFAULT_STRETCH_ITERATIONS,
            min_stretch_iterations: MIN_STRETCH_ITERATIONS,
            default_rsa_modulus: RsaModulus::Rsa2048,
            default_symmetric_key: SymmetricKeySize::Aes256,
        }
    }
}

impl CryptoConfig {
    /// Parse and validate a JSON document. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Config`] on malformed JSON, unknown keys or
    /// values rejected by [`CryptoConfig::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, CryptoError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| CryptoError::Config(format!("malformed configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Config`] if a ceiling is zero, the salt length
    /// is zero or above 1024 bytes, the iteration floor is below 1,000 or the
    /// default iteration count is below the floor.
    pub fn validate(&self) -> Result<(), CryptoError> {
        if self.max_plaintext_chars == 0 || self.max_ciphertext_chars == 0 {
            return Err(CryptoError::Config("input ceilings must be non-zero".into()));
        }
        if self.default_salt_len == 0 || self.default_salt_len > MAX_SALT_LEN {
            return Err(CryptoError::Config(format!(
                "defaultSaltLen must be between 1 and {MAX_SALT_LEN}, got {}",
                self.default_salt_len
            )));
        }
        if self.min_stretch_iterations < MIN_STRETCH_ITERATIONS {
            return Err(CryptoError::Config(format!(
                "minStretchIterations must be at least {MIN_STRETCH_ITERATIONS}, got {}",
                self.min_stretch_iterations
            )));
        }
        if self.default_stretch_iterations < self.min_stretch_iterations {
            return Err(CryptoError::Config(format!(
                "defaultStretchIterations ({}) is below minStretchIterations ({})",
                self.default_stretch_iterations, self.min_stretch_iterations
            )));
        }
        Ok(())
    }

    /// Input ceilings as used by [`crate::validation`].
    #[must_use]
    pub const fn input_limits(&self) -> InputLimits {
        InputLimits {
            max_plaintext_chars: self.max_plaintext_chars,
            max_ciphertext_chars: self.max_ciphertext_chars,
        }
    }
}
