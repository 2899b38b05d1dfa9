//! `CryptoLab`: the string-in, result-out surface a UI or CLI calls.
//!
//! Every text input is validated against the configured ceilings and then
//! sanitized before it reaches an engine. Passwords and PEM keys are
//! validated for presence but never sanitized. Algorithm ids are resolved
//! through the catalog, so an unknown id fails with
//! [`CryptoError::UnsupportedAlgorithm`] before any work is done.
//!
//! The facade owns its RNG. Production code uses [`CryptoLab::with_os_rng`];
//! tests inject a seeded RNG through [`CryptoLab::new`].

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::asymmetric::{self, RsaKeyPair};
use crate::catalog::{self, HashAlgorithm, RsaModulus, SymmetricKeySize};
use crate::config::CryptoConfig;
use crate::digest;
use crate::error::{CryptoError, InputKind};
use crate::results::{DecryptionResult, EncryptionResult, HashResult, SignatureResult};
use crate::signing;
use crate::symmetric;
use crate::validation::{self, KeyStrengthScore};

/// Validated, sanitized front door to the engines.
#[derive(Debug)]
pub struct CryptoLab<R = OsRng> {
    config: CryptoConfig,
    rng: R,
}

impl CryptoLab<OsRng> {
    /// Facade wired to the operating system CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Config`] if `config` fails validation.
    pub fn with_os_rng(config: CryptoConfig) -> Result<Self, CryptoError> {
        Self::new(config, OsRng)
    }
}

impl<R: RngCore + CryptoRng> CryptoLab<R> {
    /// Facade with an explicit RNG.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Config`] if `config` fails validation.
    pub fn new(config: CryptoConfig, rng: R) -> Result<Self, CryptoError> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &CryptoConfig {
        &self.config
    }

    fn accept(&self, input: &str, kind: InputKind) -> Result<String, CryptoError> {
        check(input, kind, &self.config)?;
        Ok(validation::sanitize_input(input))
    }

    fn require_secret(&self, secret: &str, kind: InputKind) -> Result<(), CryptoError> {
        check(secret, kind, &self.config)
    }

    // -- Symmetric -----------------------------------------------------------

    /// Encrypt text under a password. `algorithm_id` is a catalog id such as
    /// `aes-256-gcm`.
    ///
    /// # Errors
    ///
    /// Input errors, [`CryptoError::UnsupportedAlgorithm`] for non-AES ids,
    /// or [`CryptoError::Encryption`].
    pub fn encrypt_with_password(
        &mut self,
        plaintext: &str,
        password: &str,
        algorithm_id: &str,
    ) -> Result<EncryptionResult, CryptoError> {
        let size = catalog::symmetric_key_size(algorithm_id)?;
        let plaintext = self.accept(plaintext, InputKind::Plaintext)?;
        self.require_secret(password, InputKind::Password)?;
        symmetric::encrypt_password(&mut self.rng, &plaintext, password, size)
    }

    /// Decrypt a password-encrypted blob.
    ///
    /// Input errors are returned as `Err`; every cryptographic failure comes
    /// back as the generic [`DecryptionResult::Failure`].
    ///
    /// # Errors
    ///
    /// Input errors and [`CryptoError::UnsupportedAlgorithm`].
    pub fn decrypt_with_password(
        &self,
        encrypted: &str,
        password: &str,
        algorithm_id: &str,
    ) -> Result<DecryptionResult, CryptoError> {
        let size = catalog::symmetric_key_size(algorithm_id)?;
        let encrypted = self.accept(encrypted, InputKind::Ciphertext)?;
        self.require_secret(password, InputKind::Password)?;
        Ok(symmetric::decrypt_password(&encrypted, password, size))
    }

    /// Random AES key for the given catalog id, hex-encoded.
    ///
    /// # Errors
    ///
    /// [`CryptoError::UnsupportedAlgorithm`] or an RNG failure.
    pub fn random_key_hex(&mut self, algorithm_id: &str) -> Result<String, CryptoError> {
        let size = catalog::symmetric_key_size(algorithm_id)?;
        digest::generate_random_key_hex(&mut self.rng, size)
    }

    /// Default AES key size from configuration.
    #[must_use]
    pub const fn default_symmetric_key(&self) -> SymmetricKeySize {
        self.config.default_symmetric_key
    }

    // -- Asymmetric ----------------------------------------------------------

    /// Fresh OAEP key pair. `None` uses the configured default modulus.
    ///
    /// # Errors
    ///
    /// [`CryptoError::InvalidKeyMaterial`] if key generation fails.
    pub fn generate_encryption_key_pair(
        &mut self,
        modulus: Option<RsaModulus>,
    ) -> Result<RsaKeyPair, CryptoError> {
        let modulus = modulus.unwrap_or(self.config.default_rsa_modulus);
        asymmetric::generate_encryption_key_pair(&mut self.rng, modulus)
    }

    /// Fresh PSS key pair. `None` uses the configured default modulus.
    ///
    /// # Errors
    ///
    /// [`CryptoError::InvalidKeyMaterial`] if key generation fails.
    pub fn generate_signing_key_pair(
        &mut self,
        modulus: Option<RsaModulus>,
    ) -> Result<RsaKeyPair, CryptoError> {
        let modulus = modulus.unwrap_or(self.config.default_rsa_modulus);
        asymmetric::generate_signing_key_pair(&mut self.rng, modulus)
    }

    /// Encrypt text for a public key PEM. `algorithm_id` is `rsa-2048` or
    /// `rsa-4096`.
    ///
    /// # Errors
    ///
    /// Input errors, [`CryptoError::PlaintextTooLarge`],
    /// [`CryptoError::InvalidKeyMaterial`] or [`CryptoError::Encryption`].
    pub fn encrypt_with_public_key(
        &mut self,
        plaintext: &str,
        public_key_pem: &str,
        algorithm_id: &str,
    ) -> Result<EncryptionResult, CryptoError> {
        let modulus = catalog::rsa_modulus(algorithm_id)?;
        let plaintext = self.accept(plaintext, InputKind::Plaintext)?;
        asymmetric::encrypt_with_public_key(&mut self.rng, &plaintext, public_key_pem, modulus)
    }

    /// Decrypt with a private key PEM.
    ///
    /// # Errors
    ///
    /// Input errors only; cryptographic failures are the generic
    /// [`DecryptionResult::Failure`].
    pub fn decrypt_with_private_key(
        &self,
        encrypted: &str,
        private_key_pem: &str,
    ) -> Result<DecryptionResult, CryptoError> {
        let encrypted = self.accept(encrypted, InputKind::Ciphertext)?;
        Ok(asymmetric::decrypt_with_private_key(&encrypted, private_key_pem))
    }

    // -- Signatures ----------------------------------------------------------

    /// Sign a message with a retained signing key pair and bundle the keys.
    ///
    /// # Errors
    ///
    /// Input errors, [`CryptoError::KeyUsageMismatch`] or
    /// [`CryptoError::Signature`].
    pub fn sign(
        &mut self,
        message: &str,
        key_pair: &RsaKeyPair,
    ) -> Result<SignatureResult, CryptoError> {
        let message = self.accept(message, InputKind::Plaintext)?;
        signing::sign_and_bundle(&mut self.rng, &message, key_pair)
    }

    /// Verify a signature against a public key PEM. Fails closed.
    ///
    /// The message goes through the same sanitization as [`CryptoLab::sign`]
    /// so a signature over sanitized text verifies.
    #[must_use]
    pub fn verify(&self, message: &str, signature_b64: &str, public_key_pem: &str) -> bool {
        let Ok(message) = self.accept(message, InputKind::Plaintext) else {
            return false;
        };
        signing::verify_signature_pem(&message, signature_b64.trim(), public_key_pem)
    }

    // -- Digests -------------------------------------------------------------

    /// Hash text under a digest id such as `SHA-256` or `MD5`.
    ///
    /// # Errors
    ///
    /// Input errors or [`CryptoError::UnsupportedAlgorithm`].
    pub fn hash(&self, input: &str, algorithm_id: &str) -> Result<HashResult, CryptoError> {
        let algorithm: HashAlgorithm = algorithm_id.parse()?;
        let input = self.accept(input, InputKind::Plaintext)?;
        if algorithm.is_deprecated() {
            tracing::warn!(algorithm = %algorithm, "hashing with a deprecated digest");
        }
        Ok(digest::compute_digest(&input, algorithm))
    }

    /// Fixed-time digest comparison, ignoring surrounding whitespace.
    #[must_use]
    pub fn compare(&self, a: &str, b: &str) -> bool {
        digest::compare_digests(a.trim(), b.trim())
    }

    /// Random hex salt. `None` uses the configured default length.
    ///
    /// # Errors
    ///
    /// [`CryptoError::KeyDerivation`] for a zero length, a length above
    /// [`digest::MAX_SALT_LEN`] or an RNG failure.
    pub fn generate_salt(&mut self, byte_len: Option<usize>) -> Result<String, CryptoError> {
        let len = byte_len.unwrap_or(self.config.default_salt_len);
        digest::generate_salt(&mut self.rng, len)
    }

    /// PBKDF2-HMAC-SHA256 stretching. `None` uses the configured default
    /// iteration count.
    ///
    /// # Errors
    ///
    /// Input errors for an empty password or salt, or
    /// [`CryptoError::KeyDerivation`] when `iterations` is below the
    /// configured floor.
    pub fn stretch_password(
        &self,
        password: &str,
        salt: &str,
        iterations: Option<u32>,
    ) -> Result<String, CryptoError> {
        self.require_secret(password, InputKind::Password)?;
        let salt = self.accept(salt, InputKind::Plaintext)?;
        let iterations = iterations.unwrap_or(self.config.default_stretch_iterations);
        if iterations < self.config.min_stretch_iterations {
            return Err(CryptoError::KeyDerivation(format!(
                "iterations must be at least {}, got {iterations}",
                self.config.min_stretch_iterations
            )));
        }
        digest::derive_stretched_key(password, &salt, iterations)
    }

    // -- Scoring -------------------------------------------------------------

    /// Heuristic password strength.
    #[must_use]
    pub fn score_password(&self, password: &str) -> KeyStrengthScore {
        validation::score_key_strength(password)
    }
}

fn check(input: &str, kind: InputKind, config: &CryptoConfig) -> Result<(), CryptoError> {
    match validation::validate_input_with_limits(input, kind, &config.input_limits()) {
        Some(err) => {
            tracing::warn!(?kind, %err, "input rejected");
            Err(err)
        }
        None => Ok(()),
    }
}
