//! Entropy smoke tests for everything drawn from the CSPRNG.
//!
//! Shannon entropy of uniform bytes approaches 8.0 bits/byte; finite samples
//! measure lower because not every byte value appears. Thresholds are loose
//! enough to avoid false positives and tight enough to catch all-zero or
//! repeating output.
//!
//! | Sample size | Expected | Threshold |
//! |-------------|----------|-----------|
//! | 1 KB        | ~7.81    | 7.5       |
//! | 64 KB       | ~7.997   | 7.99      |

use std::collections::HashSet;

use data_encoding::HEXLOWER;
use rand::rngs::OsRng;

use cryptolab_core::digest::{generate_random_key_hex, MAX_SALT_LEN};
use cryptolab_core::symmetric::{encrypt_password, SymmetricEnvelope};
use cryptolab_core::{generate_salt, SymmetricKeySize};

/// `H = -Σ p(x) * log2(p(x))` over byte values.
#[allow(clippy::cast_precision_loss)]
fn shannon_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mut freq = [0u64; 256];
    for &b in data {
        freq[b as usize] = freq[b as usize].saturating_add(1);
    }
    let len = data.len() as f64;
    freq.iter()
        .filter(|&&f| f > 0)
        .map(|&f| {
            let p = f as f64 / len;
            -p * p.log2()
        })
        .sum()
}

fn hex_bytes(hex: &str) -> Vec<u8> {
    HEXLOWER.decode(hex.as_bytes()).expect("output should be lowercase hex")
}

#[test]
fn salt_1kb_entropy() {
    let salt = hex_bytes(&generate_salt(&mut OsRng, MAX_SALT_LEN).expect("salt should succeed"));
    let entropy = shannon_entropy(&salt);
    assert!(entropy > 7.5, "1 KB salt entropy {entropy:.3} <= 7.5");
}

#[test]
fn pooled_salts_64kb_entropy() {
    let pooled: Vec<u8> = (0..64)
        .flat_map(|_| hex_bytes(&generate_salt(&mut OsRng, MAX_SALT_LEN).expect("salt should succeed")))
        .collect();
    assert_eq!(pooled.len(), 65_536);
    let entropy = shannon_entropy(&pooled);
    assert!(entropy > 7.99, "64 KB pooled salt entropy {entropy:.4} <= 7.99");
}

#[test]
fn random_keys_are_distinct_and_full_length() {
    let keys: HashSet<String> = (0..64)
        .map(|_| generate_random_key_hex(&mut OsRng, SymmetricKeySize::Aes256).expect("key"))
        .collect();
    assert_eq!(keys.len(), 64);
    assert!(keys.iter().all(|k| k.len() == 64));

    let pooled: Vec<u8> = keys.iter().flat_map(|k| hex_bytes(k)).collect();
    let entropy = shannon_entropy(&pooled);
    assert!(entropy > 7.5, "pooled key entropy {entropy:.3} <= 7.5");
}

#[test]
fn envelope_salts_and_nonces_never_repeat() {
    let mut salts = HashSet::new();
    let mut nonces = HashSet::new();
    for _ in 0..8 {
        let sealed = encrypt_password(&mut OsRng, "same text", "same password", SymmetricKeySize::Aes128)
            .expect("encrypt should succeed");
        let envelope = SymmetricEnvelope::decode(&sealed.encrypted).expect("decode");
        assert!(salts.insert(envelope.salt));
        assert!(nonces.insert(envelope.nonce));
    }
}
