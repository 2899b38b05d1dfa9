//! Text encodings: base64 and single-line PEM envelopes.
//!
//! Public keys use the SPKI envelope (`PUBLIC KEY`), private keys PKCS8
//! (`PRIVATE KEY`). The base64 body is written on one line; the decoder also
//! accepts bodies wrapped at any column.

use data_encoding::BASE64;

use crate::error::CryptoError;

/// PEM label for SPKI public keys.
pub const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

/// PEM label for PKCS8 private keys.
pub const PRIVATE_KEY_LABEL: &str = "PRIVATE KEY";

/// Standard base64 with padding.
#[must_use]
pub fn encode_base64(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Decode standard base64, ignoring any ASCII whitespace.
///
/// # Errors
///
/// Returns the decoder's message wrapped in [`CryptoError::InvalidKeyMaterial`];
/// callers on decryption paths discard it.
pub fn decode_base64(text: &str) -> Result<Vec<u8>, CryptoError> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    BASE64
        .decode(compact.as_bytes())
        .map_err(|e| CryptoError::InvalidKeyMaterial(format!("invalid base64: {e}")))
}

/// Wrap DER bytes in a PEM envelope with a single-line body.
#[must_use]
pub fn encode_pem(label: &str, der: &[u8]) -> String {
    format!(
        "-----BEGIN {label}-----\n{}\n-----END {label}-----",
        encode_base64(der)
    )
}

/// Strip the envelope for `label` and decode the body to DER.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidKeyMaterial`] if the header or footer is
/// missing or the body is not valid base64.
pub fn decode_pem(label: &str, pem: &str) -> Result<Vec<u8>, CryptoError> {
    let header = format!("-----BEGIN {label}-----");
    let footer = format!("-----END {label}-----");
    let trimmed = pem.trim();

    let body = trimmed
        .strip_prefix(header.as_str())
        .and_then(|rest| rest.strip_suffix(footer.as_str()))
        .ok_or_else(|| CryptoError::InvalidKeyMaterial(format!("expected {label} PEM envelope")))?;

    let der = decode_base64(body)?;
    if der.is_empty() {
        return Err(CryptoError::InvalidKeyMaterial(format!("empty {label} body")));
    }
    Ok(der)
}
