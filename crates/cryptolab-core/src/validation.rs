//! Input validation, sanitization and password-strength scoring.
//!
//! Everything here is pure and stateless. Sanitization runs before any input
//! reaches an engine so that whitespace is normalized the same way for
//! encryption and for base64 decoding.

use serde::{Deserialize, Serialize};

use crate::error::{CryptoError, InputKind};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum plaintext length in characters.
pub const MAX_PLAINTEXT_CHARS: usize = 10_000;

/// Maximum ciphertext (base64 text) length in characters.
pub const MAX_CIPHERTEXT_CHARS: usize = 50_000;

/// Below this length no length points are awarded.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Length that earns one point.
pub const STRONG_PASSWORD_LENGTH: usize = 12;

/// Length that earns two points.
pub const VERY_STRONG_PASSWORD_LENGTH: usize = 16;

/// Highest achievable score.
pub const MAX_SCORE: u8 = 7;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Character ceilings per input kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputLimits {
    /// Ceiling for [`InputKind::Plaintext`] and [`InputKind::Password`].
    pub max_plaintext_chars: usize,
    /// Ceiling for [`InputKind::Ciphertext`].
    pub max_ciphertext_chars: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_plaintext_chars: MAX_PLAINTEXT_CHARS,
            max_ciphertext_chars: MAX_CIPHERTEXT_CHARS,
        }
    }
}

impl InputLimits {
    const fn ceiling(&self, kind: InputKind) -> usize {
        match kind {
            InputKind::Plaintext | InputKind::Password => self.max_plaintext_chars,
            InputKind::Ciphertext => self.max_ciphertext_chars,
        }
    }
}

/// Qualitative strength bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StrengthLevel {
    /// Score 0..=2.
    Weak,
    /// Score 3..=4.
    Medium,
    /// Score 5..=6.
    Strong,
    /// Score 7.
    VeryStrong,
}

impl StrengthLevel {
    /// Bucket a raw score.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Self::Weak,
            3..=4 => Self::Medium,
            5..=6 => Self::Strong,
            _ => Self::VeryStrong,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }
}

/// Heuristic password strength. Not a cryptographic guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyStrengthScore {
    /// Additive score, `0..=7`.
    pub score: u8,
    /// Missing criteria joined with `", "`, or a positive message.
    pub feedback: String,
    /// Bucket derived from `score`.
    pub level: StrengthLevel,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Validate raw input against the default ceilings.
///
/// Returns `None` if the input is acceptable.
#[must_use]
pub fn validate_input(input: &str, kind: InputKind) -> Option<CryptoError> {
    validate_input_with_limits(input, kind, &InputLimits::default())
}

/// Validate raw input against configured ceilings.
///
/// Length is counted in characters, not bytes.
#[must_use]
pub fn validate_input_with_limits(
    input: &str,
    kind: InputKind,
    limits: &InputLimits,
) -> Option<CryptoError> {
    if input.trim().is_empty() {
        return Some(CryptoError::EmptyInput(kind));
    }
    let max = limits.ceiling(kind);
    if input.chars().count() > max {
        return Some(CryptoError::InputTooLarge { kind, max });
    }
    None
}

/// Strip `<` and `>` and trim surrounding whitespace.
///
/// Guards against the text being echoed into markup elsewhere. This is not a
/// cryptographic function.
#[must_use]
pub fn sanitize_input(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '<' | '>'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Score a password.
///
/// Length is measured in UTF-16 code units, so a character outside the Basic
/// Multilingual Plane (most emoji) counts as two.
///
/// - length ≥ 16: +2, length in `[12, 16)`: +1, length < 8 adds feedback
/// - +1 each for lowercase, uppercase, digit and symbol classes
/// - +1 when all four classes are present on a password of 16+ characters
#[must_use]
pub fn score_key_strength(password: &str) -> KeyStrengthScore {
    let mut score: u8 = 0;
    let mut feedback: Vec<String> = Vec::new();
    let length = password.encode_utf16().count();

    if length < MIN_PASSWORD_LENGTH {
        feedback.push(format!("Minimum {MIN_PASSWORD_LENGTH} characters required"));
    } else if length >= VERY_STRONG_PASSWORD_LENGTH {
        score = score.saturating_add(2);
    } else if length >= STRONG_PASSWORD_LENGTH {
        score = score.saturating_add(1);
    }

    let classes: [(bool, &str); 4] = [
        (password.chars().any(|c| c.is_ascii_lowercase()), "Add lowercase letters"),
        (password.chars().any(|c| c.is_ascii_uppercase()), "Add uppercase letters"),
        (password.chars().any(|c| c.is_ascii_digit()), "Add numbers"),
        (password.chars().any(|c| !c.is_ascii_alphanumeric()), "Add special characters"),
    ];

    let mut present: u8 = 0;
    for (has_class, hint) in classes {
        if has_class {
            present = present.saturating_add(1);
        } else {
            feedback.push(hint.to_string());
        }
    }
    score = score.saturating_add(present);

    if present == 4 && length >= VERY_STRONG_PASSWORD_LENGTH {
        score = score.saturating_add(1);
    }

    let score = score.min(MAX_SCORE);
    KeyStrengthScore {
        score,
        feedback: if feedback.is_empty() {
            "Good password strength".to_string()
        } else {
            feedback.join(", ")
        },
        level: StrengthLevel::from_score(score),
    }
}
