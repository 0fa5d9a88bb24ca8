//! Password strength scoring and strong password generation.
//!
//! Scoring is advisory: callers show the feedback and let the user decide.
//! Nothing in the cipher refuses a weak password.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use zeroize::Zeroizing;

/// Minimum length (in characters) for a password to count as strong.
pub const MIN_STRONG_LEN: usize = 12;

/// Symbols that count toward the "symbol" category.
const SCORED_SYMBOLS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const GENERATOR_SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Length of passwords produced by `generate_strong_password`.
pub const GENERATED_LEN: usize = 16;

/// Passwords containing any of these (case-insensitive) are flagged.
const COMMON_PASSWORDS: &[&str] = &[
    "password",
    "123456",
    "12345678",
    "qwerty",
    "abc123",
    "password123",
    "admin",
    "letmein",
    "welcome",
    "monkey",
];

/// Categorical feedback for a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthFeedback {
    TooShort,
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl fmt::Display for StrengthFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "Password must be at least {MIN_STRONG_LEN} characters"),
            Self::VeryWeak => f.write_str("Very weak password"),
            Self::Weak => f.write_str("Weak password"),
            Self::Medium => f.write_str("Medium strength password"),
            Self::Strong => f.write_str("Strong password"),
            Self::VeryStrong => f.write_str("Very strong password"),
        }
    }
}

/// Result of `evaluate_password_strength`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PasswordStrength {
    pub is_strong: bool,
    /// Satisfied categories divided by 4, in `[0, 1]`.
    pub score: f64,
    /// Number of satisfied categories (0-4).
    pub categories: u8,
    pub feedback: StrengthFeedback,
}

/// Score a password on four character categories plus length.
///
/// Categories: uppercase, lowercase, digit, symbol.  A password is strong
/// when it has at least 12 characters and 3 categories.  The length check
/// wins the feedback when the password is too short.
///
/// Length is counted in Unicode scalar values, not bytes or UTF-16 code
/// units: an emoji counts as one character.
pub fn evaluate_password_strength(password: &str) -> PasswordStrength {
    let checks = [
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| SCORED_SYMBOLS.contains(c)),
    ];
    let categories = checks.iter().filter(|&&hit| hit).count() as u8;
    let length = password.chars().count();

    let feedback = if length < MIN_STRONG_LEN {
        StrengthFeedback::TooShort
    } else {
        match categories {
            0 => StrengthFeedback::VeryWeak,
            1 => StrengthFeedback::Weak,
            2 => StrengthFeedback::Medium,
            3 => StrengthFeedback::Strong,
            _ => StrengthFeedback::VeryStrong,
        }
    };

    PasswordStrength {
        is_strong: length >= MIN_STRONG_LEN && categories >= 3,
        score: f64::from(categories) / 4.0,
        categories,
        feedback,
    }
}

/// True if the password contains a well-known weak password.
pub fn is_common_password(password: &str) -> bool {
    let lowered = Zeroizing::new(password.to_lowercase());
    COMMON_PASSWORDS.iter().any(|weak| lowered.contains(weak))
}

/// Generate a random 16-character password with every category present.
///
/// One character is drawn from each category, the rest from the union,
/// and the result is shuffled.
pub fn generate_strong_password() -> Zeroizing<String> {
    let mut rng = rand::rng();
    let all: Vec<u8> = [UPPER, LOWER, DIGITS, GENERATOR_SYMBOLS].concat();

    let mut chars = Zeroizing::new(Vec::with_capacity(GENERATED_LEN));
    for set in [UPPER, LOWER, DIGITS, GENERATOR_SYMBOLS] {
        chars.push(set[rng.random_range(0..set.len())]);
    }
    while chars.len() < GENERATED_LEN {
        chars.push(all[rng.random_range(0..all.len())]);
    }
    chars.shuffle(&mut rng);

    Zeroizing::new(chars.iter().map(|&b| char::from(b)).collect())
}
