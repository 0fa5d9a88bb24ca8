//! Cryptographic primitives for SeedSeal.
//!
//! This module provides:
//! - PBKDF2-HMAC-SHA256 password-based key derivation (`kdf`)
//! - AES-256-GCM encryption and decryption with an explicit nonce (`encryption`)
//! - A zeroize-on-drop wrapper for derived keys (`keys`)
//! - Password strength scoring and strong password generation (`strength`)

pub mod encryption;
pub mod kdf;
pub mod keys;
pub mod strength;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, derive_key, ...};
pub use encryption::{decrypt, encrypt, generate_nonce, NONCE_LEN, TAG_LEN};
pub use kdf::{derive_key, generate_salt, DEFAULT_ITERATIONS, MAX_ITERATIONS, SALT_LEN};
pub use keys::{DerivedKey, KEY_LEN};
pub use strength::{
    evaluate_password_strength, generate_strong_password, is_common_password, PasswordStrength,
    StrengthFeedback,
};
