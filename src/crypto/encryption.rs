//! AES-256-GCM authenticated encryption.
//!
//! Unlike a self-contained blob format, the payload stores the nonce in
//! its own field, so these helpers take the nonce as an argument and
//! return the bare ciphertext:
//!   [ ciphertext | 16-byte auth tag ]

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Nonce};
use zeroize::Zeroizing;

use super::keys::DerivedKey;
use crate::errors::{Result, SeedSealError};

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// Generate a random 12-byte nonce.
pub fn generate_nonce() -> [u8; NONCE_LEN] {
    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);
    nonce
}

/// Encrypt `plaintext` under `key` and `nonce`, with no associated data.
///
/// Returns the ciphertext with the tag appended.
pub fn encrypt(key: &DerivedKey, nonce: &[u8; NONCE_LEN], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher =
        Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| SeedSealError::CryptoOperation)?;

    cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|_| SeedSealError::CryptoOperation)
}

/// Decrypt data that was produced by `encrypt`.
///
/// Every failure (short input, wrong key, flipped bit) is reported as
/// `DecryptionFailed`.  The plaintext comes back in a zeroizing buffer.
pub fn decrypt(
    key: &DerivedKey,
    nonce: &[u8; NONCE_LEN],
    ciphertext: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    if ciphertext.len() < TAG_LEN {
        return Err(SeedSealError::DecryptionFailed);
    }

    let cipher =
        Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| SeedSealError::DecryptionFailed)?;

    // Decrypt and verify the auth tag.
    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| SeedSealError::DecryptionFailed)?;

    Ok(Zeroizing::new(plaintext))
}
