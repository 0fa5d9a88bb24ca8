//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The iteration count is a parameter because decryption must honour the
//! count recorded in the payload.  Encryption always uses
//! `DEFAULT_ITERATIONS`.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;
use hmac::Hmac;
use sha2::Sha256;

use super::keys::DerivedKey;
use crate::errors::{Result, SeedSealError};

/// Length of the salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// PBKDF2 iteration count written into every new payload.
pub const DEFAULT_ITERATIONS: u32 = 100_000;

/// Upper bound accepted from a payload, so a hostile payload cannot pin
/// the CPU for minutes.
pub const MAX_ITERATIONS: u32 = 10_000_000;

/// Derive a 32-byte AES-256 key from a password and salt.
///
/// The same password + salt + iterations will always produce the same key.
/// An empty password or an iteration count outside `1..=MAX_ITERATIONS`
/// is rejected.
pub fn derive_key(password: &[u8], salt: &[u8], iterations: u32) -> Result<DerivedKey> {
    if password.is_empty() {
        return Err(SeedSealError::CryptoOperation);
    }
    if iterations == 0 || iterations > MAX_ITERATIONS {
        return Err(SeedSealError::CryptoOperation);
    }

    let mut key = DerivedKey::zeroed();
    pbkdf2::pbkdf2::<Hmac<Sha256>>(password, salt, iterations, key.as_mut_bytes())
        .map_err(|_| SeedSealError::CryptoOperation)?;

    Ok(key)
}

/// Generate a cryptographically random 16-byte salt.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    salt
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 7914 section 11 test vector for PBKDF2-HMAC-SHA256, c = 1.
    #[test]
    fn matches_known_vector() {
        let key = derive_key(b"passwd", b"salt", 1).unwrap();
        assert_eq!(
            &key.as_bytes()[..],
            &[
                0x55, 0xac, 0x04, 0x6e, 0x56, 0xe3, 0x08, 0x9f, 0xec, 0x16, 0x91, 0xc2, 0x25, 0x44,
                0xb6, 0x05, 0xf9, 0x41, 0x85, 0x21, 0x6d, 0xde, 0x04, 0x65, 0xe6, 0x8b, 0x9d, 0x57,
                0xc2, 0x0d, 0xac, 0xbc,
            ]
        );
    }

    #[test]
    fn iteration_count_changes_key() {
        let salt = [7u8; SALT_LEN];
        let a = derive_key(b"pw", &salt, 1).unwrap();
        let b = derive_key(b"pw", &salt, 2).unwrap();
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn rejects_empty_password() {
        assert!(derive_key(b"", &[0u8; SALT_LEN], 1).is_err());
    }

    #[test]
    fn rejects_out_of_range_iterations() {
        assert!(derive_key(b"pw", &[0u8; SALT_LEN], 0).is_err());
        assert!(derive_key(b"pw", &[0u8; SALT_LEN], MAX_ITERATIONS + 1).is_err());
    }

    #[test]
    fn salts_are_random() {
        assert_ne!(generate_salt(), generate_salt());
    }
}
