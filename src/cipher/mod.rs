//! Mnemonic cipher — password-based encryption of wallet mnemonics.
//!
//! This module provides:
//! - The versioned payload format (`format`)
//! - Mnemonic input normalization for the front end (`mnemonic`)
//! - `encrypt` / `decrypt` and their blocking counterparts (this file)
//!
//! The operations are stateless.  The derived key lives in a
//! `DerivedKey` and the plaintext in `Zeroizing` buffers, so both are
//! wiped on every return path.  Copies made outside this crate (terminal
//! buffers, allocator reuse) are out of reach, so scrubbing is best effort.

pub mod format;
pub mod mnemonic;

pub use format::{EncryptedPayload, PayloadInfo, ALGORITHM, FORMAT_VERSION};
pub use mnemonic::{normalize_mnemonic, MAX_WORDS, MIN_WORDS};

use zeroize::{Zeroize, Zeroizing};

use crate::crypto::{self, DEFAULT_ITERATIONS};
use crate::errors::{Result, SeedSealError};

/// Encrypt a mnemonic under a password and return the serialized payload.
///
/// Runs PBKDF2 on the blocking thread pool so the calling task is not
/// stalled.  Strength is not checked here; see
/// `crypto::evaluate_password_strength`.
pub async fn encrypt(mnemonic: &str, password: &str) -> Result<String> {
    let mnemonic = Zeroizing::new(mnemonic.to_owned());
    let password = Zeroizing::new(password.to_owned());

    tokio::task::spawn_blocking(move || encrypt_blocking(&mnemonic, &password))
        .await
        .map_err(|e| {
            tracing::error!("encryption task did not complete: {e}");
            SeedSealError::CryptoOperation
        })?
}

/// Decrypt a serialized payload with a password and return the mnemonic.
///
/// If the returned future is dropped early the blocking task still runs
/// to completion and drops its key normally.
pub async fn decrypt(payload: &str, password: &str) -> Result<Zeroizing<String>> {
    let payload = payload.to_owned();
    let password = Zeroizing::new(password.to_owned());

    tokio::task::spawn_blocking(move || decrypt_blocking(&payload, &password))
        .await
        .map_err(|e| {
            tracing::error!("decryption task did not complete: {e}");
            SeedSealError::DecryptionFailed
        })?
}

/// Synchronous form of `encrypt`.
pub fn encrypt_blocking(mnemonic: &str, password: &str) -> Result<String> {
    if mnemonic.trim().is_empty() || password.trim().is_empty() {
        return Err(SeedSealError::CryptoOperation);
    }

    let mut salt = Zeroizing::new(crypto::generate_salt());
    let mut iv = Zeroizing::new(crypto::generate_nonce());

    let key = crypto::derive_key(password.as_bytes(), &salt[..], DEFAULT_ITERATIONS)?;
    let ciphertext = crypto::encrypt(&key, &iv, mnemonic.as_bytes())?;
    drop(key);

    let payload = EncryptedPayload::new(&salt, &iv, ciphertext, DEFAULT_ITERATIONS);
    salt.zeroize();
    iv.zeroize();

    tracing::debug!(
        iterations = payload.iterations,
        ciphertext_len = payload.ciphertext.len(),
        "mnemonic encrypted"
    );

    payload.to_json().map_err(|_| SeedSealError::CryptoOperation)
}

/// Synchronous form of `decrypt`.
///
/// Checks run in this order, and each one stops the call:
/// 1. payload is a JSON object with `version` and `algorithm` (`Format`)
/// 2. version and algorithm match (`UnsupportedFormat`), before the byte
///    fields are decoded
/// 3. remaining fields decode and have sane sizes (`Format`)
/// 4. key derivation + tag check + UTF-8 (`DecryptionFailed`)
pub fn decrypt_blocking(payload: &str, password: &str) -> Result<Zeroizing<String>> {
    let payload = EncryptedPayload::parse_supported(payload)?;
    payload.validate_shape()?;

    let nonce = payload.nonce()?;
    let key = crypto::derive_key(password.as_bytes(), &payload.salt, payload.iterations)
        .map_err(|_| SeedSealError::DecryptionFailed)?;

    let plaintext = crypto::decrypt(&key, &nonce, &payload.ciphertext).map_err(|e| {
        tracing::debug!("payload did not authenticate");
        e
    })?;
    drop(key);

    // A valid tag over non-UTF-8 bytes is reported the same way as a bad tag.
    let text = std::str::from_utf8(&plaintext).map_err(|_| SeedSealError::DecryptionFailed)?;

    tracing::debug!(iterations = payload.iterations, "payload decrypted");
    Ok(Zeroizing::new(text.to_owned()))
}

/// Read payload metadata without a password.
///
/// Unsupported versions are still described; `PayloadInfo::supported`
/// tells the caller whether `decrypt` will accept them.
pub fn inspect(payload: &str) -> Result<PayloadInfo> {
    Ok(EncryptedPayload::parse(payload)?.info())
}

/// True if the payload parses, carries the current version and algorithm,
/// and has well-formed fields.
pub fn is_supported(payload: &str) -> bool {
    EncryptedPayload::parse_supported(payload)
        .and_then(|p| p.validate_shape())
        .is_ok()
}
