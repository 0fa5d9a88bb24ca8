//! Serialized payload format.
//!
//! A payload is a single JSON object:
//!
//! ```text
//! {"salt":[16 ints],"iv":[12 ints],"ciphertext":[N ints],
//!  "version":"1.0","algorithm":"AES-GCM-PBKDF2","iterations":100000}
//! ```
//!
//! Byte fields are arrays of integers 0-255, not base64, so payloads
//! written by older tools stay readable.  `version` and `algorithm` must
//! match exactly; there is no fallback decoding.

use serde::{Deserialize, Serialize};

use crate::crypto::{DEFAULT_ITERATIONS, MAX_ITERATIONS, NONCE_LEN, SALT_LEN, TAG_LEN};
use crate::errors::{Result, SeedSealError};

/// The only format version this build reads or writes.
pub const FORMAT_VERSION: &str = "1.0";

/// Cipher suite identifier.
pub const ALGORITHM: &str = "AES-GCM-PBKDF2";

fn default_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

/// An encrypted mnemonic as stored or transmitted.
///
/// Field order matches the serialized layout above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedPayload {
    pub salt: Vec<u8>,
    pub iv: Vec<u8>,
    pub ciphertext: Vec<u8>,
    pub version: String,
    pub algorithm: String,
    /// Payloads that predate this field were always written with 100 000.
    #[serde(default = "default_iterations")]
    pub iterations: u32,
}

/// Metadata about a payload, readable without the password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadInfo {
    pub version: String,
    pub algorithm: String,
    pub iterations: u32,
    /// Ciphertext length in bytes, tag included.
    pub data_size: usize,
    /// Whether this build can decrypt the payload.
    pub supported: bool,
}

impl EncryptedPayload {
    /// Build a current-version payload from freshly generated parts.
    pub fn new(
        salt: &[u8; SALT_LEN],
        iv: &[u8; NONCE_LEN],
        ciphertext: Vec<u8>,
        iterations: u32,
    ) -> Self {
        Self {
            salt: salt.to_vec(),
            iv: iv.to_vec(),
            ciphertext,
            version: FORMAT_VERSION.to_string(),
            algorithm: ALGORITHM.to_string(),
            iterations,
        }
    }

    /// Parse payload text into its fields.
    ///
    /// Fails with `Format` on invalid JSON, a missing field, or a value of
    /// the wrong type (including byte values above 255).
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text.trim()).map_err(|e| SeedSealError::Format(e.to_string()))
    }

    /// Parse a payload this build can decrypt.
    ///
    /// `version` and `algorithm` are checked on the raw JSON first, so a
    /// payload from another format version is `UnsupportedFormat` even when
    /// its other fields use a different encoding.  Only then are the byte
    /// fields decoded.
    pub fn parse_supported(text: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(text.trim()).map_err(|e| SeedSealError::Format(e.to_string()))?;
        let header = value
            .as_object()
            .ok_or_else(|| SeedSealError::Format("payload must be a JSON object".into()))?;

        let version = header_field(header, "version")?;
        let algorithm = header_field(header, "algorithm")?;
        if version.as_str() != Some(FORMAT_VERSION) || algorithm.as_str() != Some(ALGORITHM) {
            return Err(SeedSealError::UnsupportedFormat {
                version: display_value(version),
                algorithm: display_value(algorithm),
            });
        }

        serde_json::from_value(value).map_err(|e| SeedSealError::Format(e.to_string()))
    }

    /// Serialize to the compact JSON form.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| SeedSealError::SerializationError(format!("payload: {e}")))
    }

    /// True if `version` and `algorithm` are exactly the ones this build writes.
    pub fn is_current(&self) -> bool {
        self.version == FORMAT_VERSION && self.algorithm == ALGORITHM
    }

    /// Check field sizes before any key derivation happens.
    pub fn validate_shape(&self) -> Result<()> {
        if self.salt.len() != SALT_LEN {
            return Err(SeedSealError::Format(format!(
                "salt must be {SALT_LEN} bytes, got {}",
                self.salt.len()
            )));
        }
        if self.iv.len() != NONCE_LEN {
            return Err(SeedSealError::Format(format!(
                "iv must be {NONCE_LEN} bytes, got {}",
                self.iv.len()
            )));
        }
        if self.ciphertext.len() < TAG_LEN {
            return Err(SeedSealError::Format(format!(
                "ciphertext must be at least {TAG_LEN} bytes, got {}",
                self.ciphertext.len()
            )));
        }
        if self.iterations == 0 || self.iterations > MAX_ITERATIONS {
            return Err(SeedSealError::Format(format!(
                "iterations must be between 1 and {MAX_ITERATIONS}, got {}",
                self.iterations
            )));
        }
        Ok(())
    }

    /// The nonce as a fixed-size array.  Call `validate_shape` first.
    pub fn nonce(&self) -> Result<[u8; NONCE_LEN]> {
        self.iv
            .as_slice()
            .try_into()
            .map_err(|_| SeedSealError::Format("iv has the wrong length".into()))
    }

    pub fn info(&self) -> PayloadInfo {
        PayloadInfo {
            version: self.version.clone(),
            algorithm: self.algorithm.clone(),
            iterations: self.iterations,
            data_size: self.ciphertext.len(),
            supported: self.is_current(),
        }
    }
}

fn header_field<'a>(
    header: &'a serde_json::Map<String, serde_json::Value>,
    name: &str,
) -> Result<&'a serde_json::Value> {
    header
        .get(name)
        .ok_or_else(|| SeedSealError::Format(format!("missing field `{name}`")))
}

/// Strings without their quotes, anything else as JSON.
fn display_value(value: &serde_json::Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}
