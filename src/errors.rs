use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in SeedSeal.
///
/// The first four variants are the only ones the cipher core produces.
/// None of them carry plaintext, passwords or key bytes.
#[derive(Debug, Error)]
pub enum SeedSealError {
    // --- Cipher errors ---
    #[error("Encryption failed")]
    CryptoOperation,

    #[error("Invalid payload format: {0}")]
    Format(String),

    #[error("Unsupported payload format (version {version}, algorithm {algorithm})")]
    UnsupportedFormat { version: String, algorithm: String },

    #[error("Decryption failed — wrong password or corrupted data")]
    DecryptionFailed,

    // --- Input errors ---
    #[error("Mnemonic should be 12-24 words (got {0})")]
    InvalidMnemonic(usize),

    #[error("Please enter {0}")]
    EmptyInput(&'static str),

    #[error("Invalid input file: {0}")]
    InvalidInputFile(String),

    #[error("Refusing to overwrite existing file {0}")]
    OutputExists(PathBuf),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,

    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    #[error("Audit error: {0}")]
    AuditError(String),
}

/// Convenience type alias for SeedSeal results.
pub type Result<T> = std::result::Result<T, SeedSealError>;
