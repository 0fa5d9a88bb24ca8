use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SeedSealError};

/// Project-level configuration, loaded from `.seedseal.toml`.
///
/// Every field has a sensible default so SeedSeal works out-of-the-box
/// without any config file at all.  None of these settings affect the
/// payload format; the cipher parameters are fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory (relative to the project dir) where `--save` writes payloads.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// File name prefix for saved payloads.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// Seconds before copied text is removed from the clipboard (0 = never).
    #[serde(default = "default_clipboard_clear_secs")]
    pub clipboard_clear_secs: u64,

    /// Whether operations are recorded in the audit log.
    #[serde(default = "default_audit_log")]
    pub audit_log: bool,

    /// Directory (relative to the project dir) holding `audit.db`.
    #[serde(default = "default_audit_dir")]
    pub audit_dir: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_file_prefix() -> String {
    "encrypted-mnemonic".to_string()
}

fn default_clipboard_clear_secs() -> u64 {
    10
}

fn default_audit_log() -> bool {
    true
}

fn default_audit_dir() -> String {
    ".seedseal".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            file_prefix: default_file_prefix(),
            clipboard_clear_secs: default_clipboard_clear_secs(),
            audit_log: default_audit_log(),
            audit_dir: default_audit_dir(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    const FILE_NAME: &'static str = ".seedseal.toml";

    /// Load settings from `<project_dir>/.seedseal.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            tracing::debug!("no {} in {}, using defaults", Self::FILE_NAME, project_dir.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            SeedSealError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        if settings.file_prefix.is_empty()
            || settings
                .file_prefix
                .contains(|c: char| c == '/' || c == '\\')
        {
            return Err(SeedSealError::ConfigError(format!(
                "file_prefix '{}' must be a non-empty file name",
                settings.file_prefix
            )));
        }

        Ok(settings)
    }

    /// Build the path for a saved payload, stamped with `now`.
    ///
    /// With defaults: `<project_dir>/encrypted-mnemonic-2024-05-01T12-30-00-123Z.txt`
    pub fn saved_payload_path(&self, project_dir: &Path, now: DateTime<Utc>) -> PathBuf {
        let stamp = now.format("%Y-%m-%dT%H-%M-%S-%3fZ");
        project_dir
            .join(&self.output_dir)
            .join(format!("{}-{stamp}.txt", self.file_prefix))
    }

    /// Directory holding the audit database.
    pub fn audit_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.audit_dir)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
