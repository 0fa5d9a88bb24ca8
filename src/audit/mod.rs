//! Audit log — SQLite-based operation history.
//!
//! Stores a record of every encrypt/decrypt/inspect operation in a local
//! SQLite database at `<audit_dir>/audit.db`.  Entries hold the operation
//! name and non-secret details (sizes, output destinations, outcome);
//! never mnemonics, passwords or payload bytes.
//!
//! Designed for graceful degradation: if the database can't be opened or
//! written to, operations silently continue without logging.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rusqlite::Connection;

use crate::config::Settings;
use crate::errors::{Result, SeedSealError};

/// A single audit log entry.
#[derive(Debug, Clone)]
pub struct AuditEntry {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub operation: String,
    pub details: Option<String>,
}

/// SQLite-backed audit log.
pub struct AuditLog {
    conn: Connection,
}

impl AuditLog {
    /// Open (or create) the audit database at `<audit_dir>/audit.db`.
    ///
    /// Returns `None` if the database can't be opened; callers carry on
    /// without an audit trail.
    pub fn open(audit_dir: &Path) -> Option<Self> {
        let db_path = Self::db_path(audit_dir);
        let conn = Connection::open(&db_path).ok()?;

        // Set restrictive permissions on the audit database (owner-only).
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            let _ = std::fs::set_permissions(&db_path, perms);
        }

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS audit_log (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                timestamp   TEXT NOT NULL,
                operation   TEXT NOT NULL,
                details     TEXT
            );",
        )
        .ok()?;

        Some(Self { conn })
    }

    /// Record an operation.  Insert errors are traced, never returned.
    pub fn log(&self, operation: &str, details: Option<&str>) {
        let now = Utc::now().to_rfc3339();
        if let Err(e) = self.conn.execute(
            "INSERT INTO audit_log (timestamp, operation, details) VALUES (?1, ?2, ?3)",
            rusqlite::params![now, operation, details],
        ) {
            tracing::warn!("audit insert failed: {e}");
        }
    }

    /// Query recent audit entries, most recent first.
    ///
    /// `since` keeps only entries at or after that instant.
    pub fn query(&self, limit: usize, since: Option<DateTime<Utc>>) -> Result<Vec<AuditEntry>> {
        let limit_i64 = i64::try_from(limit).unwrap_or(i64::MAX);
        let since_str = since.map(|ts| ts.to_rfc3339());

        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, timestamp, operation, details
                 FROM audit_log
                 WHERE ?1 IS NULL OR timestamp >= ?1
                 ORDER BY id DESC
                 LIMIT ?2",
            )
            .map_err(|e| SeedSealError::AuditError(format!("query prepare: {e}")))?;

        let rows = stmt
            .query_map(rusqlite::params![since_str, limit_i64], |row| {
                let ts_str: String = row.get(1)?;
                let timestamp = DateTime::parse_from_rfc3339(&ts_str)
                    .map_or_else(|_| Utc::now(), |dt| dt.with_timezone(&Utc));

                Ok(AuditEntry {
                    id: row.get(0)?,
                    timestamp,
                    operation: row.get(2)?,
                    details: row.get(3)?,
                })
            })
            .map_err(|e| SeedSealError::AuditError(format!("query exec: {e}")))?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row.map_err(|e| SeedSealError::AuditError(format!("row parse: {e}")))?);
        }

        Ok(entries)
    }

    /// Return the path to the audit database (for testing/display).
    pub fn db_path(audit_dir: &Path) -> PathBuf {
        audit_dir.join("audit.db")
    }
}

/// Convenience helper: log an audit event for the current project.
///
/// Creates the audit directory if needed, logs the event, and ignores any
/// errors.  Never fails the calling command.
pub fn log_audit(settings: &Settings, project_dir: &Path, op: &str, details: Option<&str>) {
    if !settings.audit_log {
        return;
    }

    let audit_dir = settings.audit_path(project_dir);
    if std::fs::create_dir_all(&audit_dir).is_err() {
        tracing::warn!("cannot create audit directory {}", audit_dir.display());
        return;
    }

    if let Some(audit) = AuditLog::open(&audit_dir) {
        audit.log(op, details);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn open_creates_database() {
        let dir = TempDir::new().unwrap();
        let audit = AuditLog::open(dir.path());
        assert!(audit.is_some(), "should open successfully");
        assert!(dir.path().join("audit.db").exists());
    }

    #[test]
    fn log_and_query_roundtrip() {
        let dir = TempDir::new().unwrap();
        let audit = AuditLog::open(dir.path()).unwrap();

        audit.log("encrypt", Some("stdout"));
        audit.log("decrypt", Some("ok"));
        audit.log("decrypt", Some("failed"));

        let entries = audit.query(10, None).unwrap();
        assert_eq!(entries.len(), 3);

        // Most recent first.
        assert_eq!(entries[0].details.as_deref(), Some("failed"));
        assert_eq!(entries[2].operation, "encrypt");
    }

    #[test]
    fn query_with_limit() {
        let dir = TempDir::new().unwrap();
        let audit = AuditLog::open(dir.path()).unwrap();

        for _ in 0..10 {
            audit.log("inspect", None);
        }

        let entries = audit.query(3, None).unwrap();
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn query_with_since_filter() {
        let dir = TempDir::new().unwrap();
        let audit = AuditLog::open(dir.path()).unwrap();

        audit.log("encrypt", None);

        let past = Utc::now() - chrono::Duration::hours(1);
        assert_eq!(audit.query(10, Some(past)).unwrap().len(), 1);

        let future = Utc::now() + chrono::Duration::hours(1);
        assert!(audit.query(10, Some(future)).unwrap().is_empty());
    }

    #[test]
    fn log_audit_respects_setting() {
        let dir = TempDir::new().unwrap();
        let settings = Settings {
            audit_log: false,
            ..Settings::default()
        };

        log_audit(&settings, dir.path(), "encrypt", None);
        assert!(!settings.audit_path(dir.path()).exists());
    }

    #[test]
    fn log_audit_creates_directory() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::default();

        log_audit(&settings, dir.path(), "encrypt", Some("stdout"));

        let audit = AuditLog::open(&settings.audit_path(dir.path())).unwrap();
        assert_eq!(audit.query(10, None).unwrap().len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn audit_db_has_restrictive_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let _audit = AuditLog::open(dir.path()).unwrap();

        let perms = std::fs::metadata(AuditLog::db_path(dir.path()))
            .unwrap()
            .permissions();
        assert_eq!(perms.mode() & 0o777, 0o600);
    }
}
