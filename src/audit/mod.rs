//! Audit log — SQLite-based history of vault operations.
//!
//! Records which credential was touched (`save`, `delete`, ...) in
//! `audit.db` next to the credential database.  Secrets are never
//! written here, only server and account names.
//!
//! Designed for graceful degradation: if the database can't be opened
//! or written to, vault operations continue without logging.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rusqlite::Connection;

use crate::errors::{HostVaultError, Result};

/// A single audit log entry.
#[derive(Debug, Clone)]
pub struct AuditEntry {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub operation: String,
    pub server: Option<String>,
    pub account: Option<String>,
}

/// SQLite-backed audit log.
pub struct AuditLog {
    conn: Connection,
}

impl AuditLog {
    /// Open (or create) the audit database next to the credential
    /// database at `db_path`.
    ///
    /// Returns `None` if it can't be opened — callers treat this as
    /// "audit logging unavailable" and continue normally.
    pub fn open(db_path: &Path) -> Option<Self> {
        let audit_path = Self::audit_path(db_path)?;
        let conn = Connection::open(&audit_path).ok()?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            let _ = std::fs::set_permissions(&audit_path, perms);
        }

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS audit_log (
                id        INTEGER PRIMARY KEY AUTOINCREMENT,
                timestamp TEXT NOT NULL,
                operation TEXT NOT NULL,
                server    TEXT,
                account   TEXT
            );",
        )
        .ok()?;

        Some(Self { conn })
    }

    /// Record an operation.  Fire-and-forget — errors are ignored so
    /// logging can never fail the parent vault operation.
    pub fn log(&self, operation: &str, server: Option<&str>, account: Option<&str>) {
        let now = Utc::now().to_rfc3339();
        let _ = self.conn.execute(
            "INSERT INTO audit_log (timestamp, operation, server, account)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![now, operation, server, account],
        );
    }

    /// Return up to `limit` entries, most recent first.
    pub fn query(&self, limit: usize) -> Result<Vec<AuditEntry>> {
        let limit_i64 = i64::try_from(limit).unwrap_or(i64::MAX);
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, timestamp, operation, server, account
                 FROM audit_log
                 ORDER BY id DESC
                 LIMIT ?1",
            )
            .map_err(|e| HostVaultError::Audit(format!("query prepare: {e}")))?;

        let rows = stmt
            .query_map([limit_i64], |row| {
                let ts_str: String = row.get(1)?;
                let timestamp = DateTime::parse_from_rfc3339(&ts_str)
                    .map_or_else(|_| Utc::now(), |dt| dt.with_timezone(&Utc));

                Ok(AuditEntry {
                    id: row.get(0)?,
                    timestamp,
                    operation: row.get(2)?,
                    server: row.get(3)?,
                    account: row.get(4)?,
                })
            })
            .map_err(|e| HostVaultError::Audit(format!("query exec: {e}")))?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row.map_err(|e| HostVaultError::Audit(format!("row parse: {e}")))?);
        }
        Ok(entries)
    }

    /// Path of the audit database for a given credential database path.
    fn audit_path(db_path: &Path) -> Option<PathBuf> {
        Some(db_path.parent()?.join("audit.db"))
    }
}

/// Log an audit event beside the credential database, ignoring any
/// errors.  Safe to call from any command.
pub fn log_audit(db_path: &Path, operation: &str, server: Option<&str>, account: Option<&str>) {
    if let Some(audit) = AuditLog::open(db_path) {
        audit.log(operation, server, account);
    }
}
