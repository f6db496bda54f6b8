//! SQLite-backed record store for sealed credentials.
//!
//! The store never sees plaintext: callers hand it ciphertext blobs and
//! get them back verbatim.  Uniqueness of `(server, account)` is
//! enforced by the schema, and upserts go through a single
//! `ON CONFLICT DO UPDATE` statement so a replace is atomic and keeps
//! the original surrogate id.  Cross-process safety is delegated to
//! SQLite's own file locking.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use crate::errors::{HostVaultError, Result};

use super::record::CredentialRecord;

/// Handle to the credentials table.
pub struct RecordStore {
    conn: Connection,
}

impl RecordStore {
    /// Open (or create) the credential database at `path`.
    ///
    /// Creates the parent directory with owner-only permissions, opens
    /// the connection, restricts the database file to the owner, and
    /// ensures the schema exists.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(dir) = path.parent() {
            // Only tighten permissions on a directory we created
            // ourselves — never on a pre-existing shared one.
            if !dir.as_os_str().is_empty() && !dir.exists() {
                std::fs::create_dir_all(dir)?;

                #[cfg(unix)]
                {
                    use std::os::unix::fs::PermissionsExt;
                    let perms = std::fs::Permissions::from_mode(0o700);
                    std::fs::set_permissions(dir, perms)?;
                }
            }
        }

        let conn = Connection::open(path)
            .map_err(|e| HostVaultError::StorageIo(format!("{}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        let store = Self { conn };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Idempotently create the `credentials` table.  Safe on every open.
    pub fn ensure_schema(&self) -> Result<()> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS credentials (
                    id                INTEGER PRIMARY KEY AUTOINCREMENT,
                    server            TEXT NOT NULL,
                    account           TEXT NOT NULL,
                    secret_ciphertext TEXT NOT NULL,
                    role              TEXT NOT NULL DEFAULT '',
                    UNIQUE(server, account)
                );",
            )
            .map_err(|e| HostVaultError::StorageIntegrity(format!("create table: {e}")))
    }

    /// Insert a credential or replace the secret and role of the
    /// existing `(server, account)` record in place.
    ///
    /// A replace preserves the record's id — the row is updated, not
    /// deleted and re-inserted.
    pub fn upsert(&self, server: &str, account: &str, ciphertext: &str, role: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO credentials (server, account, secret_ciphertext, role)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(server, account) DO UPDATE SET
                     secret_ciphertext = excluded.secret_ciphertext,
                     role = excluded.role",
                params![server, account, ciphertext, role],
            )
            .map_err(|e| HostVaultError::StorageIo(format!("upsert: {e}")))?;
        Ok(())
    }

    /// Exact-match lookup.  Absence is `Ok(None)`, not an error.
    pub fn get(&self, server: &str, account: &str) -> Result<Option<CredentialRecord>> {
        self.conn
            .query_row(
                "SELECT id, server, account, secret_ciphertext, role
                 FROM credentials
                 WHERE server = ?1 AND account = ?2",
                params![server, account],
                Self::row_to_record,
            )
            .optional()
            .map_err(|e| HostVaultError::StorageIntegrity(format!("get: {e}")))
    }

    /// All records in insertion (id) order.
    pub fn list(&self) -> Result<Vec<CredentialRecord>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, server, account, secret_ciphertext, role
                 FROM credentials
                 ORDER BY id",
            )
            .map_err(|e| HostVaultError::StorageIntegrity(format!("list prepare: {e}")))?;

        let rows = stmt
            .query_map([], Self::row_to_record)
            .map_err(|e| HostVaultError::StorageIntegrity(format!("list exec: {e}")))?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row.map_err(|e| HostVaultError::StorageIntegrity(format!("list row: {e}")))?);
        }
        Ok(records)
    }

    /// Remove the matching record.  Deleting a non-existent pair is a
    /// no-op.
    pub fn delete(&self, server: &str, account: &str) -> Result<()> {
        self.conn
            .execute(
                "DELETE FROM credentials WHERE server = ?1 AND account = ?2",
                params![server, account],
            )
            .map_err(|e| HostVaultError::StorageIo(format!("delete: {e}")))?;
        Ok(())
    }

    /// Close the underlying connection.  Dropping the store closes it
    /// too; this variant surfaces the error.
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| HostVaultError::StorageIo(format!("close: {e}")))
    }

    fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<CredentialRecord> {
        Ok(CredentialRecord {
            id: row.get(0)?,
            server: row.get(1)?,
            account: row.get(2)?,
            secret_ciphertext: row.get(3)?,
            role: row.get(4)?,
        })
    }
}
