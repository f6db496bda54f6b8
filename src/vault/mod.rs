//! The credential vault: key derivation + AEAD + record store behind a
//! single handle.
//!
//! `Vault` is the only surface the CLI commands call.  It is opened
//! with the master passphrase, exposes plaintext-in/plaintext-out
//! operations, and persists only ciphertext.  Single-threaded and
//! synchronous; callers sharing a handle across threads must serialize
//! access externally.

pub mod record;
pub mod store;

pub use record::{Credential, CredentialRecord};
pub use store::RecordStore;

use std::path::Path;

use zeroize::Zeroize;

use crate::crypto::{derive_master_key, CredentialCipher};
use crate::errors::{HostVaultError, Result};

/// An open vault: an initialized cipher plus a live store connection.
pub struct Vault {
    cipher: CredentialCipher,
    store: RecordStore,
}

impl Vault {
    /// Open the vault at `db_path` with the master passphrase.
    ///
    /// Derives the key, opens the database, and ensures the schema —
    /// the first failure propagates and no partially-open vault is
    /// observable.  A wrong passphrase does not fail here: it surfaces
    /// as `Decryption` on the first read.
    pub fn open(db_path: &Path, passphrase: &[u8]) -> Result<Self> {
        let key = derive_master_key(passphrase)?;
        let cipher = CredentialCipher::new(key)?;
        let store = RecordStore::open(db_path)?;
        Ok(Self { cipher, store })
    }

    /// Seal `secret` and upsert the record.  The plaintext never
    /// reaches the store.
    pub fn save(&self, server: &str, account: &str, secret: &str, role: &str) -> Result<()> {
        let ciphertext = self.cipher.seal(secret.as_bytes())?;
        self.store.upsert(server, account, &ciphertext, role)
    }

    /// Fetch and decrypt one secret.
    ///
    /// `Ok(None)` when no record matches; `Decryption` when the record
    /// exists but its blob will not open (wrong passphrase or
    /// tampering).  The two cases are distinct at this boundary.
    pub fn fetch(&self, server: &str, account: &str) -> Result<Option<String>> {
        let Some(record) = self.store.get(server, account)? else {
            return Ok(None);
        };

        let plaintext = self.cipher.open(&record.secret_ciphertext)?;
        Ok(Some(Self::into_secret_string(plaintext)?))
    }

    /// Decrypt every stored credential.
    ///
    /// All-or-nothing: if any single record fails to decrypt the whole
    /// call fails, since a partial listing under a wrong master key is
    /// not meaningful.
    pub fn list_all(&self) -> Result<Vec<Credential>> {
        let records = self.store.list()?;

        let mut credentials = Vec::with_capacity(records.len());
        for record in records {
            let plaintext = self.cipher.open(&record.secret_ciphertext)?;
            credentials.push(Credential {
                server: record.server,
                account: record.account,
                role: record.role,
                secret: Self::into_secret_string(plaintext)?,
            });
        }
        Ok(credentials)
    }

    /// Remove a credential.  Deleting a non-existent pair is a no-op.
    pub fn delete(&self, server: &str, account: &str) -> Result<()> {
        self.store.delete(server, account)
    }

    /// Close the vault, releasing the storage handle.
    ///
    /// Consuming `self` makes a second close unrepresentable, and
    /// dropping an unclosed vault releases the handle anyway, so every
    /// exit path ends with the connection closed.
    pub fn close(self) -> Result<()> {
        self.store.close()
    }

    /// Convert decrypted bytes to a `String`, wiping them on failure.
    fn into_secret_string(plaintext: Vec<u8>) -> Result<String> {
        String::from_utf8(plaintext).map_err(|e| {
            let mut bad_bytes = e.into_bytes();
            bad_bytes.zeroize();
            HostVaultError::Decryption
        })
    }
}
