//! Passphrase-based key derivation using Argon2id.
//!
//! Argon2id is a memory-hard KDF that protects against brute-force and
//! GPU-based attacks.  The salt and work-factor parameters are fixed
//! application constants: the vault persists no KDF metadata, so the only
//! way to re-derive the key on every invocation is for every installation
//! to share the same salt.  Known limitation: two installations using the
//! same passphrase derive the same key.

use argon2::{Algorithm, Argon2, Params, Version};
use zeroize::Zeroize;

use crate::errors::{HostVaultError, Result};

/// Length of the derived key in bytes (256 bits, for AES-256).
const KEY_LEN: usize = 32;

/// Fixed application-level salt shared by every installation.
const APP_SALT: &[u8] = b"hostvault-master-salt";

/// Argon2id memory cost in KiB (64 MB).
const MEMORY_KIB: u32 = 65_536;

/// Argon2id iteration count.
const ITERATIONS: u32 = 3;

/// Argon2id parallelism lanes.
const PARALLELISM: u32 = 4;

/// Derive the 32-byte master key from the user's passphrase.
///
/// Deterministic: the same passphrase always produces the same key, so
/// nothing needs to be persisted between invocations.  Fails only when
/// the Argon2 backend cannot allocate its working memory.
pub fn derive_master_key(passphrase: &[u8]) -> Result<MasterKey> {
    let params = Params::new(MEMORY_KIB, ITERATIONS, PARALLELISM, Some(KEY_LEN))
        .map_err(|e| HostVaultError::KeyDerivation(format!("invalid Argon2 params: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut key = [0u8; KEY_LEN];
    argon2
        .hash_password_into(passphrase, APP_SALT, &mut key)
        .map_err(|e| HostVaultError::KeyDerivation(format!("Argon2id hashing failed: {e}")))?;

    let master = MasterKey::new(key);
    key.zeroize();
    Ok(master)
}

/// A wrapper around the 32-byte master key that automatically zeroes
/// its memory when dropped.
///
/// The key lives only for the lifetime of an open vault and is owned
/// exclusively by the cipher built from it.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct MasterKey {
    bytes: [u8; KEY_LEN],
}

impl MasterKey {
    /// Create a new `MasterKey` from raw bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes (e.g. to initialize the cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}
