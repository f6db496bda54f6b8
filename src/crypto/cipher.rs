//! AES-256-GCM authenticated encryption for credential secrets.
//!
//! Each call to `seal` generates a fresh random 12-byte nonce, prepends
//! it to the ciphertext, and base64-encodes the whole blob so it can be
//! stored in a TEXT column.  `open` reverses the process and verifies
//! the auth tag while decrypting.
//!
//! Layout of the decoded blob:
//!   [ 12-byte nonce | ciphertext + 16-byte auth tag ]
//!
//! There is no version byte — prepending one (and dispatching on it in
//! `open`) is the prerequisite for any future algorithm change.

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::crypto::kdf::MasterKey;
use crate::errors::{HostVaultError, Result};

/// Size of the AES-256-GCM nonce in bytes.
const NONCE_LEN: usize = 12;

/// AEAD cipher bound to one derived master key.
///
/// Owns the key for the lifetime of an open vault; the `MasterKey` it
/// was built from is zeroized as soon as the cipher is constructed.
pub struct CredentialCipher {
    cipher: Aes256Gcm,
}

impl CredentialCipher {
    /// Build a cipher from the derived master key.
    ///
    /// Consumes the `MasterKey`, which zeroizes itself on drop.
    pub fn new(key: MasterKey) -> Result<Self> {
        let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
            .map_err(|e| HostVaultError::Encryption(format!("invalid key length: {e}")))?;
        Ok(Self { cipher })
    }

    /// Encrypt `plaintext` and return a storable text blob.
    ///
    /// Generates a random nonce, seals the plaintext, and returns
    /// base64(nonce || ciphertext).
    pub fn seal(&self, plaintext: &[u8]) -> Result<String> {
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

        let ciphertext = self
            .cipher
            .encrypt(&nonce, plaintext)
            .map_err(|e| HostVaultError::Encryption(format!("encryption error: {e}")))?;

        // Prepend the nonce so the store only needs to hold one blob.
        let mut blob = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        blob.extend_from_slice(&nonce);
        blob.extend_from_slice(&ciphertext);
        Ok(BASE64.encode(blob))
    }

    /// Decrypt a blob produced by `seal`.
    ///
    /// Every failure mode — malformed base64, truncated blob, tag
    /// mismatch, wrong key — collapses into the single `Decryption`
    /// error, so a wrong master passphrase is indistinguishable from a
    /// tampered record.
    pub fn open(&self, blob: &str) -> Result<Vec<u8>> {
        let decoded = BASE64.decode(blob).map_err(|_| HostVaultError::Decryption)?;

        if decoded.len() < NONCE_LEN {
            return Err(HostVaultError::Decryption);
        }

        let (nonce_bytes, ciphertext) = decoded.split_at(NONCE_LEN);
        let nonce = Nonce::from_slice(nonce_bytes);

        self.cipher
            .decrypt(nonce, ciphertext)
            .map_err(|_| HostVaultError::Decryption)
    }
}
