//! Cryptography for the credential vault: Argon2id key derivation and
//! AES-256-GCM authenticated encryption.

pub mod cipher;
pub mod kdf;

pub use cipher::CredentialCipher;
pub use kdf::{derive_master_key, MasterKey};
