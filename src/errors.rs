use thiserror::Error;

/// All errors that can occur in HostVault.
#[derive(Debug, Error)]
pub enum HostVaultError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    Encryption(String),

    #[error("Decryption failed — wrong master passphrase or corrupted record")]
    Decryption,

    #[error("Key derivation failed: {0}")]
    KeyDerivation(String),

    // --- Storage errors ---
    #[error("Cannot open credential database: {0}")]
    StorageIo(String),

    #[error("Credential database schema error: {0}")]
    StorageIntegrity(String),

    // --- CLI errors ---
    #[error("No credential stored for {account}@{server}")]
    CredentialNotFound { server: String, account: String },

    #[error("Command failed: {0}")]
    CommandFailed(String),

    // --- Audit errors ---
    #[error("Audit error: {0}")]
    Audit(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for HostVault results.
pub type Result<T> = std::result::Result<T, HostVaultError>;
