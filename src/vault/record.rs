//! Persisted credential record types.

/// A row from the `credentials` table.  The secret is still sealed.
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    /// Surrogate id assigned by the store, monotonically increasing.
    pub id: i64,
    /// Server address or hostname.
    pub server: String,
    /// Login account name.
    pub account: String,
    /// base64(nonce || AEAD ciphertext) of the secret.
    pub secret_ciphertext: String,
    /// Free-form role classification (may be empty).
    pub role: String,
}

/// A fully decrypted credential as returned by the vault facade.
#[derive(Debug, Clone)]
pub struct Credential {
    pub server: String,
    pub account: String,
    pub role: String,
    pub secret: String,
}
