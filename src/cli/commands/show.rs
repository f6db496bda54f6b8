//! `hostvault show` — print the secret for one credential.

use crate::cli::{db_path, prompt_master_passphrase, validate_target, Cli};
use crate::errors::{HostVaultError, Result};
use crate::vault::Vault;

/// Execute the `show` command.
///
/// The vault reports an absent record as a valid empty result; at the
/// CLI boundary that becomes a user-facing error so scripts get a
/// non-zero exit code.
pub fn execute(cli: &Cli, server: &str, account: &str) -> Result<()> {
    validate_target(server, account)?;
    let path = db_path(cli)?;

    let passphrase = prompt_master_passphrase()?;
    let vault = Vault::open(&path, passphrase.as_bytes())?;

    let secret = vault.fetch(server, account)?;
    vault.close()?;

    match secret {
        Some(secret) => {
            // The secret goes to stdout alone so it can be piped.
            println!("{secret}");
            Ok(())
        }
        None => Err(HostVaultError::CredentialNotFound {
            server: server.to_string(),
            account: account.to_string(),
        }),
    }
}
