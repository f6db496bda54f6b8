//! `hostvault delete` — remove a stored credential.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{db_path, prompt_master_passphrase, validate_target, Cli};
use crate::errors::{HostVaultError, Result};
use crate::vault::Vault;

/// Execute the `delete` command.
pub fn execute(cli: &Cli, server: &str, account: &str, force: bool) -> Result<()> {
    validate_target(server, account)?;
    let path = db_path(cli)?;

    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete credential for {account}@{server}?"))
            .default(false)
            .interact()
            .map_err(|e| HostVaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    let passphrase = prompt_master_passphrase()?;
    let vault = Vault::open(&path, passphrase.as_bytes())?;

    // Deleting a pair that was never stored is a no-op, not an error.
    vault.delete(server, account)?;
    vault.close()?;

    crate::audit::log_audit(&path, "delete", Some(server), Some(account));
    output::success(&format!("Deleted credential for {account}@{server}"));

    Ok(())
}
