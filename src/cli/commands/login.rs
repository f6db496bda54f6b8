//! `hostvault login` — store or update a server credential.

use crate::cli::output;
use crate::cli::{db_path, prompt_master_passphrase, prompt_secret, validate_target, Cli};
use crate::errors::Result;
use crate::vault::Vault;

/// Execute the `login` command.
pub fn execute(cli: &Cli, server: &str, account: &str, role: &str) -> Result<()> {
    validate_target(server, account)?;
    let path = db_path(cli)?;

    let secret = prompt_secret(server, account)?;
    let passphrase = prompt_master_passphrase()?;

    let vault = Vault::open(&path, passphrase.as_bytes())?;

    // A fetch before the save tells us whether this is an add or an
    // update — and catches a wrong passphrase before anything is
    // overwritten.
    let existed = vault.fetch(server, account)?.is_some();
    vault.save(server, account, &secret, role)?;
    vault.close()?;

    crate::audit::log_audit(&path, "save", Some(server), Some(account));

    if existed {
        output::success(&format!("Credential updated for {account}@{server}"));
    } else {
        output::success(&format!("Credential stored for {account}@{server}"));
    }

    Ok(())
}
