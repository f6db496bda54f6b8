//! `hostvault list` — display all stored credentials in a table.

use crate::cli::output;
use crate::cli::{db_path, prompt_master_passphrase, Cli};
use crate::errors::Result;
use crate::vault::Vault;

/// Execute the `list` command.
///
/// Decrypts every record (all-or-nothing, so a wrong passphrase fails
/// the whole listing) but displays only server, account, and role.
pub fn execute(cli: &Cli) -> Result<()> {
    let path = db_path(cli)?;

    let passphrase = prompt_master_passphrase()?;
    let vault = Vault::open(&path, passphrase.as_bytes())?;

    let credentials = vault.list_all()?;
    vault.close()?;

    output::info(&format!("{} credential(s) stored", credentials.len()));
    output::print_credentials_table(&credentials);

    Ok(())
}
