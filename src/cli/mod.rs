//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::errors::{HostVaultError, Result};

/// Maximum length for server and account names.
const MAX_NAME_LEN: usize = 256;

/// HostVault CLI: encrypted vault for server login credentials.
#[derive(Parser)]
#[command(
    name = "hostvault",
    about = "Encrypted vault for server login credentials",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the credential database (default: ~/.hostvault/credentials.db)
    #[arg(long, env = "HOSTVAULT_DB", global = true)]
    pub db: Option<PathBuf>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Store a credential (add or update)
    Login {
        /// Server address or hostname
        #[arg(long)]
        server: String,
        /// Login account name
        #[arg(long)]
        account: String,
        /// Server role (e.g. manager, worker)
        #[arg(long, default_value = "")]
        role: String,
    },

    /// Show the secret for one credential
    Show {
        /// Server address or hostname
        #[arg(long)]
        server: String,
        /// Login account name
        #[arg(long)]
        account: String,
    },

    /// List all stored credentials
    List,

    /// Delete a stored credential
    Delete {
        /// Server address or hostname
        #[arg(long)]
        server: String,
        /// Login account name
        #[arg(long)]
        account: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// View recent vault operations
    Audit {
        /// Number of entries to show (default: 50)
        #[arg(long, default_value = "50")]
        last: usize,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Resolve the credential database path: `--db` / `HOSTVAULT_DB` if
/// given, otherwise `~/.hostvault/credentials.db`.
pub fn db_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(ref path) = cli.db {
        return Ok(path.clone());
    }

    let home = dirs::home_dir().ok_or_else(|| {
        HostVaultError::CommandFailed("cannot determine home directory — pass --db".into())
    })?;
    Ok(home.join(".hostvault").join("credentials.db"))
}

/// Get the master passphrase, trying in order:
/// 1. `HOSTVAULT_MASTER` env var (CI/CD)
/// 2. Interactive masked prompt
///
/// Returns `Zeroizing<String>` so the passphrase is wiped from memory on drop.
pub fn prompt_master_passphrase() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("HOSTVAULT_MASTER") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter master passphrase")
        .interact()
        .map_err(|e| HostVaultError::CommandFailed(format!("passphrase prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Get the secret to store for `account@server`, from piped stdin when
/// available, otherwise from a masked interactive prompt.
pub fn prompt_secret(server: &str, account: &str) -> Result<Zeroizing<String>> {
    if !io::stdin().is_terminal() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(Zeroizing::new(buf.trim_end().to_string()));
    }

    let secret = dialoguer::Password::new()
        .with_prompt(format!("Enter secret for {account}@{server}"))
        .interact()
        .map_err(|e| HostVaultError::CommandFailed(format!("secret prompt: {e}")))?;
    Ok(Zeroizing::new(secret))
}

/// Validate that a server/account pair is usable before touching the vault.
///
/// Both must be non-empty and within the length limit.
pub fn validate_target(server: &str, account: &str) -> Result<()> {
    for (field, value) in [("server", server), ("account", account)] {
        if value.is_empty() {
            return Err(HostVaultError::CommandFailed(format!(
                "{field} cannot be empty"
            )));
        }
        if value.len() > MAX_NAME_LEN {
            return Err(HostVaultError::CommandFailed(format!(
                "{field} cannot exceed {MAX_NAME_LEN} characters"
            )));
        }
    }
    Ok(())
}
