//! `hostvault audit` — view recent vault operations.

use crate::audit::AuditLog;
use crate::cli::output;
use crate::cli::{db_path, Cli};
use crate::errors::{HostVaultError, Result};

/// Execute the `audit` command.  No passphrase needed: the audit log
/// holds no secrets.
pub fn execute(cli: &Cli, last: usize) -> Result<()> {
    let path = db_path(cli)?;

    let audit = AuditLog::open(&path)
        .ok_or_else(|| HostVaultError::Audit("audit log unavailable".into()))?;

    let entries = audit.query(last)?;
    output::print_audit_table(&entries);

    Ok(())
}
