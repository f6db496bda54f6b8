//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.  Secrets are never printed
//! by anything here except the explicit `show` command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::audit::AuditEntry;
use crate::vault::Credential;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a table of credentials (Server, Account, Role — no secrets).
pub fn print_credentials_table(credentials: &[Credential]) {
    if credentials.is_empty() {
        info("No credentials stored yet.");
        tip("Run `hostvault login --server <addr> --account <user>` to add one.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Server", "Account", "Role"]);

    for c in credentials {
        table.add_row(vec![c.server.clone(), c.account.clone(), c.role.clone()]);
    }

    println!("{table}");
}

/// Print a table of audit entries (Time, Operation, Server, Account).
pub fn print_audit_table(entries: &[AuditEntry]) {
    if entries.is_empty() {
        info("No audit entries yet.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Time", "Operation", "Server", "Account"]);

    for e in entries {
        table.add_row(vec![
            e.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            e.operation.clone(),
            e.server.clone().unwrap_or_default(),
            e.account.clone().unwrap_or_default(),
        ]);
    }

    println!("{table}");
}
