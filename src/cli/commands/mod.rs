//! One module per subcommand, each exposing a single `execute` function.

pub mod audit_cmd;
pub mod completions;
pub mod delete;
pub mod list;
pub mod login;
pub mod show;
