use clap::Parser;
use hostvault::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Login {
            ref server,
            ref account,
            ref role,
        } => hostvault::cli::commands::login::execute(&cli, server, account, role),
        Commands::Show {
            ref server,
            ref account,
        } => hostvault::cli::commands::show::execute(&cli, server, account),
        Commands::List => hostvault::cli::commands::list::execute(&cli),
        Commands::Delete {
            ref server,
            ref account,
            force,
        } => hostvault::cli::commands::delete::execute(&cli, server, account, force),
        Commands::Audit { last } => hostvault::cli::commands::audit_cmd::execute(&cli, last),
        Commands::Completions { ref shell } => {
            hostvault::cli::commands::completions::execute(shell)
        }
    };

    if let Err(e) = result {
        hostvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
