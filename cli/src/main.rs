//! # cicsrs Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Command-line front-end for the CICS management REST interface (CMCI).
//! This file:
//! - parses arguments with clap (global connection flags plus one verb/resource),
//! - sets up logging from `-v` / `RUST_LOG`,
//! - routes to the verb's handler,
//! - renders failures and sets the exit code.
//!
//! ## Examples
//!
//! ```bash
//! # Connection from flags
//! cicsrs discard program PGM1 --host cics.example.com --port 1490 \
//!     --user IBMUSER --password secret --region-name CICSRGN1
//!
//! # Connection from the default profile, JSON output
//! cicsrs --json get resource CICSProgram --criteria "PROGRAM=PGM*"
//! ```
//!
//! Exit status is 0 on success and 1 on any failure. Argument errors are
//! printed after a `Syntax Error:` line; everything else as `Error: ...`.
//!
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod common;
mod core;

use crate::common::connection::ConnectionArgs;

#[derive(Parser, Debug)]
#[command(
    name = "cicsrs",
    about = "Manage CICS resources through the CMCI REST API",
    long_about = "Define, install, discard and inspect CICS resources through the\n\
                  CICS management client interface (CMCI) REST API.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[command(flatten)]
    connection: ConnectionArgs,
    /// Print the full CMCI response as JSON.
    #[arg(long, global = true)]
    json: bool,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Define(commands::define::DefineArgs),
    Delete(commands::delete::DeleteArgs),
    Discard(commands::discard::DiscardArgs),
    Enable(commands::enable::EnableArgs),
    Disable(commands::enable::DisableArgs),
    Install(commands::install::InstallArgs),
    Refresh(commands::refresh::RefreshArgs),
    AddToList(commands::csd_list::AddToListArgs),
    RemoveFromList(commands::csd_list::RemoveFromListArgs),
    Get(commands::get::GetArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                eprintln!("Syntax Error:\n{}", e.render());
                std::process::exit(1);
            }
        },
    };

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli.command);

    let ctx = commands::Context {
        connection: cli.connection,
        json: cli.json,
    };
    let command_result = match cli.command {
        Commands::Define(args) => commands::define::handle_define(args, &ctx).await,
        Commands::Delete(args) => commands::delete::handle_delete(args, &ctx).await,
        Commands::Discard(args) => commands::discard::handle_discard(args, &ctx).await,
        Commands::Enable(args) => commands::enable::handle_enable(args, &ctx).await,
        Commands::Disable(args) => commands::enable::handle_disable(args, &ctx).await,
        Commands::Install(args) => commands::install::handle_install(args, &ctx).await,
        Commands::Refresh(args) => commands::refresh::handle_refresh(args, &ctx).await,
        Commands::AddToList(args) => commands::csd_list::handle_add_to_list(args, &ctx).await,
        Commands::RemoveFromList(args) => {
            commands::csd_list::handle_remove_from_list(args, &ctx).await
        }
        Commands::Get(args) => commands::get::handle_get(args, &ctx).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "cicsrs",
            "discard",
            "program",
            "PGM1",
            "--host",
            "h",
            "--region-name",
            "R1",
            "--reject-unauthorized",
            "false",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.connection.host.as_deref(), Some("h"));
        assert_eq!(cli.connection.region_name.as_deref(), Some("R1"));
        assert_eq!(cli.connection.reject_unauthorized, Some(false));
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Discard(_)));
    }

    #[test]
    fn test_missing_positional_is_a_parse_error() {
        let err = Cli::try_parse_from(["cicsrs", "install", "program", "PGM1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
