use std::process;

mod cli;
mod commands;
mod exit_codes;
mod mcp_integration;
mod signal_handler;

use exit_codes::{EXIT_ERROR, EXIT_SUCCESS};

#[tokio::main]
async fn main() {
    // A local .env is honored the same way the original environment is; real
    // environment variables win over file entries.
    let _ = dotenvy::dotenv();

    let matches = match cli::build_cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            use clap::error::ErrorKind;
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    print!("{e}");
                    process::exit(EXIT_SUCCESS);
                }
                _ => {
                    eprintln!("{e}");
                    process::exit(EXIT_ERROR);
                }
            }
        }
    };

    let verbose = matches.get_flag("verbose");
    let debug = matches.get_flag("debug");
    let quiet = matches.get_flag("quiet");

    // In serve mode stdout belongs to the MCP protocol; logs must stay on
    // stderr and default to a more verbose level for debugging.
    let is_serve_command = matches
        .subcommand()
        .is_some_and(|(name, _)| name == "serve");

    configure_logging(verbose, debug, quiet, is_serve_command);

    let exit_code = match matches.subcommand() {
        Some(("serve", sub_matches)) => commands::serve::handle_command(sub_matches).await,
        Some(("search", sub_matches)) => commands::search::handle_command(sub_matches).await,
        _ => {
            eprintln!("No command specified. Use --help for usage information.");
            EXIT_ERROR
        }
    };

    process::exit(exit_code);
}

fn configure_logging(verbose: bool, debug: bool, quiet: bool, is_mcp_mode: bool) {
    use tracing::Level;
    use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

    let log_level = if is_mcp_mode {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else if debug {
        Level::DEBUG
    } else if verbose {
        Level::TRACE
    } else {
        Level::INFO
    };

    let filter = EnvFilter::new(format!("rmcp=warn,{log_level}"));

    registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
