//! Serve command implementation.
//!
//! Starts the MailScout MCP server so AI applications can call the search
//! tools. Stdio is the default transport; `serve http` switches to the
//! streamable-HTTP transport.
//!
//! The provider credential is loaded before any transport starts; a missing
//! credential aborts startup.

use std::sync::Arc;

use mailscout_tools::config::Config;
use mailscout_tools::mcp::{serve_stdio, start_http_server};
use mailscout_tools::search::{Searcher, TavilyClient};

use crate::exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_WARNING};
use crate::signal_handler::wait_for_shutdown;

/// Handle the serve command.
///
/// Returns an exit code:
/// - 0: server started and stopped cleanly
/// - 1: server stopped on a transport error
/// - 2: server failed to start
pub async fn handle_command(matches: &clap::ArgMatches) -> i32 {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("refusing to start: {e}");
            eprintln!("Error: {e}");
            return EXIT_ERROR;
        }
    };

    let provider = Arc::new(TavilyClient::new(config.tavily_api_key()));
    let searcher = Arc::new(Searcher::new(provider));

    match matches.subcommand() {
        Some(("http", http_matches)) => handle_http_serve(http_matches, searcher).await,
        None => handle_stdio_serve(searcher).await,
        Some((unknown, _)) => {
            eprintln!("Unknown serve subcommand: {unknown}");
            EXIT_ERROR
        }
    }
}

/// Run the stdio transport, blocking until the client disconnects.
async fn handle_stdio_serve(searcher: Arc<Searcher>) -> i32 {
    tracing::debug!("starting MCP server in stdio mode");

    match serve_stdio(searcher).await {
        Ok(()) => {
            tracing::info!("MCP server shut down gracefully");
            EXIT_SUCCESS
        }
        Err(e) => {
            tracing::error!("MCP server error: {e}");
            eprintln!("MCP server error: {e}");
            EXIT_WARNING
        }
    }
}

/// Run the HTTP transport until Ctrl+C.
async fn handle_http_serve(matches: &clap::ArgMatches, searcher: Arc<Searcher>) -> i32 {
    let port: u16 = matches.get_one::<u16>("port").copied().unwrap_or(8000);
    let host = matches
        .get_one::<String>("host")
        .map(|s| s.as_str())
        .unwrap_or("127.0.0.1");
    let bind_addr = format!("{host}:{port}");

    let mut handle = match start_http_server(&bind_addr, searcher).await {
        Ok(handle) => {
            eprintln!(
                "MCP HTTP server running on {}. Use Ctrl+C to stop.",
                handle.url()
            );
            handle
        }
        Err(e) => {
            tracing::error!("failed to start HTTP MCP server: {e}");
            eprintln!("Failed to start HTTP MCP server: {e}");
            return EXIT_ERROR;
        }
    };

    wait_for_shutdown().await;

    tracing::info!("shutting down MCP HTTP server");
    handle.shutdown().await;
    EXIT_SUCCESS
}
