//! CLI definition for the `mailscout` binary.

use clap::{Arg, ArgAction, Command};

/// Build the top-level clap command.
pub fn build_cli() -> Command {
    Command::new("mailscout")
        .version(env!("CARGO_PKG_VERSION"))
        .about("MCP server exposing email-marketing research tools")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable verbose logging"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Only log errors"),
        )
        .subcommand(
            Command::new("serve")
                .about("Run the MCP server (stdio transport by default)")
                .subcommand(
                    Command::new("http")
                        .about("Run the MCP server over streamable HTTP")
                        .arg(
                            Arg::new("port")
                                .long("port")
                                .short('p')
                                .value_parser(clap::value_parser!(u16))
                                .default_value("8000")
                                .help("Port to bind (0 picks a free port)"),
                        )
                        .arg(
                            Arg::new("host")
                                .long("host")
                                .default_value("127.0.0.1")
                                .help("Host to bind"),
                        ),
                ),
        )
        .subcommand(
            Command::new("search")
                .about("Run a search tool in-process and print the result")
                .subcommand_required(true)
                .subcommand(
                    Command::new("trends")
                        .about("Search for email marketing trends")
                        .arg(
                            Arg::new("query")
                                .long("query")
                                .required(true)
                                .help("Search query text"),
                        )
                        .arg(
                            Arg::new("max-results")
                                .long("max-results")
                                .value_parser(clap::value_parser!(usize))
                                .help("Number of results to request (default 5)"),
                        ),
                )
                .subcommand(
                    Command::new("best-practices")
                        .about("Search for email marketing best practices")
                        .arg(
                            Arg::new("topic")
                                .long("topic")
                                .help("Topic to scope the search (default \"general\")"),
                        )
                        .arg(
                            Arg::new("max-results")
                                .long("max-results")
                                .value_parser(clap::value_parser!(usize))
                                .help("Number of results to request (default 5)"),
                        ),
                ),
        )
}
