//! Search command implementation.
//!
//! Executes the registered MCP search tools in-process and prints their JSON
//! result, so the tools can be exercised without an MCP client attached.

use std::sync::Arc;

use serde_json::{Map, Value};

use mailscout_tools::config::Config;
use mailscout_tools::search::{Searcher, TavilyClient};

use crate::exit_codes::{EXIT_ERROR, EXIT_SUCCESS};
use crate::mcp_integration::{response_formatting, CliToolContext};

/// Handle the search command and its tool subcommands.
pub async fn handle_command(matches: &clap::ArgMatches) -> i32 {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return EXIT_ERROR;
        }
    };

    let (cli_path, arguments) = match matches.subcommand() {
        Some(("trends", sub)) => ("search/trends", trends_arguments(sub)),
        Some(("best-practices", sub)) => ("search/best-practices", best_practices_arguments(sub)),
        _ => {
            eprintln!("No search subcommand specified. Use --help for usage information.");
            return EXIT_ERROR;
        }
    };

    let provider = Arc::new(TavilyClient::new(config.tavily_api_key()));
    let context = CliToolContext::new(Arc::new(Searcher::new(provider)));

    match context.execute_cli_tool(cli_path, arguments).await {
        Ok(result) => {
            if result.is_error.unwrap_or(false) {
                eprintln!("{}", response_formatting::format_error_response(&result));
                EXIT_ERROR
            } else {
                println!("{}", response_formatting::format_success_response(&result));
                EXIT_SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Tool execution error: {e}");
            EXIT_ERROR
        }
    }
}

fn trends_arguments(matches: &clap::ArgMatches) -> Map<String, Value> {
    let mut arguments = Map::new();
    if let Some(query) = matches.get_one::<String>("query") {
        arguments.insert("query".into(), Value::String(query.clone()));
    }
    insert_max_results(matches, &mut arguments);
    arguments
}

fn best_practices_arguments(matches: &clap::ArgMatches) -> Map<String, Value> {
    let mut arguments = Map::new();
    if let Some(topic) = matches.get_one::<String>("topic") {
        arguments.insert("topic".into(), Value::String(topic.clone()));
    }
    insert_max_results(matches, &mut arguments);
    arguments
}

fn insert_max_results(matches: &clap::ArgMatches, arguments: &mut Map<String, Value>) {
    if let Some(max_results) = matches.get_one::<usize>("max-results") {
        arguments.insert(
            "maxResults".into(),
            Value::Number(serde_json::Number::from(*max_results as u64)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::build_cli;

    fn matches_for(args: &[&str]) -> clap::ArgMatches {
        build_cli()
            .try_get_matches_from(args)
            .expect("arguments parse")
    }

    #[test]
    fn trends_arguments_carry_the_wire_field_names() {
        let matches = matches_for(&[
            "mailscout",
            "search",
            "trends",
            "--query",
            "open rates",
            "--max-results",
            "3",
        ]);
        let (_, search) = matches.subcommand().expect("search");
        let (_, trends) = search.subcommand().expect("trends");

        let args = trends_arguments(trends);
        assert_eq!(args["query"], "open rates");
        assert_eq!(args["maxResults"], 3);
    }

    #[test]
    fn best_practices_arguments_omit_unset_fields() {
        let matches = matches_for(&["mailscout", "search", "best-practices"]);
        let (_, search) = matches.subcommand().expect("search");
        let (_, best) = search.subcommand().expect("best-practices");

        let args = best_practices_arguments(best);
        assert!(args.is_empty());
    }
}
