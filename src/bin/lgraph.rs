//! CLI entry point for the `lgraph` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use labelgraph::cli::commands;
use labelgraph::GraphError;

#[derive(Parser)]
#[command(
    name = "lgraph",
    about = "labelgraph CLI — undirected labeled graph demonstration"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through the graph ADT operations on the sample rail network
    Demo,
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
    }

    let result = match cli.command {
        Commands::Demo => commands::cmd_demo(json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::VertexNotFound(_) | GraphError::EdgeNotFound(_) => 4,
            GraphError::NotAnEndpoint { .. } => 4,
            GraphError::Serialization(_) => 2,
        };
        process::exit(code);
    }
}
