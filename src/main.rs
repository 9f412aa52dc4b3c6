// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Waypath CLI - least-cost routes through a weighted directed graph

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use waypath::commands::{self, bootstrap::EdgeSpec, bootstrap::GraphSource, OutputStyle};
use waypath::config;

#[derive(Parser)]
#[command(name = "waypath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "WAYPATH_CONFIG", global = true)]
    config: Option<std::path::PathBuf>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", global = true)]
    no_color: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Start from an empty graph instead of the reference graph
    #[arg(long, global = true)]
    no_reference: bool,

    /// Add a node (repeatable)
    #[arg(long = "node", value_name = "NAME", global = true)]
    nodes: Vec<String>,

    /// Add an edge FROM:TO:COST (repeatable)
    #[arg(long = "edge", value_name = "FROM:TO:COST", global = true)]
    edges: Vec<EdgeSpec>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the cheapest route between two nodes
    Route {
        /// Source node (prompted for if omitted)
        from: Option<String>,

        /// Destination node (prompted for if omitted)
        to: Option<String>,
    },

    /// List every node reachable from a start node
    Reachable {
        /// Start node
        from: String,
    },

    /// List nodes and their outgoing edges
    Nodes,

    /// Export graph to various formats
    Export {
        /// Output format (dot, json)
        #[arg(short, long, default_value = "dot")]
        format: String,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },

    /// Show the effective configuration
    Config {
        /// Configuration key (omit to show all)
        key: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => LevelFilter::ERROR,
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let settings = config::load(cli.config.as_deref())?;
    let style = OutputStyle {
        json: cli.json,
        color: settings.color && !cli.no_color,
        separator: settings.separator.clone(),
    };

    let source = GraphSource {
        reference: !cli.no_reference,
        nodes: cli.nodes,
        edges: cli.edges,
    };

    // Execute command
    match cli.command {
        Commands::Route { from, to } => {
            let graph = source.build()?;
            let outcome =
                commands::route::run(&graph, from, to, settings.engine_options(), &style)?;
            if outcome.is_invalid() {
                return Ok(ExitCode::from(commands::EXIT_INVALID_INPUT));
            }
        }
        Commands::Reachable { from } => {
            let graph = source.build()?;
            if !commands::reachable::run(&graph, &from, &style)? {
                return Ok(ExitCode::from(commands::EXIT_INVALID_INPUT));
            }
        }
        Commands::Nodes => {
            let graph = source.build()?;
            commands::nodes::run(&graph, &style)?;
        }
        Commands::Export { format, output } => {
            let graph = source.build()?;
            commands::export::run(&graph, &format, output)?;
        }
        Commands::Config { key } => {
            commands::config::run(&settings, key.as_deref())?;
        }
        Commands::Completions { shell } => {
            commands::completions::run(shell, &mut Cli::command())?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
