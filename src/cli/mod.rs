//! CLI argument parsing for mazegraph
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod parse;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use mazegraph_core::format::OutputFormat;
use parse::parse_output_format;

/// Mazegraph - watch BFS, DFS and Dijkstra walk a weighted graph
#[derive(Parser, Debug)]
#[command(name = "mazegraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json); defaults to the config file's value
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Only print results, not per-step events
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "MAZEGRAPH_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to ./mazegraph.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Breadth-first search from --from until --to is visited
    Bfs(SearchArgs),

    /// Depth-first search from --from until --to is visited
    Dfs(SearchArgs),

    /// Shortest path from --from to --to
    Dijkstra(SearchArgs),

    /// Summarize a graph or maze
    Info(SourceArgs),

    /// Write a configuration file with default values
    InitConfig {
        /// Where to write the file
        #[arg(long, default_value = "mazegraph.toml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Where the graph comes from
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// Graph document (TOML with `vertices` and `[[edges]]`)
    #[arg(long, short = 'g')]
    pub graph: Option<PathBuf>,

    /// Maze document (TOML with `width`, `height`, `[[walls]]`, `[[weights]]`)
    #[arg(long, short = 'm')]
    pub maze: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Start vertex (a name, or `x,y` for mazes)
    #[arg(long)]
    pub from: String,

    /// End vertex (a name, or `x,y` for mazes)
    #[arg(long)]
    pub to: String,
}
