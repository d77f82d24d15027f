//! Command dispatch logic for mazegraph
use std::time::Instant;

use mazegraph_core::config::AppConfig;
use mazegraph_core::error::Result;
use mazegraph_core::format::OutputFormat;
use mazegraph_core::trace_time;

use crate::cli::{Cli, Commands};
use crate::commands;
use crate::commands::search::Algorithm;

pub fn run(cli: &Cli, config: &AppConfig, format: OutputFormat, start: Instant) -> Result<()> {
    let result = match &cli.command {
        None => handle_no_command(),

        Some(Commands::Bfs(args)) => {
            commands::search::execute(cli, config, format, Algorithm::Bfs, args, start)
        }

        Some(Commands::Dfs(args)) => {
            commands::search::execute(cli, config, format, Algorithm::Dfs, args, start)
        }

        Some(Commands::Dijkstra(args)) => {
            commands::search::execute(cli, config, format, Algorithm::Dijkstra, args, start)
        }

        Some(Commands::Info(args)) => commands::info::execute(config, format, args),

        Some(Commands::InitConfig { path, force }) => {
            commands::init_config::execute(format, cli.quiet, path, *force)
        }
    };

    trace_time!(start, "command_done");
    result
}

fn handle_no_command() -> Result<()> {
    println!("mazegraph {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Observable BFS, DFS and Dijkstra over weighted graphs and mazes.");
    println!();
    println!("Run `mazegraph --help` for usage information.");
    Ok(())
}
