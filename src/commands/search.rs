//! `mazegraph bfs|dfs|dijkstra`

use std::fmt::Display;
use std::rc::Rc;
use std::time::Instant;

use serde::Serialize;

use mazegraph_core::config::AppConfig;
use mazegraph_core::error::Result;
use mazegraph_core::format::OutputFormat;
use mazegraph_core::graph::{
    AlgorithmEvent, Cost, EventRecorder, TracingObserver, Vertex, WeightedGraph, INFINITE_COST,
};
use mazegraph_core::maze::Juncture;
use mazegraph_core::trace_time;

use super::source::{self, LoadedGraph};
use crate::cli::{Cli, SearchArgs};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
        }
    }
}

/// Execute a search command
pub fn execute(
    cli: &Cli,
    config: &AppConfig,
    format: OutputFormat,
    algorithm: Algorithm,
    args: &SearchArgs,
    start: Instant,
) -> Result<()> {
    let loaded = source::load(&args.source, config)?;
    trace_time!(start, "load_graph");

    match loaded {
        LoadedGraph::Named(graph) => run_on(
            cli,
            format,
            algorithm,
            graph,
            args.from.clone(),
            args.to.clone(),
        ),
        LoadedGraph::Maze(graph) => {
            let from: Juncture = args.from.parse()?;
            let to: Juncture = args.to.parse()?;
            run_on(cli, format, algorithm, graph, from, to)
        }
    }
}

/// Run `algorithm` with a recorder attached, print what it reported, then
/// hand back the algorithm's own result.
fn run_on<V>(
    cli: &Cli,
    format: OutputFormat,
    algorithm: Algorithm,
    mut graph: WeightedGraph<V>,
    from: V,
    to: V,
) -> Result<()>
where
    V: Vertex + Serialize + Display + 'static,
{
    let recorder = Rc::new(EventRecorder::new());
    graph.add_observer(recorder.clone());
    graph.add_observer(Rc::new(TracingObserver));

    let outcome = match algorithm {
        Algorithm::Bfs => graph.run_bfs(&from, &to),
        Algorithm::Dfs => graph.run_dfs(&from, &to),
        Algorithm::Dijkstra => graph.run_dijkstra(&from, &to),
    };

    // Endpoint errors are raised before any notification
    if outcome.is_err() && recorder.events().is_empty() {
        return outcome;
    }

    let report = SearchReport::new(algorithm, &from, &to, &recorder);
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => print_human(&report, cli.quiet),
    }

    outcome
}

#[derive(Debug, Serialize)]
struct SearchReport<'a, V> {
    algorithm: Algorithm,
    from: &'a V,
    to: &'a V,
    reached: bool,
    /// Dijkstra only; `None` when `to` is unreachable
    cost: Option<Cost>,
    events: Vec<AlgorithmEvent<V>>,
}

impl<'a, V: Vertex> SearchReport<'a, V> {
    fn new(algorithm: Algorithm, from: &'a V, to: &'a V, recorder: &EventRecorder<V>) -> Self {
        let (reached, cost) = match algorithm {
            Algorithm::Bfs | Algorithm::Dfs => (recorder.search_completed(), None),
            Algorithm::Dijkstra => {
                let cost = recorder
                    .finished()
                    .into_iter()
                    .find(|(vertex, _)| vertex == to)
                    .map(|(_, cost)| cost)
                    .filter(|cost| *cost != INFINITE_COST);
                (recorder.path().is_some(), cost)
            }
        };

        Self {
            algorithm,
            from,
            to,
            reached,
            cost,
            events: recorder.events(),
        }
    }
}

fn print_human<V: Display>(report: &SearchReport<'_, V>, quiet: bool) {
    for event in &report.events {
        match event {
            AlgorithmEvent::BfsBegun | AlgorithmEvent::DfsBegun | AlgorithmEvent::DijkstraBegun => {
                if !quiet {
                    println!(
                        "{} from {} to {}",
                        report.algorithm.name(),
                        report.from,
                        report.to
                    );
                }
            }
            AlgorithmEvent::Visit { vertex } => {
                if !quiet {
                    println!("visit {}", vertex);
                }
            }
            AlgorithmEvent::SearchOver => println!("search over"),
            AlgorithmEvent::VertexFinished { vertex, cost } => {
                if quiet {
                    continue;
                }
                if *cost == INFINITE_COST {
                    println!("unreachable {}", vertex);
                } else {
                    println!("finished {} cost {}", vertex, cost);
                }
            }
            AlgorithmEvent::DijkstraOver { path } => {
                let hops: Vec<String> = path.iter().map(ToString::to_string).collect();
                match report.cost {
                    Some(cost) => println!("path {} (cost {})", hops.join(" -> "), cost),
                    None => println!("path {}", hops.join(" -> ")),
                }
            }
        }
    }

    if report.algorithm != Algorithm::Dijkstra && !report.reached {
        println!("target not reached");
    }
}
