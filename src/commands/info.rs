//! `mazegraph info`

use serde_json::json;

use mazegraph_core::config::AppConfig;
use mazegraph_core::error::Result;
use mazegraph_core::format::OutputFormat;

use super::source;
use crate::cli::SourceArgs;

/// Execute the info command
pub fn execute(config: &AppConfig, format: OutputFormat, args: &SourceArgs) -> Result<()> {
    let loaded = source::load(args, config)?;

    match format {
        OutputFormat::Json => {
            let output = json!({
                "kind": loaded.kind(),
                "vertices": loaded.vertex_count(),
                "edges": loaded.edge_count(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("kind: {}", loaded.kind());
            println!("vertices: {}", loaded.vertex_count());
            println!("edges: {}", loaded.edge_count());
        }
    }

    Ok(())
}
