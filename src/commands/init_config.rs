//! `mazegraph init-config`

use std::path::Path;

use serde_json::json;

use mazegraph_core::config::AppConfig;
use mazegraph_core::error::{GraphError, Result};
use mazegraph_core::format::OutputFormat;

/// Write a default configuration to `path`
pub fn execute(format: OutputFormat, quiet: bool, path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(GraphError::UsageError(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    AppConfig::default().save(path)?;
    tracing::debug!(path = %path.display(), "config written");

    match format {
        OutputFormat::Json => {
            let output = json!({ "path": path.display().to_string() });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !quiet {
                println!("wrote {}", path.display());
            }
        }
    }

    Ok(())
}
