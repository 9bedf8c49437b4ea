//! Debug logging to a file

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "kubectl_tree=debug,kube=info";

/// Initialize logging based on the debug flag
///
/// Logs go to a kept temporary file so stdout carries only the rendered
/// trees. `RUST_LOG` replaces the default filter. Returns the log file path
/// when debug logging is enabled.
pub fn init_logging(debug: bool) -> Result<Option<PathBuf>> {
    if !debug {
        return Ok(None);
    }

    let (file, log_path) = tempfile::Builder::new()
        .prefix("kubectl-tree-")
        .suffix(".log")
        .tempfile()
        .context("Failed to create log file")?
        .keep()
        .context("Failed to keep log file")?;

    tracing_subscriber::fmt()
        .with_writer(file)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .init();

    Ok(Some(log_path))
}
