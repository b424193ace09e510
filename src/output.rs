use std::path::Path;

use anyhow::{Context, Result};

/// Write the graph text verbatim to `path`, overwriting any existing file.
///
/// The file handle is opened, written, and released within this single call;
/// nothing is cleaned up on failure.
pub fn write_graph(graph: &str, path: &Path) -> Result<()> {
    std::fs::write(path, graph)
        .with_context(|| format!("Failed to write graph to '{}'", path.display()))
}

#[cfg(test)]
#[path = "output_test.rs"]
mod tests;
