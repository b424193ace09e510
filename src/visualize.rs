use std::path::Path;

use anyhow::Result;

use crate::history::{GitLog, HistorySource};
use crate::{mermaid, msg, output};

/// Run the full pipeline: read the repository's history, build the Mermaid
/// graph, save it to `output_file`, and echo it to stdout.
pub fn run(repo_path: &Path, output_file: &Path) -> Result<()> {
    run_with(&GitLog, repo_path, output_file)
}

/// Pipeline body, parameterized over the history source so tests can run it
/// without spawning a subprocess.
///
/// A nonexistent repository path and an empty history are handled as
/// user-facing notices, not errors: the run stops cleanly before any file
/// is written.
fn run_with(source: &dyn HistorySource, repo_path: &Path, output_file: &Path) -> Result<()> {
    if !repo_path.exists() {
        msg::error(&format!(
            "Repository path '{}' does not exist",
            repo_path.display()
        ));
        return Ok(());
    }

    let messages = source.commit_messages(repo_path)?;
    if messages.is_empty() {
        msg::warn("No commits found in the repository");
        return Ok(());
    }

    let graph = mermaid::build(&messages);
    output::write_graph(&graph, output_file)?;

    msg::success(&format!("Commit graph saved to {}", output_file.display()));
    println!();
    println!("{}", graph);

    Ok(())
}

#[cfg(test)]
#[path = "visualize_test.rs"]
mod tests;
