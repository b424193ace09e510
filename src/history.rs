use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};

/// A source of ordered commit history for a repository.
///
/// Implementations return the subject line of every commit, oldest first,
/// or fail if the history cannot be read. The orchestration layer depends
/// on this trait only, so a library-backed binding (or a test fake) can
/// replace the subprocess implementation without touching the rest of the
/// pipeline.
pub trait HistorySource {
    /// Return every commit subject line in `repo_path`, oldest commit first.
    fn commit_messages(&self, repo_path: &Path) -> Result<Vec<String>>;
}

/// Reads history by shelling out to `git log`.
pub struct GitLog;

impl HistorySource for GitLog {
    fn commit_messages(&self, repo_path: &Path) -> Result<Vec<String>> {
        let output = Command::new("git")
            .arg("-C")
            .arg(repo_path)
            .args(["log", "--pretty=format:%s"])
            .output()
            .context("Failed to run 'git log'")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("git log failed:\n{}", stderr);
        }

        // git lists commits newest first; reverse into chronological order.
        let stdout = String::from_utf8_lossy(&output.stdout);
        let mut messages: Vec<String> = stdout.lines().map(str::to_string).collect();
        messages.reverse();
        Ok(messages)
    }
}

#[cfg(test)]
#[path = "history_test.rs"]
mod tests;
