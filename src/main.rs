mod history;
mod mermaid;
mod msg;
mod output;
mod visualize;

#[cfg(test)]
mod test_helpers;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::Command;

use anyhow::{Context, Result};
use clap::Parser;
use colored::control;

#[derive(Parser)]
#[command(
    name = "git-mermaid",
    about = "Visualize a repository's commit history as a Mermaid flow diagram"
)]
struct Cli {
    /// Path to the git repository to visualize
    #[arg(long)]
    repo_path: PathBuf,

    /// Destination file for the generated Mermaid graph
    #[arg(long)]
    output_file: PathBuf,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color
        || std::env::var_os("NO_COLOR").is_some()
        || std::env::var_os("TERM").is_some_and(|v| v == "dumb")
        || !std::io::stdout().is_terminal()
    {
        control::set_override(false);
    }

    if let Err(e) = check_git_available() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }

    if let Err(e) = visualize::run(&cli.repo_path, &cli.output_file) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

/// Check that a runnable `git` binary is on PATH.
fn check_git_available() -> Result<()> {
    Command::new("git")
        .arg("--version")
        .output()
        .context("Could not run 'git'. Is Git installed and on your PATH?")?;
    Ok(())
}
