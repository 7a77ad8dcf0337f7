use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(
    name = "slice-history",
    version,
    about = "Replay undoable slice-viewer sessions"
)]
pub(super) struct Cli {
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    /// Replays a session script and prints the resulting report as JSON.
    Replay {
        #[arg(long)]
        script: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Prints the default viewer configuration as YAML, or writes it to `--output`.
    Config {
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Serialize)]
pub(super) struct WriteStatus {
    pub(super) status: &'static str,
    pub(super) output: PathBuf,
}
