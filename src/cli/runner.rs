use clap::Parser;
use tracing::info;

use crate::config::{ViewerConfig, load_config, save_config};
use crate::script::{load_script, replay, save_report};

use super::types::{Cli, Commands, WriteStatus};

pub fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Replay {
            script,
            config,
            report,
        } => {
            let viewer_config = match config {
                Some(path) => load_config(&path).map_err(|error| error.to_string())?,
                None => ViewerConfig::default(),
            };
            let session_script = load_script(&script).map_err(|error| error.to_string())?;
            info!(script = %script.display(), "replaying session script");
            let (_, replay_report) =
                replay(&session_script, &viewer_config).map_err(|error| error.to_string())?;
            if let Some(report_path) = report {
                save_report(report_path, &replay_report).map_err(|error| error.to_string())?;
            }
            println!(
                "{}",
                serde_json::to_string_pretty(&replay_report).map_err(|error| error.to_string())?
            );
        }
        Commands::Config { output } => {
            let defaults = ViewerConfig::default();
            match output {
                Some(path) => {
                    save_config(&path, &defaults).map_err(|error| error.to_string())?;
                    let status = WriteStatus {
                        status: "ok",
                        output: path,
                    };
                    println!(
                        "{}",
                        serde_json::to_string(&status).map_err(|error| error.to_string())?
                    );
                }
                None => print!(
                    "{}",
                    serde_yaml::to_string(&defaults).map_err(|error| error.to_string())?
                ),
            }
        }
    }

    Ok(())
}
