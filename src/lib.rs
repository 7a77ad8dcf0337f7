pub mod cli;
pub mod config;
pub mod controls;
pub mod history;
pub mod model;
pub mod script;
pub mod session;
pub mod trace;
pub mod viewer;

pub fn run_cli() -> Result<(), String> {
    cli::run_cli()
}
