mod actions;
mod error;
mod execute;
mod io;
mod report;

#[cfg(test)]
mod tests;

pub use actions::{ScriptAction, SessionScript};
pub use error::{Result, ScriptError};
pub use execute::replay;
pub use io::{load_script, save_report};
pub use report::{ReplayReport, StepReport, ViewReport};
