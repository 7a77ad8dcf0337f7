use std::fs;
use std::path::Path;

use crate::config::is_yaml;

use super::{ReplayReport, Result, SessionScript};

pub fn load_script(path: impl AsRef<Path>) -> Result<SessionScript> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let script = if is_yaml(path) {
        serde_yaml::from_str::<SessionScript>(&raw)?
    } else {
        serde_json::from_str::<SessionScript>(&raw)?
    };
    script.validate()?;
    Ok(script)
}

pub fn save_report(path: impl AsRef<Path>, report: &ReplayReport) -> Result<()> {
    let path = path.as_ref();
    let serialized = if is_yaml(path) {
        serde_yaml::to_string(report)?
    } else {
        serde_json::to_string_pretty(report)?
    };
    fs::write(path, serialized)?;
    Ok(())
}
