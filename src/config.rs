mod error;
mod io;
mod settings;

#[cfg(test)]
mod tests;

pub use error::{ConfigError, Result};
pub(crate) use io::is_yaml;
pub use io::{load_config, save_config};
pub use settings::{HistoryConfig, ViewerConfig};
