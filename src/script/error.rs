use crate::session::SessionError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScriptError>;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("session script parse failure: {0}")]
    Parse(String),

    #[error("session script I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("session script serialization failure: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("session script YAML serialization failure: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),

    #[error("action {index} (`{action}`) failed: {source}")]
    Action {
        index: usize,
        action: &'static str,
        #[source]
        source: SessionError,
    },

    #[error("session setup failed: {0}")]
    Session(#[from] SessionError),
}
