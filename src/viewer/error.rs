use crate::config::ConfigError;
use crate::trace::TraceError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ViewerError>;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("viewer configuration rejected: {0}")]
    Config(#[from] ConfigError),

    #[error("trace storage unavailable: {0}")]
    Trace(#[from] TraceError),
}
