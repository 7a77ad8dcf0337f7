use crate::config::ConfigError;
use crate::controls::ControlError;
use crate::model::ModelError;
use crate::trace::TraceError;
use crate::viewer::ViewerError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("configuration rejected: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid view request: {0}")]
    Model(#[from] ModelError),

    #[error("trace edit rejected: {0}")]
    Trace(#[from] TraceError),

    #[error("viewer setup failed: {0}")]
    Viewer(#[from] ViewerError),

    #[error("control setup failed: {0}")]
    Control(#[from] ControlError),
}
