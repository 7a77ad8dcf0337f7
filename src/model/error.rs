use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModelError>;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("unknown {kind} index {index}")]
    UnknownIndex { kind: &'static str, index: usize },

    #[error("{axis} slice {value} is outside the volume (0..{extent})")]
    LocationOutOfRange {
        axis: &'static str,
        value: i32,
        extent: usize,
    },
}
