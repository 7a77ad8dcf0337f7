use thiserror::Error;

use super::{ControlId, ControlKind, ControlValue};

pub type Result<T> = std::result::Result<T, ControlError>;

#[derive(Debug, Error, PartialEq)]
pub enum ControlError {
    #[error("unknown control {0:?}")]
    UnknownControl(ControlId),

    #[error("control {control:?} ({kind:?}) cannot hold value {value:?}")]
    ValueMismatch {
        control: ControlId,
        kind: ControlKind,
        value: ControlValue,
    },

    #[error("control {control:?} ({kind:?}) cannot mirror {binding}")]
    UnsupportedBinding {
        control: ControlId,
        kind: ControlKind,
        binding: String,
    },
}
