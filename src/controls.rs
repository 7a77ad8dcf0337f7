mod bindings;
mod control;
mod error;
mod panel;

#[cfg(test)]
mod tests;

pub use bindings::{Binding, ControlBindings, from_percent, percent};
pub use control::{
    ControlEvent, ControlId, ControlKind, ControlValue, MirrorWrite, MirroredControl, UpdateSource,
};
pub use error::{ControlError, Result};
pub use panel::ControlPanel;
