mod command;
mod location;
mod property;
mod reset;
mod stack;
mod trace_edit;
mod transform;


pub use command::Command;
pub use location::LocationChange;
pub use property::PropertyChange;
pub use reset::ResetView;
pub use stack::{History, PushOutcome};
pub use trace_edit::{TraceEdit, TraceEditMode};
pub use transform::{GestureId, PanChange, ZoomChange};
