mod error;
mod kinds;
mod location;
mod property;
mod vector;
mod view_state;


pub use error::{ModelError, Result};
pub use kinds::{ColorMap, DrawMode, SliceDisplayType, TracingLayer, ViewId};
pub use location::{CursorLocation, LocationAxis, VolumeExtent};
pub use property::{PropertyKind, PropertyValue};
pub use vector::Vec2;
pub use view_state::{ScaleLimits, ViewDefaults, ViewState};
