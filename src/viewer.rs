mod error;
mod redraw;
mod state;


pub use error::{Result, ViewerError};
pub use redraw::{RedrawQueue, RedrawRequest};
pub use state::Viewer;
