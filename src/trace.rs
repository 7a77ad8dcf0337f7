mod error;
mod mask;
mod store;


pub use error::{Result, TraceError};
pub use mask::{TraceMask, TracePoint};
pub use store::TraceStore;
