mod context;
mod error;
mod events;

#[cfg(test)]
mod tests;

pub use context::Session;
pub use error::{Result, SessionError};
