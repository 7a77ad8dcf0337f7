use thiserror::Error;

pub type Result<T> = std::result::Result<T, TraceError>;

#[derive(Debug, Error, PartialEq)]
pub enum TraceError {
    #[error("trace point ({x}, {y}) on slice {z} is outside the {width}x{height}x{slices} volume")]
    OutOfBounds {
        x: usize,
        y: usize,
        z: usize,
        width: usize,
        height: usize,
        slices: usize,
    },

    #[error("cannot allocate trace masks for an empty {width}x{height}x{slices} volume")]
    EmptyVolume {
        width: usize,
        height: usize,
        slices: usize,
    },
}
