//! Error types for upscale-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// upscale-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Buffer size does not match the grid dimensions
    #[error("dimension mismatch: expected {expected} pixels, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Coordinates outside the grid
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} grid")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The pixel buffer could not be allocated
    #[error("memory allocation failed for {width}x{height} grid")]
    AllocationFailed { width: u32, height: u32 },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
