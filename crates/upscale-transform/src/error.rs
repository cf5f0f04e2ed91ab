//! Error types for upscale-transform

use thiserror::Error;

/// Errors that can occur while resampling
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] upscale_core::Error),

    /// Factor below 1, or an input grid with a zero dimension
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The output grid cannot be represented or allocated
    ///
    /// `factor` is the raw requested factor, which may not fit a
    /// [`ScaleFactor`](crate::ScaleFactor).
    #[error("cannot allocate output for {width}x{height} grid scaled by {factor}")]
    AllocationFailure { width: u32, height: u32, factor: u64 },

    /// A parallel unit of work did not complete
    #[error("parallel task failed: {0}")]
    TaskFailure(String),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
