//! Error type for reading and writing pixel grids
//!
//! The PNG and JPEG modules translate `png` and `jpeg-decoder` failures
//! into these variants.

use thiserror::Error;

/// Failure while reading or writing an image.
#[derive(Error, Debug)]
pub enum IoError {
    /// Reading the input or writing the output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Not PNG or JPEG, a pixel layout the decoders do not handle, or a
    /// format without an encoder (JPEG)
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Input too short to sniff, decoded samples that disagree with the
    /// header, or an empty grid given to the encoder
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// `png` or `jpeg-decoder` rejected the stream
    #[error("decode error: {0}")]
    DecodeError(String),

    /// `png` failed to write the header or pixel data
    #[error("encode error: {0}")]
    EncodeError(String),

    /// The decoded image does not fit a grid
    #[error("core error: {0}")]
    Core(#[from] upscale_core::Error),
}

/// Result alias for [`IoError`].
pub type IoResult<T> = Result<T, IoError>;
