//! upscale-transform - Integer nearest-neighbor upscaling
//!
//! This crate provides:
//!
//! - [`ScaleFactor`] - A validated magnification factor (>= 1)
//! - Coordinate mapping from output pixels back to source pixels
//! - Sequential and parallel resampling strategies with identical output
//!
//! ```
//! use upscale_core::{PixelGrid, Rgba};
//! use upscale_transform::{ScaleOptions, scale};
//!
//! let input = PixelGrid::new_filled(3, 3, Rgba::WHITE).unwrap();
//! let output = scale(&input, &ScaleOptions::new(2).with_parallel(true)).unwrap();
//! assert_eq!(output.dimensions(), (6, 6));
//! ```

mod error;
pub mod mapping;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use mapping::{ScaleFactor, replicate_row, source_coord, target_dims};
pub use scale::{
    ScaleOptions, ScaleStrategy, scale, scale_parallel, scale_parallel_with, scale_sequential,
    scale_with_strategy,
};
