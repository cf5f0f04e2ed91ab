//! upscale - Integer nearest-neighbor image upscaling
//!
//! Magnifies a raster image by an integer factor, copying each source
//! pixel into a solid block of the output, either on one thread or with
//! one rayon task per output row.
//!
//! # Example
//!
//! ```
//! use upscale::{PixelGrid, Rgba};
//! use upscale::transform::{ScaleOptions, scale};
//!
//! let input = PixelGrid::new_filled(2, 1, Rgba::opaque(10, 20, 30)).unwrap();
//! let output = scale(&input, &ScaleOptions::new(3)).unwrap();
//! assert_eq!(output.dimensions(), (6, 3));
//! ```

// Re-export core types (the pixel grid is used everywhere)
pub use upscale_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use upscale_io as io;
pub use upscale_transform as transform;

pub mod cli;
