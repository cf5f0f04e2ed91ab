//! PixelGrid - The RGBA image container
//!
//! `PixelGrid` is the in-memory raster handed from a decoder to the
//! resampler and from the resampler to an encoder.
//!
//! # Pixel layout
//!
//! - Pixels are stored row-major, one packed 32-bit word per pixel
//! - There is no row padding: row `y` occupies `data[y*width..(y+1)*width]`
//! - Color order is RGBA (red in MSB), see [`crate::color`]
//!
//! # Ownership model
//!
//! `PixelGrid` uses `Arc` for cheap cloning: a clone is an explicitly
//! shared, read-only view of the same buffer. To modify pixel data,
//! convert to `PixelGridMut` via [`PixelGrid::try_into_mut`] or
//! [`PixelGrid::to_mut`], then convert back with `Into<PixelGrid>`.

mod access;
mod compare;
mod rgba;

pub use rgba::Rgba;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal grid data
#[derive(Debug, Clone)]
struct GridData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Packed RGBA pixels, `width * height` entries
    data: Vec<u32>,
}

impl GridData {
    fn allocate(width: u32, height: u32, fill: u32) -> Result<Self> {
        let len = pixel_count(width, height)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| Error::AllocationFailed { width, height })?;
        data.resize(len, fill);
        Ok(GridData {
            width,
            height,
            data,
        })
    }
}

/// Number of pixels in a `width` x `height` grid, checked against `usize`.
fn pixel_count(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(Error::AllocationFailed { width, height })
}

/// RGBA pixel grid
///
/// # Examples
///
/// ```
/// use upscale_core::{PixelGrid, Rgba};
///
/// let grid = PixelGrid::new_filled(3, 2, Rgba::WHITE).unwrap();
/// assert_eq!(grid.width(), 3);
/// assert_eq!(grid.height(), 2);
/// assert_eq!(grid.get_rgba(2, 1), Some(Rgba::WHITE));
/// ```
#[derive(Debug, Clone)]
pub struct PixelGrid {
    inner: Arc<GridData>,
}

impl PixelGrid {
    /// Create a new grid with every pixel set to transparent black.
    ///
    /// A zero width or height is allowed and produces an empty grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the pixel buffer cannot be
    /// allocated.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, Rgba::TRANSPARENT)
    }

    /// Create a new grid with every pixel set to `color`.
    pub fn new_filled(width: u32, height: u32, color: Rgba) -> Result<Self> {
        let inner = GridData::allocate(width, height, color.pack())?;
        Ok(PixelGrid {
            inner: Arc::new(inner),
        })
    }

    /// Wrap an existing buffer of packed RGBA words.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `data.len() != width * height`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        let expected = pixel_count(width, height)?;
        if data.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(PixelGrid {
            inner: Arc::new(GridData {
                width,
                height,
                data,
            }),
        })
    }

    /// Build a grid from interleaved RGBA bytes (4 bytes per pixel).
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let expected = pixel_count(width, height)?;
        if bytes.len() != expected.saturating_mul(4) {
            return Err(Error::DimensionMismatch {
                expected,
                actual: bytes.len() / 4,
            });
        }
        let data = bytes
            .chunks_exact(4)
            .map(|p| crate::color::compose_rgba(p[0], p[1], p[2], p[3]))
            .collect();
        Self::from_raw(width, height, data)
    }

    /// Get the grid width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the grid height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Number of pixels in the grid.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.data.len()
    }

    /// Whether the grid has no pixels (zero width or height).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.data.is_empty()
    }

    /// Get raw access to the packed pixels.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the number of strong references to this grid's buffer.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Get the pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u32] {
        assert!(y < self.inner.height, "row {y} out of bounds");
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &self.inner.data[start..start + w]
    }

    /// Iterate over the rows top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u32]> {
        (0..self.inner.height).map(move |y| self.row(y))
    }

    /// Interleaved RGBA bytes, 4 per pixel, row-major.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len() * 4);
        for &p in self.data() {
            out.extend_from_slice(&p.to_be_bytes());
        }
        out
    }

    /// Whether every pixel has alpha 255.
    pub fn is_opaque(&self) -> bool {
        self.data().iter().all(|&p| crate::color::alpha(p) == 255)
    }

    /// Create a deep copy of this grid.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        PixelGrid {
            inner: Arc::new(GridData::clone(&self.inner)),
        }
    }

    /// Try to get mutable access to the pixel data.
    ///
    /// Succeeds only if there is exactly one reference to the buffer.
    pub fn try_into_mut(self) -> std::result::Result<PixelGridMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixelGridMut { inner: data }),
            Err(arc) => Err(PixelGrid { inner: arc }),
        }
    }

    /// Create a mutable copy of this grid.
    pub fn to_mut(&self) -> PixelGridMut {
        PixelGridMut {
            inner: GridData::clone(&self.inner),
        }
    }
}

/// Mutable pixel grid
///
/// Holds its buffer exclusively. Convert back to an immutable
/// [`PixelGrid`] using `Into<PixelGrid>`.
#[derive(Debug)]
pub struct PixelGridMut {
    inner: GridData,
}

impl PixelGridMut {
    /// Allocate a mutable grid with every pixel set to transparent black.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(PixelGridMut {
            inner: GridData::allocate(width, height, Rgba::TRANSPARENT.pack())?,
        })
    }

    /// Get the grid width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the grid height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get raw access to the packed pixels.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable access to the packed pixels.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get the pixels of row `y` for writing.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u32] {
        assert!(y < self.inner.height, "row {y} out of bounds");
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &mut self.inner.data[start..start + w]
    }

    /// Iterate over disjoint mutable rows, top to bottom.
    ///
    /// Yields nothing for a zero-width grid.
    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, u32> {
        let w = self.inner.width.max(1) as usize;
        self.inner.data.chunks_exact_mut(w)
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Rgba) {
        self.inner.data.fill(color.pack());
    }
}

impl From<PixelGridMut> for PixelGrid {
    fn from(grid: PixelGridMut) -> Self {
        PixelGrid {
            inner: Arc::new(grid.inner),
        }
    }
}
