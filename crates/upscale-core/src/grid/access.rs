//! Pixel access functions
//!
//! Bounds-checked and unchecked getters and setters for single pixels.

use super::{PixelGrid, PixelGridMut, Rgba};
use crate::error::{Error, Result};

#[inline]
fn index_of(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

impl PixelGrid {
    /// Get the packed pixel at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get the packed pixel without bounds checking against the grid shape.
    ///
    /// # Panics
    ///
    /// Panics if the computed index falls outside the buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[index_of(self.width(), x, y)]
    }

    /// Get the RGBA value at (x, y).
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<Rgba> {
        self.get_pixel(x, y).map(Rgba::unpack)
    }
}

impl PixelGridMut {
    /// Get the packed pixel at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.data()[index_of(self.width(), x, y)])
    }

    /// Get the RGBA value at (x, y).
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<Rgba> {
        self.get_pixel(x, y).map(Rgba::unpack)
    }

    /// Set the packed pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        if x >= width || y >= height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set the packed pixel without bounds checking against the grid shape.
    ///
    /// # Panics
    ///
    /// Panics if the computed index falls outside the buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let idx = index_of(self.width(), x, y);
        self.data_mut()[idx] = val;
    }

    /// Set the RGBA value at (x, y).
    pub fn set_rgba(&mut self, x: u32, y: u32, color: Rgba) -> Result<()> {
        self.set_pixel(x, y, color.pack())
    }
}
