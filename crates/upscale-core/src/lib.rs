//! upscale-core - Pixel grid for nearest-neighbor resizing
//!
//! This crate provides the data model shared by the resampler, the codecs
//! and the command-line tool:
//!
//! - [`PixelGrid`] / [`PixelGridMut`] - RGBA pixel grid (immutable / mutable)
//! - [`Rgba`] - A single RGBA quadruple
//! - [`color`] - Helpers for packed 32-bit RGBA words

pub mod error;
pub mod grid;

pub use error::{Error, Result};
pub use grid::{PixelGrid, PixelGridMut, Rgba};

/// Color channel helpers for packed 32-bit RGBA pixels.
///
/// # Pixel format
///
/// Pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Extract red component from a packed pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a packed pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a packed pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Extract alpha component from a packed pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Compose an opaque pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_rgba(r, g, b, 255)
    }

    /// Compose a packed RGBA pixel.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | ((a as u32) << ALPHA_SHIFT)
    }

    /// Extract RGBA values from a packed pixel.
    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel), alpha(pixel))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_compose_extract() {
            let p = compose_rgba(10, 20, 30, 40);
            assert_eq!(p, 0x0a14_1e28);
            assert_eq!(extract_rgba(p), (10, 20, 30, 40));
        }

        #[test]
        fn test_compose_rgb_is_opaque() {
            assert_eq!(alpha(compose_rgb(1, 2, 3)), 255);
            assert_eq!(red(compose_rgb(1, 2, 3)), 1);
            assert_eq!(green(compose_rgb(1, 2, 3)), 2);
            assert_eq!(blue(compose_rgb(1, 2, 3)), 3);
        }
    }
}
