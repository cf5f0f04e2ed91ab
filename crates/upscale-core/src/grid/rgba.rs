//! RGBA quadruple

use crate::color;

/// One RGBA pixel, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black, the initial value of a new grid.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    /// Opaque color from red, green and blue.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 255 }
    }

    /// Pack into a `0xRRGGBBAA` word.
    #[inline]
    pub fn pack(self) -> u32 {
        color::compose_rgba(self.r, self.g, self.b, self.a)
    }

    /// Unpack a `0xRRGGBBAA` word.
    #[inline]
    pub fn unpack(pixel: u32) -> Self {
        let (r, g, b, a) = color::extract_rgba(pixel);
        Rgba { r, g, b, a }
    }
}

impl From<u32> for Rgba {
    fn from(pixel: u32) -> Self {
        Rgba::unpack(pixel)
    }
}

impl From<Rgba> for u32 {
    fn from(c: Rgba) -> Self {
        c.pack()
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Rgba { r, g, b, a }
    }
}
