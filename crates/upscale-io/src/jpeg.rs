//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate. Grayscale, RGB and
//! CMYK images are decoded to opaque RGBA.
//!
//! JPEG *writing* is not supported: the resizer always writes PNG.

use crate::{IoError, IoResult};
use jpeg_decoder::{Decoder, PixelFormat};
use log::debug;
use std::io::Read;
use upscale_core::{PixelGrid, color};

/// Read a JPEG image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<PixelGrid> {
    let mut decoder = Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let width = u32::from(info.width);
    let height = u32::from(info.height);
    debug!(
        "decoding JPEG {}x{} as {:?}",
        width, height, info.pixel_format
    );

    let data: Vec<u32> = match info.pixel_format {
        PixelFormat::L8 => pixels
            .iter()
            .map(|&g| color::compose_rgb(g, g, g))
            .collect(),
        // Big-endian samples; keep the high byte
        PixelFormat::L16 => pixels
            .chunks_exact(2)
            .map(|s| color::compose_rgb(s[0], s[0], s[0]))
            .collect(),
        PixelFormat::RGB24 => pixels
            .chunks_exact(3)
            .map(|p| color::compose_rgb(p[0], p[1], p[2]))
            .collect(),
        PixelFormat::CMYK32 => pixels
            .chunks_exact(4)
            .map(|p| {
                let (r, g, b) = cmyk_to_rgb(p[0], p[1], p[2], p[3]);
                color::compose_rgb(r, g, b)
            })
            .collect(),
    };

    PixelGrid::from_raw(width, height, data).map_err(|e| {
        IoError::InvalidData(format!("JPEG sample count does not match header: {}", e))
    })
}

/// Convert one CMYK sample to RGB.
fn cmyk_to_rgb(c: u8, m: u8, y: u8, k: u8) -> (u8, u8, u8) {
    let w = 255 - u32::from(k);
    let channel = |v: u8| ((255 - u32::from(v)) * w / 255) as u8;
    (channel(c), channel(m), channel(y))
}
