//! PNG image format support
//!
//! Every PNG color type is decoded to RGBA: palettes and sub-byte depths
//! are expanded by the decoder, a `tRNS` chunk becomes alpha, gray is
//! replicated into the three color channels and 16-bit samples keep
//! their high byte.

use crate::{IoError, IoResult};
use log::debug;
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};
use upscale_core::{PixelGrid, PixelGridMut, color};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<PixelGrid> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };
    let (color_type, bit_depth) = reader.output_color_type();
    debug!(
        "decoding PNG {}x{} as {:?} {:?}",
        width, height, color_type, bit_depth
    );

    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "PNG palette was not expanded".to_string(),
            ));
        }
    };
    let bytes_per_sample = match bit_depth {
        BitDepth::Eight => 1,
        BitDepth::Sixteen => 2,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG output depth: {:?}",
                other
            )));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let stride = samples * bytes_per_sample;
    let data = &buf[..output_info.buffer_size()];

    let mut grid = PixelGridMut::new(width, height)?;

    for (y, row) in grid.rows_mut().enumerate() {
        let src = &data[y * bytes_per_row..];
        for (x, pixel) in row.iter_mut().enumerate() {
            // High byte of each sample; big-endian for 16-bit
            let s = |i: usize| src[x * stride + i * bytes_per_sample];
            *pixel = match color_type {
                ColorType::Grayscale => color::compose_rgb(s(0), s(0), s(0)),
                ColorType::GrayscaleAlpha => color::compose_rgba(s(0), s(0), s(0), s(1)),
                ColorType::Rgb => color::compose_rgb(s(0), s(1), s(2)),
                _ => color::compose_rgba(s(0), s(1), s(2), s(3)),
            };
        }
    }

    Ok(grid.into())
}

/// Write a PNG image
///
/// Opaque grids are written as 8-bit RGB, anything with transparency
/// as 8-bit RGBA.
pub fn write_png<W: Write>(grid: &PixelGrid, writer: W) -> IoResult<()> {
    let (width, height) = grid.dimensions();
    if grid.is_empty() {
        return Err(IoError::InvalidData(format!(
            "cannot encode {}x{} image as PNG",
            width, height
        )));
    }

    let (color_type, samples) = if grid.is_opaque() {
        (ColorType::Rgb, 3)
    } else {
        (ColorType::Rgba, 4)
    };
    debug!("encoding PNG {}x{} as {:?}", width, height, color_type);

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut data = Vec::with_capacity(grid.len() * samples);
    for &pixel in grid.data() {
        let (r, g, b, a) = color::extract_rgba(pixel);
        data.extend_from_slice(&[r, g, b]);
        if samples == 4 {
            data.push(a);
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use upscale_core::Rgba;

    #[test]
    fn test_png_roundtrip_rgba() {
        let mut grid = PixelGridMut::new(5, 4).unwrap();
        grid.set_rgba(0, 0, Rgba::new(255, 0, 0, 255)).unwrap();
        grid.set_rgba(1, 1, Rgba::new(0, 255, 0, 128)).unwrap();
        grid.set_rgba(4, 3, Rgba::new(0, 0, 255, 1)).unwrap();
        let grid: PixelGrid = grid.into();

        let mut buffer = Vec::new();
        write_png(&grid, &mut buffer).unwrap();
        let grid2 = read_png(Cursor::new(buffer)).unwrap();

        assert_eq!(grid2, grid);
    }

    #[test]
    fn test_png_opaque_written_as_rgb() {
        let grid = PixelGrid::new_filled(3, 2, Rgba::opaque(10, 20, 30)).unwrap();
        let mut buffer = Vec::new();
        write_png(&grid, &mut buffer).unwrap();

        let decoder = Decoder::new(Cursor::new(buffer.clone()));
        let reader = decoder.read_info().unwrap();
        assert_eq!(reader.info().color_type, ColorType::Rgb);

        assert_eq!(read_png(Cursor::new(buffer)).unwrap(), grid);
    }

    #[test]
    fn test_png_read_grayscale() {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 2, 1);
            encoder.set_color(ColorType::Grayscale);
            encoder.set_depth(BitDepth::Eight);
            let mut w = encoder.write_header().unwrap();
            w.write_image_data(&[7, 200]).unwrap();
        }
        let grid = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(grid.get_rgba(0, 0), Some(Rgba::opaque(7, 7, 7)));
        assert_eq!(grid.get_rgba(1, 0), Some(Rgba::opaque(200, 200, 200)));
    }

    #[test]
    fn test_png_read_16bit_keeps_high_byte() {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 1, 1);
            encoder.set_color(ColorType::Rgb);
            encoder.set_depth(BitDepth::Sixteen);
            let mut w = encoder.write_header().unwrap();
            w.write_image_data(&[0x12, 0x34, 0xab, 0xcd, 0xff, 0x00])
                .unwrap();
        }
        let grid = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(grid.get_rgba(0, 0), Some(Rgba::opaque(0x12, 0xab, 0xff)));
    }

    #[test]
    fn test_png_read_indexed() {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 2, 1);
            encoder.set_color(ColorType::Indexed);
            encoder.set_depth(BitDepth::Eight);
            encoder.set_palette(vec![1, 2, 3, 4, 5, 6]);
            let mut w = encoder.write_header().unwrap();
            w.write_image_data(&[1, 0]).unwrap();
        }
        let grid = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(grid.get_rgba(0, 0), Some(Rgba::opaque(4, 5, 6)));
        assert_eq!(grid.get_rgba(1, 0), Some(Rgba::opaque(1, 2, 3)));
    }

    #[test]
    fn test_png_write_empty_fails() {
        let grid = PixelGrid::new(0, 3).unwrap();
        let mut buffer = Vec::new();
        assert!(matches!(
            write_png(&grid, &mut buffer),
            Err(IoError::InvalidData(_))
        ));
    }
}
