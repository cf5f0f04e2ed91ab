//! upscale-io - Image I/O for the upscale resizer
//!
//! Decodes image files into [`PixelGrid`]s and encodes grids back out.
//!
//! # Supported formats
//!
//! | Format | Read | Write | Feature |
//! |---|---|---|---|
//! | PNG | yes | yes | `png-format` |
//! | JPEG | yes | no | `jpeg` |

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;
use upscale_core::PixelGrid;

/// Read an image from a file, detecting the format from its header.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<PixelGrid> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let file = File::open(path)?;
    log::debug!("reading {} as {:?}", path.display(), format);
    read_image_format(BufReader::new(file), format)
}

/// Read an image from memory, detecting the format from its header.
pub fn read_image_mem(data: &[u8]) -> IoResult<PixelGrid> {
    let format = detect_format_from_bytes(data)?;
    read_image_format(Cursor::new(data), format)
}

#[cfg_attr(not(all(feature = "png-format", feature = "jpeg")), allow(unused_variables))]
fn read_image_format<R>(reader: R, format: ImageFormat) -> IoResult<PixelGrid>
where
    R: std::io::BufRead + std::io::Seek,
{
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(reader),
        other => Err(IoError::UnsupportedFormat(format!(
            "reading {:?} is not supported",
            other
        ))),
    }
}

/// Write an image to a file in the given format.
pub fn write_image<P: AsRef<Path>>(
    grid: &PixelGrid,
    path: P,
    format: ImageFormat,
) -> IoResult<()> {
    let path = path.as_ref();
    // Refuse unsupported formats before creating the file
    check_writable(format)?;
    log::debug!("writing {} as {:?}", path.display(), format);
    let mut writer = BufWriter::new(File::create(path)?);
    write_image_format(grid, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Encode an image into memory in the given format.
pub fn write_image_mem(grid: &PixelGrid, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_format(grid, &mut buffer, format)?;
    Ok(buffer)
}

fn check_writable(format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => Ok(()),
        other => Err(IoError::UnsupportedFormat(format!(
            "writing {:?} is not supported",
            other
        ))),
    }
}

#[cfg_attr(not(feature = "png-format"), allow(unused_variables))]
fn write_image_format<W: Write>(
    grid: &PixelGrid,
    writer: W,
    format: ImageFormat,
) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(grid, writer),
        other => Err(IoError::UnsupportedFormat(format!(
            "writing {:?} is not supported",
            other
        ))),
    }
}
