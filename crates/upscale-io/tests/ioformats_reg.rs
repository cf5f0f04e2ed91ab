//! I/O formats regression test
//!
//! Round trips fixture grids through PNG on disk and in memory, and
//! checks the unsupported paths report errors instead of writing files.

use upscale_core::Rgba;
use upscale_io::{
    ImageFormat, IoError, detect_format, read_image, read_image_mem, write_image,
    write_image_mem,
};
use upscale_test::{RegParams, pattern_grid, solid_grid};

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("upscale_ioformats_{}_{}", std::process::id(), name))
}

#[test]
fn ioformats_reg_png_file() {
    let mut rp = RegParams::new("ioformats_png_file");

    let grid = pattern_grid(23, 17);
    let path = temp_path("pattern.png");
    write_image(&grid, &path, ImageFormat::Png).expect("write png");

    rp.check(
        detect_format(&path).expect("detect") == ImageFormat::Png,
        "written file detected as PNG",
    );
    let back = read_image(&path).expect("read png");
    rp.compare_grid(&grid, &back);
    let _ = std::fs::remove_file(&path);

    assert!(rp.cleanup(), "ioformats png file test failed");
}

#[test]
fn ioformats_reg_png_mem() {
    let mut rp = RegParams::new("ioformats_png_mem");

    let opaque = solid_grid(4, 4, Rgba::opaque(10, 20, 30));
    let bytes = write_image_mem(&opaque, ImageFormat::Png).expect("encode opaque");
    rp.compare_grid(&opaque, &read_image_mem(&bytes).expect("decode opaque"));

    let translucent = solid_grid(3, 5, Rgba::new(1, 2, 3, 4));
    let bytes = write_image_mem(&translucent, ImageFormat::Png).expect("encode translucent");
    rp.compare_grid(&translucent, &read_image_mem(&bytes).expect("decode translucent"));

    assert!(rp.cleanup(), "ioformats png mem test failed");
}

#[test]
fn ioformats_reg_unsupported() {
    let mut rp = RegParams::new("ioformats_unsupported");

    let grid = solid_grid(2, 2, Rgba::WHITE);
    let path = temp_path("never.jpg");
    let err = write_image(&grid, &path, ImageFormat::Jpeg).unwrap_err();
    rp.check(
        matches!(err, IoError::UnsupportedFormat(_)),
        "jpeg write unsupported",
    );
    rp.check(!path.exists(), "no file created for unsupported format");

    let err = read_image_mem(b"BM not really a bitmap").unwrap_err();
    rp.check(
        matches!(err, IoError::UnsupportedFormat(_)),
        "unknown magic rejected",
    );

    let err = read_image(temp_path("missing.png")).unwrap_err();
    rp.check(matches!(err, IoError::Io(_)), "missing file is an I/O error");

    assert!(rp.cleanup(), "ioformats unsupported test failed");
}
