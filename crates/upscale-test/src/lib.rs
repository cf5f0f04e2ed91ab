//! upscale-test - Regression test framework for the upscale workspace
//!
//! Provides [`RegParams`], which tracks a numbered sequence of checks and
//! reports every failure at the end of a test, and a few synthetic
//! fixture grids so tests do not depend on image files.
//!
//! # Usage
//!
//! ```ignore
//! use upscale_test::{RegParams, pattern_grid};
//!
//! let mut rp = RegParams::new("scale");
//! let grid = pattern_grid(5, 3);
//! rp.compare_values(15.0, grid.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display". In display
//!   mode grids passed to [`RegParams::write_grid`] are saved as PNG
//!   under `tests/regout` for visual inspection.

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use upscale_core::{PixelGrid, Rgba};

/// Grid where every pixel is `color`.
pub fn solid_grid(width: u32, height: u32, color: Rgba) -> PixelGrid {
    PixelGrid::new_filled(width, height, color).expect("fixture grid allocation")
}

/// Grid where every pixel is distinct for grids up to 256x256.
///
/// Red encodes x, green encodes y, blue mixes both and alpha varies, so
/// any misplaced copy shows up as a pixel mismatch.
pub fn pattern_grid(width: u32, height: u32) -> PixelGrid {
    let data = (0..height)
        .flat_map(|y| (0..width).map(move |x| pattern_pixel(x, y)))
        .collect();
    PixelGrid::from_raw(width, height, data).expect("fixture grid size")
}

fn pattern_pixel(x: u32, y: u32) -> u32 {
    Rgba::new(
        x as u8,
        y as u8,
        (x.wrapping_mul(7) ^ y.wrapping_mul(13)) as u8,
        255 - ((x + y) % 64) as u8,
    )
    .pack()
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // upscale-test is at crates/upscale-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_grid_is_distinct() {
        let grid = pattern_grid(16, 16);
        let mut seen = std::collections::HashSet::new();
        assert!(grid.data().iter().all(|p| seen.insert(*p)));
    }

    #[test]
    fn test_solid_grid() {
        let grid = solid_grid(3, 3, Rgba::WHITE);
        assert!(grid.data().iter().all(|&p| p == Rgba::WHITE.pack()));
    }
}
