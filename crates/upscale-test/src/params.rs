//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use std::fs;
use upscale_core::PixelGrid;
use upscale_io::ImageFormat;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Run every check (default)
    #[default]
    Compare,
    /// Run every check and also save grids for visual inspection
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the index of the current check, the mode and
/// every recorded failure.
pub struct RegParams {
    /// Name of the test (e.g., "scale")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters, configured from the
    /// `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `expected` and `actual` differ by at most `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Check a boolean condition
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;
        if !condition {
            let msg = format!(
                "Failure in {}_reg: check for index {} - {}",
                self.test_name, self.index, what
            );
            self.fail(msg);
        }
        condition
    }

    /// Compare two grids for exact equality
    ///
    /// Returns `true` if the grids have the same size and every pixel
    /// matches.
    pub fn compare_grid(&mut self, grid1: &PixelGrid, grid2: &PixelGrid) -> bool {
        self.index += 1;

        if grid1.dimensions() != grid2.dimensions() {
            let msg = format!(
                "Failure in {}_reg: grid comparison for index {} - dimension mismatch \
                 {}x{} vs {}x{}",
                self.test_name,
                self.index,
                grid1.width(),
                grid1.height(),
                grid2.width(),
                grid2.height()
            );
            self.fail(msg);
            return false;
        }

        if let Ok(Some((x, y))) = grid1.first_diff(grid2) {
            let msg = format!(
                "Failure in {}_reg: grid comparison for index {} - pixel mismatch at ({}, {})",
                self.test_name, self.index, x, y
            );
            self.fail(msg);
            return false;
        }

        true
    }

    /// Save a grid under `tests/regout` when in display mode.
    ///
    /// Does nothing in compare mode. Zero-sized grids are skipped since
    /// they cannot be encoded.
    pub fn write_grid(&mut self, grid: &PixelGrid) -> TestResult<()> {
        self.index += 1;
        if !self.display() || grid.is_empty() {
            return Ok(());
        }

        let dir = regout_dir();
        fs::create_dir_all(&dir)?;
        let format = ImageFormat::Png;
        let local_path = format!(
            "{}/{}.{:02}.{}",
            dir,
            self.test_name,
            self.index,
            format.extension()
        );
        upscale_io::write_image(grid, &local_path, format).map_err(|e| {
            TestError::ImageWrite {
                path: local_path.clone(),
                message: e.to_string(),
            }
        })?;
        eprintln!("Wrote: {}", local_path);
        Ok(())
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use upscale_core::Rgba;

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_grid_reports_mismatch() {
        let mut rp = RegParams::new("test");
        let a = PixelGrid::new_filled(2, 2, Rgba::WHITE).unwrap();
        let mut m = a.to_mut();
        m.set_rgba(1, 0, Rgba::BLACK).unwrap();
        let b: PixelGrid = m.into();
        assert!(rp.compare_grid(&a, &a));
        assert!(!rp.compare_grid(&a, &b));
        assert!(rp.failures()[0].contains("(1, 0)"));
        assert_eq!(rp.index(), 2);
    }
}
