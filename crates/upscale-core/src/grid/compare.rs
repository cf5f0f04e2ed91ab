//! Grid comparison operations
//!
//! - Pixel equality (`PartialEq`)
//! - Pixel difference counting
//! - First differing coordinate

use super::PixelGrid;
use crate::error::{Error, Result};

impl PixelGrid {
    fn check_same_size(&self, other: &PixelGrid) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(Error::InvalidParameter(format!(
                "grid sizes differ: {}x{} vs {}x{}",
                self.width(),
                self.height(),
                other.width(),
                other.height()
            )));
        }
        Ok(())
    }

    /// Count the pixels that differ between two grids of the same size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the dimensions differ.
    pub fn count_diffs(&self, other: &PixelGrid) -> Result<u64> {
        self.check_same_size(other)?;
        Ok(self
            .data()
            .iter()
            .zip(other.data())
            .filter(|(a, b)| a != b)
            .count() as u64)
    }

    /// Find the first differing coordinate in row-major order.
    ///
    /// Returns `Ok(None)` when the grids are pixel-equal.
    pub fn first_diff(&self, other: &PixelGrid) -> Result<Option<(u32, u32)>> {
        self.check_same_size(other)?;
        let width = self.width() as usize;
        Ok(self
            .data()
            .iter()
            .zip(other.data())
            .position(|(a, b)| a != b)
            .map(|i| ((i % width) as u32, (i / width) as u32)))
    }
}

impl PartialEq for PixelGrid {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions() && self.data() == other.data()
    }
}

impl Eq for PixelGrid {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgba;

    #[test]
    fn test_equal_and_diffs() {
        let a = PixelGrid::new_filled(4, 4, Rgba::WHITE).unwrap();
        let b = a.deep_clone();
        assert_eq!(a, b);
        assert_eq!(a.count_diffs(&b).unwrap(), 0);
        assert_eq!(a.first_diff(&b).unwrap(), None);

        let mut m = b.to_mut();
        m.set_rgba(3, 2, Rgba::BLACK).unwrap();
        m.set_rgba(1, 3, Rgba::BLACK).unwrap();
        let b: PixelGrid = m.into();
        assert_ne!(a, b);
        assert_eq!(a.count_diffs(&b).unwrap(), 2);
        assert_eq!(a.first_diff(&b).unwrap(), Some((3, 2)));
    }

    #[test]
    fn test_size_mismatch() {
        let a = PixelGrid::new(2, 3).unwrap();
        let b = PixelGrid::new(3, 2).unwrap();
        assert_ne!(a, b);
        assert!(a.count_diffs(&b).is_err());
        assert!(a.first_diff(&b).is_err());
    }
}
