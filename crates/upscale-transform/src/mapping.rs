//! Output-to-source coordinate mapping
//!
//! Nearest-neighbor upscaling by an integer factor `f` maps output pixel
//! `(x, y)` to source pixel `(x / f, y / f)`. Every source pixel therefore
//! becomes a solid `f x f` block in the output.

use crate::{TransformError, TransformResult};
use std::fmt;
use std::num::NonZeroU32;

/// Integer magnification factor, always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScaleFactor(NonZeroU32);

impl ScaleFactor {
    /// Factor 1: the output is pixel-equal to the input.
    pub const IDENTITY: ScaleFactor = ScaleFactor(NonZeroU32::MIN);

    /// Validate a raw factor.
    ///
    /// # Errors
    ///
    /// - [`TransformError::InvalidArgument`] if `factor < 1`
    /// - [`TransformError::AllocationFailure`] if `factor` does not fit in a
    ///   `u32`, since even a 1x1 grid scaled by it has no representable size
    pub fn new(factor: i64) -> TransformResult<Self> {
        if factor < 1 {
            return Err(TransformError::InvalidArgument(format!(
                "scale factor must be at least 1, got {factor}"
            )));
        }
        u32::try_from(factor)
            .ok()
            .and_then(NonZeroU32::new)
            .map(ScaleFactor)
            .ok_or(TransformError::AllocationFailure {
                width: 1,
                height: 1,
                factor: factor.unsigned_abs(),
            })
    }

    /// The factor as an integer.
    #[inline]
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TryFrom<i64> for ScaleFactor {
    type Error = TransformError;

    fn try_from(factor: i64) -> TransformResult<Self> {
        Self::new(factor)
    }
}

impl TryFrom<u32> for ScaleFactor {
    type Error = TransformError;

    fn try_from(factor: u32) -> TransformResult<Self> {
        Self::new(i64::from(factor))
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Map an output coordinate back to the source pixel it copies.
#[inline]
pub fn source_coord(out_x: u32, out_y: u32, factor: ScaleFactor) -> (u32, u32) {
    let f = factor.get();
    (out_x / f, out_y / f)
}

/// Output dimensions for a `width` x `height` input.
///
/// # Errors
///
/// - [`TransformError::InvalidArgument`] if either input dimension is zero
/// - [`TransformError::AllocationFailure`] if either output dimension
///   overflows `u32` or the output pixel count overflows `usize`
pub fn target_dims(width: u32, height: u32, factor: ScaleFactor) -> TransformResult<(u32, u32)> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidArgument(format!(
            "cannot scale an empty {width}x{height} grid"
        )));
    }
    let f = factor.get();
    let overflow = || TransformError::AllocationFailure {
        width,
        height,
        factor: u64::from(f),
    };
    let out_w = width.checked_mul(f).ok_or_else(overflow)?;
    let out_h = height.checked_mul(f).ok_or_else(overflow)?;
    (out_w as usize)
        .checked_mul(out_h as usize)
        .ok_or_else(overflow)?;
    Ok((out_w, out_h))
}

/// Fill one output row from its source row.
///
/// Writes `dst_row[x] = src_row[x / factor]` for every `x`, so
/// `dst_row.len()` must be `src_row.len() * factor`.
#[inline]
pub fn replicate_row(src_row: &[u32], dst_row: &mut [u32], factor: ScaleFactor) {
    let f = factor.get() as usize;
    debug_assert_eq!(dst_row.len(), src_row.len() * f);
    for (block, &pixel) in dst_row.chunks_exact_mut(f).zip(src_row) {
        block.fill(pixel);
    }
}
