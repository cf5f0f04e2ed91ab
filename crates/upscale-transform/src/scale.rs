//! Integer nearest-neighbor upscaling
//!
//! Two interchangeable strategies produce identical output:
//!
//! - [`scale_sequential`] fills the output rows on the calling thread
//! - [`scale_parallel`] hands each output row to a rayon worker and
//!   returns only once every row is written
//!
//! [`scale`] picks one from a [`ScaleOptions`].
//!
//! The output grid is allocated at full size before any row is written.
//! Rows are disjoint `&mut` slices of that buffer, so no two workers can
//! ever write the same pixel, and the input is only read.

use crate::mapping::{ScaleFactor, replicate_row, source_coord, target_dims};
use crate::{TransformError, TransformResult};
use rayon::prelude::*;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use upscale_core::{PixelGrid, PixelGridMut};

/// Execution strategy for filling the output grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleStrategy {
    /// Single-threaded, rows top to bottom
    #[default]
    Sequential,
    /// One unit of work per output row on a rayon pool
    Parallel,
}

/// Resize configuration
///
/// `factor` is kept raw so that validation happens in one place,
/// when the options are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleOptions {
    /// Magnification factor (default 1)
    pub factor: i64,
    /// Use the parallel strategy (default false)
    pub parallel: bool,
    /// Worker count for a dedicated pool; `None` uses the global pool
    pub threads: Option<usize>,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            factor: 1,
            parallel: false,
            threads: None,
        }
    }
}

impl ScaleOptions {
    /// Options for `factor` with the sequential strategy.
    pub fn new(factor: i64) -> Self {
        Self {
            factor,
            ..Self::default()
        }
    }

    /// Select the parallel or sequential strategy.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Run parallel work on a dedicated pool of `threads` workers.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// The strategy these options select.
    pub fn strategy(&self) -> ScaleStrategy {
        if self.parallel {
            ScaleStrategy::Parallel
        } else {
            ScaleStrategy::Sequential
        }
    }

    /// The validated factor.
    pub fn scale_factor(&self) -> TransformResult<ScaleFactor> {
        ScaleFactor::new(self.factor)
    }
}

/// Upscale `input` as configured by `options`.
///
/// # Errors
///
/// - [`TransformError::InvalidArgument`] for a factor below 1 or an empty input
/// - [`TransformError::AllocationFailure`] if the output is too large
/// - [`TransformError::TaskFailure`] if a parallel worker fails
pub fn scale(input: &PixelGrid, options: &ScaleOptions) -> TransformResult<PixelGrid> {
    let factor = options.scale_factor().map_err(|e| match e {
        TransformError::AllocationFailure { factor, .. } => TransformError::AllocationFailure {
            width: input.width(),
            height: input.height(),
            factor,
        },
        other => other,
    })?;
    match (options.strategy(), options.threads) {
        (ScaleStrategy::Parallel, Some(threads)) => scale_parallel_with(input, factor, threads),
        (strategy, _) => scale_with_strategy(input, factor, strategy),
    }
}

/// Upscale `input` by `factor` using `strategy`.
pub fn scale_with_strategy(
    input: &PixelGrid,
    factor: ScaleFactor,
    strategy: ScaleStrategy,
) -> TransformResult<PixelGrid> {
    match strategy {
        ScaleStrategy::Sequential => scale_sequential(input, factor),
        ScaleStrategy::Parallel => scale_parallel(input, factor),
    }
}

/// Upscale `input` by `factor` on the calling thread.
///
/// Rows are produced top to bottom, pixels left to right.
pub fn scale_sequential(input: &PixelGrid, factor: ScaleFactor) -> TransformResult<PixelGrid> {
    let mut output = allocate_output(input, factor)?;
    for (out_y, row) in output.rows_mut().enumerate() {
        fill_row(input, out_y as u32, row, factor);
    }
    Ok(output.into())
}

/// Upscale `input` by `factor` on rayon's global pool.
///
/// Blocks until every row has been written.
pub fn scale_parallel(input: &PixelGrid, factor: ScaleFactor) -> TransformResult<PixelGrid> {
    let mut output = allocate_output(input, factor)?;
    par_fill_rows(&mut output, |out_y, row| fill_row(input, out_y, row, factor))?;
    Ok(output.into())
}

/// Upscale `input` by `factor` on a dedicated pool of `threads` workers.
///
/// `threads == 0` lets rayon choose, as for the global pool.
///
/// # Errors
///
/// Returns [`TransformError::TaskFailure`] if the pool cannot be built,
/// in addition to the errors of [`scale_parallel`].
pub fn scale_parallel_with(
    input: &PixelGrid,
    factor: ScaleFactor,
    threads: usize,
) -> TransformResult<PixelGrid> {
    let mut output = allocate_output(input, factor)?;
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| TransformError::TaskFailure(format!("cannot build thread pool: {e}")))?;
    pool.install(|| par_fill_rows(&mut output, |out_y, row| fill_row(input, out_y, row, factor)))?;
    Ok(output.into())
}

/// Allocate the full output grid up front.
fn allocate_output(input: &PixelGrid, factor: ScaleFactor) -> TransformResult<PixelGridMut> {
    let (width, height) = input.dimensions();
    let (out_w, out_h) = target_dims(width, height, factor)?;
    PixelGridMut::new(out_w, out_h).map_err(|e| match e {
        upscale_core::Error::AllocationFailed { .. } => TransformError::AllocationFailure {
            width,
            height,
            factor: u64::from(factor.get()),
        },
        other => TransformError::Core(other),
    })
}

/// Write output row `out_y` from the source row it maps to.
#[inline]
fn fill_row(input: &PixelGrid, out_y: u32, row: &mut [u32], factor: ScaleFactor) {
    let (_, src_y) = source_coord(0, out_y, factor);
    replicate_row(input.row(src_y), row, factor);
}

/// Fan out one task per output row and join them all.
///
/// A panicking task is reported as [`TransformError::TaskFailure`] once
/// every other task has finished; the partially written grid is left to
/// the caller to drop.
fn par_fill_rows<F>(output: &mut PixelGridMut, fill: F) -> TransformResult<()>
where
    F: Fn(u32, &mut [u32]) + Sync,
{
    let width = output.width() as usize;
    panic::catch_unwind(AssertUnwindSafe(|| {
        output
            .data_mut()
            .par_chunks_exact_mut(width)
            .enumerate()
            .for_each(|(out_y, row)| fill(out_y as u32, row));
    }))
    .map_err(|payload| TransformError::TaskFailure(panic_message(payload.as_ref())))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "worker panicked".to_string()
    }
}
