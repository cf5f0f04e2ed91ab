//! The `resize` command line tool
//!
//! ```text
//! resize [options...] <input image> [<output PNG image>]
//! ```
//!
//! Exit codes: 1 for usage or resize errors, 2 when the input cannot be
//! read, 3 when it cannot be decoded, 4 when the output cannot be created
//! and 5 when it cannot be encoded.

use clap::Parser;
use log::{info, warn};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use upscale_io::{ImageFormat, IoError};
use upscale_transform::{ScaleOptions, TransformError};

const EXAMPLES: &str = "\
Examples:

    $ resize --factor=2 testdata/2.png
    $ resize -f=2 testdata/1.png new.png
    $ resize -f 2 -c testdata/1.png new.png";

/// Command line arguments
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "resize")]
#[command(about = "resize is a tool for resizing an image by a provided factor.")]
#[command(long_about = "resize is a tool for resizing an image by a provided factor.\n\n\
    If no factor is specified, defaults to factor 1. If no output filename is\n\
    provided, the resized image is written to ./out.png")]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Resize factor.
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub factor: i64,

    /// Resize concurrently.
    #[arg(short, long)]
    pub concurrent: bool,

    /// Worker threads when resizing concurrently (0 = one per core).
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Input image (PNG or JPEG).
    pub input: PathBuf,

    /// Output PNG image.
    #[arg(default_value = "out.png")]
    pub output: PathBuf,
}

impl Cli {
    /// Resize configuration selected by the arguments.
    pub fn scale_options(&self) -> ScaleOptions {
        let options = ScaleOptions::new(self.factor).with_parallel(self.concurrent);
        match self.threads {
            Some(threads) => options.with_threads(threads),
            None => options,
        }
    }
}

/// A failed `resize` run, by stage
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid factor or the resampler failed
    #[error("{0}")]
    Resize(#[from] TransformError),

    /// Input could not be opened or read
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Input could not be decoded
    #[error("cannot decode {}: {source}", .path.display())]
    Decode { path: PathBuf, source: IoError },

    /// Output could not be created
    #[error("cannot create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Output could not be encoded or written
    #[error("cannot encode {}: {source}", .path.display())]
    Encode { path: PathBuf, source: IoError },
}

impl CliError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Resize(_) => 1,
            CliError::Open { .. } => 2,
            CliError::Decode { .. } => 3,
            CliError::Create { .. } => 4,
            CliError::Encode { .. } => 5,
        }
    }
}

/// Decode the input, resize it and write the output PNG.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    let options = cli.scale_options();
    // Reject a bad factor before touching any file
    options.scale_factor()?;
    warn_if_not_png(&cli.output);

    let data = fs::read(&cli.input).map_err(|source| CliError::Open {
        path: cli.input.clone(),
        source,
    })?;
    let input = upscale_io::read_image_mem(&data).map_err(|source| CliError::Decode {
        path: cli.input.clone(),
        source,
    })?;

    if options.parallel {
        info!("Concurrently resizing...");
    } else {
        info!("Resizing...");
    }
    let output = upscale_transform::scale(&input, &options)?;

    let file = File::create(&cli.output).map_err(|source| CliError::Create {
        path: cli.output.clone(),
        source,
    })?;
    let encode_err = |source: IoError| CliError::Encode {
        path: cli.output.clone(),
        source,
    };
    let mut writer = BufWriter::new(file);
    upscale_io::png::write_png(&output, &mut writer).map_err(encode_err)?;
    writer.flush().map_err(|e| encode_err(IoError::Io(e)))?;

    info!(
        "Wrote {} ({}x{} -> {}x{})",
        cli.output.display(),
        input.width(),
        input.height(),
        output.width(),
        output.height()
    );
    Ok(())
}

/// The output is always PNG; say so when its name suggests otherwise.
/// Returns whether a warning was logged.
fn warn_if_not_png(output: &Path) -> bool {
    let format = ImageFormat::from_path(output);
    if format == ImageFormat::Png {
        return false;
    }
    warn!(
        "{} does not end in .png, writing PNG data anyway",
        output.display()
    );
    true
}
