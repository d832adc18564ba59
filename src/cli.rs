//! Command-line front end.
//!
//! Parsing is kept separate from the process lifecycle: [`run`] takes the
//! parsed options and returns a [`Result`], leaving exit codes to `main`.

use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info};

use crate::image_pipeline::{
    PixelateConfig, PixelateError, PixelatePipeline, Result, DEFAULT_BLOCK_WIDTH,
};

pub const DEFAULT_OUTPUT_FILE: &str = "output.ppm";

#[derive(Parser, Debug, Clone)]
#[command(name = "pixelator", about = "Pixelate a PPM image.")]
#[command(override_usage = "pixelator [options] ppmfile")]
pub struct Cli {
    /// PPM image to pixelate (P3 or P6)
    #[arg(value_name = "PPMFILE")]
    pub input: Option<PathBuf>,

    /// Name of the output file
    #[arg(short = 'o', long = "output-file", value_name = "PATH", default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: PathBuf,

    /// How wide to make each pixel
    #[arg(short = 'p', long = "pixel-width", value_name = "WIDTH", default_value_t = DEFAULT_BLOCK_WIDTH)]
    pub pixel_width: usize,
}

impl Cli {
    pub fn config(&self) -> PixelateConfig {
        PixelateConfig::builder()
            .block_width(self.pixel_width)
            .build()
    }
}

/// Pixelates the input file named on the command line into the output file.
///
/// # Errors
///
/// * `UsageError` - no input file was given
/// * `InvalidParameter` - a pixel width of zero
/// * any codec or file error raised by [`PixelatePipeline::convert_file`]
pub fn run(cli: &Cli) -> Result<()> {
    let input = cli
        .input
        .as_ref()
        .ok_or_else(|| PixelateError::UsageError("no input file given".to_string()))?;

    let pipeline = PixelatePipeline::new(cli.config())?;
    info!("Block width: {}", pipeline.config().block_width);

    let timings = pipeline.convert_file_with_timings(input, &cli.output_file)?;
    timings.log_summary();
    debug!("Wrote {}", cli.output_file.display());

    Ok(())
}
