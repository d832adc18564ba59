//! Block-averaging pixelation of PPM images.
//!
//! ```no_run
//! use ppm_pixelator::image_pipeline::{PixelateConfig, PixelatePipeline};
//!
//! let config = PixelateConfig::builder().block_width(16).build();
//! let pipeline = PixelatePipeline::new(config)?;
//! pipeline.convert_file("input.ppm", "output.ppm")?;
//! # Ok::<(), ppm_pixelator::image_pipeline::PixelateError>(())
//! ```

pub mod cli;
pub mod image_pipeline;
pub mod logger;
