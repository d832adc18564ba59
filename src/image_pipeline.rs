//! Image processing pipeline module
//!
//! This module provides a structured approach to PPM pixelation, with
//! separate modules for PPM reading and writing, the pixelation transform,
//! and conversion orchestration.

pub mod ppm;
pub mod pixelate;
pub mod conversions;
pub mod common;
pub mod timing;

pub use common::{
    PixelateError,
    Result,
};

pub use ppm::{
    FormatTag,
    Raster,
    RasterReader,
    RasterWriter,
    NetpbmReader,
    NetpbmWriter,
};

pub use pixelate::{
    pixelate,
    PixelateConfig,
    PixelateConfigBuilder,
    DEFAULT_BLOCK_WIDTH,
};

pub use conversions::{
    PixelatePipeline,
};

pub use timing::{PipelineTimings, StepTiming, Timer};
