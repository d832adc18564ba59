//! Pipeline conversions module
//!
//! This module contains orchestration logic for decoding, pixelating and
//! re-encoding PPM images.

mod ppm_pixelate;


pub use ppm_pixelate::PixelatePipeline;
