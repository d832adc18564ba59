//! PPM raster types

use crate::image_pipeline::common::error::{PixelateError, Result};

/// Number of interleaved channels per pixel (R, G, B).
pub const CHANNELS: usize = 3;

/// PPM variants, identified by the magic number at the start of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatTag {
    /// `P3`: samples written as decimal text
    Ascii,
    /// `P6`: samples written as raw bytes
    Binary,
}

impl FormatTag {
    pub fn magic(self) -> &'static str {
        match self {
            FormatTag::Ascii => "P3",
            FormatTag::Binary => "P6",
        }
    }

    pub fn from_magic(magic: &str) -> Option<Self> {
        match magic {
            "P3" => Some(FormatTag::Ascii),
            "P6" => Some(FormatTag::Binary),
            _ => None,
        }
    }
}

/// Represents a decoded RGB image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Largest value a channel may take (at most 255)
    pub max_color_value: u8,
    /// Which PPM variant the image was read from / will be written as
    pub format: FormatTag,
    /// Row-major pixel data interleaved [R, G, B, R, G, B, ...]
    pub pixels: Vec<u8>,
}

impl Raster {
    /// Builds a raster, checking that the buffer matches the dimensions.
    pub fn new(
        width: usize,
        height: usize,
        max_color_value: u8,
        format: FormatTag,
        pixels: Vec<u8>,
    ) -> Result<Self> {
        let raster = Self {
            width,
            height,
            max_color_value,
            format,
            pixels,
        };
        raster.validate()?;
        Ok(raster)
    }

    /// Expected buffer length for the current dimensions, if it fits in `usize`.
    pub fn expected_len(&self) -> Option<usize> {
        buffer_len(self.width, self.height)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PixelateError::InvalidDimensions(self.width, self.height));
        }

        let expected = self
            .expected_len()
            .ok_or(PixelateError::InvalidDimensions(self.width, self.height))?;
        if self.pixels.len() != expected {
            return Err(PixelateError::BufferSizeMismatch {
                expected,
                actual: self.pixels.len(),
            });
        }

        Ok(())
    }

    /// The RGB triple at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`, or if the pixel buffer is
    /// shorter than the dimensions require.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let idx = (y * self.width + x) * CHANNELS;
        [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]]
    }
}

/// `width * height * 3`, or `None` on overflow.
pub fn buffer_len(width: usize, height: usize) -> Option<usize> {
    width.checked_mul(height)?.checked_mul(CHANNELS)
}
