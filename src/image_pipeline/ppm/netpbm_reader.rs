//! PPM image reader implementation using the `image` crate's PNM codec.
//!
//! Supports the binary (`P6`) and ASCII (`P3`) pixmap variants with a max
//! color value of at most 255. The header is decoded first so that oversized
//! images are rejected before any pixel buffer is allocated.

use image::ImageDecoder;
use image::codecs::pnm::{PnmDecoder, PnmSubtype, SampleEncoding};
use tracing::debug;
use crate::image_pipeline::common::error::{PixelateError, Result};
use crate::image_pipeline::ppm::reader::RasterReader;
use crate::image_pipeline::ppm::types::{buffer_len, FormatTag, Raster};

/// Full-scale sample value of an 8-bit channel.
const U8_SAMPLE_MAX: u32 = u8::MAX as u32;

/// PPM reader that uses the `image` crate for decoding.
#[derive(Debug, Clone, Default)]
pub struct NetpbmReader {
    max_dimension: Option<usize>,
}

impl NetpbmReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects images wider or taller than `max` before any pixel buffer is allocated.
    pub fn with_max_dimension(max: Option<usize>) -> Self {
        Self { max_dimension: max }
    }

    fn check_dimensions(&self, width: usize, height: usize) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(PixelateError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.max_dimension {
            if width > max || height > max {
                debug!("Image dimensions {}x{} exceed maximum {}", width, height, max);
                return Err(PixelateError::InvalidDimensions(width, height));
            }
        }

        buffer_len(width, height).ok_or(PixelateError::InvalidDimensions(width, height))
    }
}

impl RasterReader for NetpbmReader {
    /// Decodes a PPM file held in memory.
    ///
    /// # Errors
    ///
    /// * `MalformedHeader` - the codec could not parse the header, the file
    ///   is not a P3/P6 pixmap, or the max color value is above 255
    /// * `InvalidDimensions` - zero or oversized width/height
    /// * `MalformedData` - the codec failed on the pixel data
    fn read_raster(&self, data: &[u8]) -> Result<Raster> {
        debug!("Decoding PPM image, {} bytes", data.len());

        let (_, header) = PnmDecoder::new(data)
            .map_err(|e| PixelateError::MalformedHeader(e.to_string()))?
            .into_inner();

        let format = match header.subtype() {
            PnmSubtype::Pixmap(SampleEncoding::Binary) => FormatTag::Binary,
            PnmSubtype::Pixmap(SampleEncoding::Ascii) => FormatTag::Ascii,
            _ => {
                return Err(PixelateError::MalformedHeader(
                    "unsupported format, expected a P3 or P6 pixmap".to_string(),
                ));
            }
        };

        let max_color_value = match u8::try_from(header.maximal_sample()) {
            Ok(value) if value > 0 => value,
            _ => {
                return Err(PixelateError::MalformedHeader(format!(
                    "unsupported max color value {}, expected 1..=255",
                    header.maximal_sample()
                )));
            }
        };

        let width = header.width() as usize;
        let height = header.height() as usize;
        let expected = self.check_dimensions(width, height)?;

        debug!(
            "PPM header: {} {}x{} max={}",
            format.magic(),
            width,
            height,
            max_color_value
        );

        let decoder = PnmDecoder::new(data)
            .map_err(|e| PixelateError::MalformedHeader(e.to_string()))?;
        if decoder.total_bytes() != expected as u64 {
            return Err(PixelateError::MalformedHeader(format!(
                "decoder reports {} bytes for a {}x{} RGB image",
                decoder.total_bytes(),
                width,
                height
            )));
        }

        let mut pixels = vec![0u8; expected];
        decoder
            .read_image(&mut pixels)
            .map_err(|e| PixelateError::MalformedData(e.to_string()))?;

        // The codec stretches samples to 0..=255, map them back to 0..=max.
        if max_color_value != u8::MAX {
            let max = u32::from(max_color_value);
            for sample in pixels.iter_mut() {
                *sample = ((u32::from(*sample) * max + U8_SAMPLE_MAX / 2) / U8_SAMPLE_MAX) as u8;
            }
        }

        Raster::new(width, height, max_color_value, format, pixels)
    }

    fn set_max_dimension(&mut self, max: Option<usize>) {
        self.max_dimension = max;
    }
}
