use std::io::Write;
use image::{ExtendedColorType, ImageEncoder};
use image::codecs::pnm::{PixmapHeader, PnmEncoder, PnmHeader, SampleEncoding};
use tracing::debug;
use crate::image_pipeline::common::error::{PixelateError, Result};
use crate::image_pipeline::ppm::types::{FormatTag, Raster};
use crate::image_pipeline::ppm::writer::RasterWriter;

pub struct NetpbmWriter;

impl RasterWriter for NetpbmWriter {
    fn write_raster(&self, raster: &Raster, output: &mut dyn Write) -> Result<()> {
        debug!(
            "Encoding PPM image: {} {}x{}",
            raster.format.magic(),
            raster.width,
            raster.height
        );

        raster.validate()?;

        let width = u32::try_from(raster.width)
            .map_err(|_| PixelateError::InvalidDimensions(raster.width, raster.height))?;
        let height = u32::try_from(raster.height)
            .map_err(|_| PixelateError::InvalidDimensions(raster.width, raster.height))?;

        let encoding = match raster.format {
            FormatTag::Binary => SampleEncoding::Binary,
            FormatTag::Ascii => SampleEncoding::Ascii,
        };

        // A chosen header keeps the raster's own max color value.
        let header = PnmHeader::from(PixmapHeader {
            encoding,
            height,
            width,
            maxval: u32::from(raster.max_color_value),
        });

        let mut buffer = Vec::with_capacity(raster.pixels.len() + 32);

        PnmEncoder::new(&mut buffer)
            .with_header(header)
            .write_image(&raster.pixels, width, height, ExtendedColorType::Rgb8)
            .map_err(|e| PixelateError::WriteError(e.to_string()))?;

        output
            .write_all(&buffer)
            .and_then(|_| output.flush())
            .map_err(|e| PixelateError::WriteError(e.to_string()))?;

        debug!("PPM encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
