use tracing::{info, instrument, warn};
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::image_pipeline::{
    common::error::{PixelateError, Result},
    pixelate::{pixelate, PixelateConfig},
    ppm::{NetpbmReader, NetpbmWriter, Raster, RasterReader, RasterWriter},
    timing::{PipelineTimings, Timer},
};

pub struct PixelatePipeline<R: RasterReader, W: RasterWriter> {
    reader: R,
    writer: W,
    config: PixelateConfig,
}

impl PixelatePipeline<NetpbmReader, NetpbmWriter> {
    pub fn new(config: PixelateConfig) -> Result<Self> {
        Self::with_custom(NetpbmReader::new(), NetpbmWriter, config)
    }
}

impl<R: RasterReader, W: RasterWriter> PixelatePipeline<R, W> {
    pub fn with_custom(mut reader: R, writer: W, config: PixelateConfig) -> Result<Self> {
        config.validate()?;
        reader.set_max_dimension(config.dimension_limit());
        Ok(Self {
            reader,
            writer,
            config,
        })
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(PixelateError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!(
                    "Image dimensions {}x{} exceed maximum {}",
                    width, height, max
                );
                return Err(PixelateError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    fn run_steps(
        &self,
        input_data: &[u8],
        output: &mut dyn Write,
        timings: &mut PipelineTimings,
    ) -> Result<Raster> {
        let timer = Timer::start("decode_ppm");
        let raster = {
            let _span = tracing::info_span!("decode_ppm").entered();
            self.reader.read_raster(input_data)?
        };
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let timer = Timer::start("validate_dimensions");
        {
            let _span = tracing::info_span!("validate_dimensions",
                width = raster.width,
                height = raster.height
            ).entered();
            self.validate_dimensions(raster.width, raster.height)?;
        }
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let timer = Timer::start("pixelate");
        let pixelated = pixelate(&raster, self.config.block_width)?;
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let timer = Timer::start("encode_ppm");
        {
            let _span = tracing::info_span!("encode_ppm").entered();
            self.writer.write_raster(&pixelated, output)?;
        }
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        info!(
            width = pixelated.width,
            height = pixelated.height,
            "Pixelation complete in {:.3}ms",
            timings.total_duration().as_secs_f64() * 1000.0
        );
        Ok(pixelated)
    }

    /// Decodes `input_data`, pixelates it and encodes the result into `output`.
    ///
    /// Returns the pixelated raster that was written.
    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<Raster> {
        info!("Starting PPM pixelation");
        self.run_steps(input_data, output, &mut PipelineTimings::new())
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert_with_timings(
        &self,
        input_data: &[u8],
        output: &mut dyn Write,
    ) -> Result<PipelineTimings> {
        info!("Starting PPM pixelation");
        let mut timings = PipelineTimings::new();
        self.run_steps(input_data, output, &mut timings)?;
        Ok(timings)
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        self.convert_file_with_timings(input_path, output_path)?;
        Ok(())
    }

    /// Pixelates `input_path` into `output_path`.
    ///
    /// The output file is only created once the whole image has been
    /// encoded, so a failed run leaves nothing behind.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file_with_timings<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Pixelating file"
        );

        let timer = Timer::start("read_input_file");
        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| match e.kind() {
                ErrorKind::NotFound => {
                    PixelateError::FileNotFound(input_path.display().to_string())
                }
                _ => PixelateError::ReadError(format!("{}: {}", input_path.display(), e)),
            })?
        };
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let mut encoded = Vec::new();
        let conversion_timings = self.convert_with_timings(&input_data, &mut encoded)?;
        for step in conversion_timings.steps() {
            timings.add_step(step.name.clone(), step.duration);
        }

        let timer = Timer::start("write_output_file");
        {
            let _span = tracing::info_span!("write_output_file", bytes = encoded.len()).entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                PixelateError::WriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        Ok(timings)
    }

    pub fn config(&self) -> &PixelateConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PixelateConfig) -> Result<()> {
        config.validate()?;
        self.reader.set_max_dimension(config.dimension_limit());
        self.config = config;
        Ok(())
    }
}
