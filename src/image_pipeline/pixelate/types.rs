//! Pixelation configuration types

use crate::image_pipeline::common::error::{PixelateError, Result};

/// Side length of a block when none is given.
pub const DEFAULT_BLOCK_WIDTH: usize = 30;

/// Configuration for PPM pixelation
#[derive(Debug, Clone)]
pub struct PixelateConfig {
    /// Side length in pixels of each averaged block
    pub block_width: usize,
    /// Whether to validate image dimensions before pixelating
    pub validate_dimensions: bool,
    /// Largest width or height accepted from an input file
    pub max_dimension: Option<usize>,
}

impl Default for PixelateConfig {
    fn default() -> Self {
        Self {
            block_width: DEFAULT_BLOCK_WIDTH,
            validate_dimensions: true,
            max_dimension: Some(50000),
        }
    }
}

impl PixelateConfig {
    pub fn builder() -> PixelateConfigBuilder {
        PixelateConfigBuilder::default()
    }

    /// The size limit readers should enforce, if dimension validation is on.
    pub fn dimension_limit(&self) -> Option<usize> {
        if self.validate_dimensions {
            self.max_dimension
        } else {
            None
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.block_width == 0 {
            return Err(PixelateError::InvalidParameter(
                "block width must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for PixelateConfig
#[derive(Default)]
pub struct PixelateConfigBuilder {
    block_width: Option<usize>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
}

impl PixelateConfigBuilder {
    pub fn block_width(mut self, block_width: usize) -> Self {
        self.block_width = Some(block_width);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> PixelateConfig {
        let default = PixelateConfig::default();
        PixelateConfig {
            block_width: self.block_width.unwrap_or(default.block_width),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
