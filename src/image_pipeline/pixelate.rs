//! Pixelation module
//!
//! This module provides the block-averaging transform and its configuration.

mod block_average;
pub mod types;

pub use block_average::pixelate;
pub use types::{PixelateConfig, PixelateConfigBuilder, DEFAULT_BLOCK_WIDTH};
