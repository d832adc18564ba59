//! PPM codec module
//!
//! This module provides reading and writing of PPM rasters in both the
//! binary (`P6`) and ASCII (`P3`) variants.

mod reader;
mod writer;
mod netpbm_reader;
mod netpbm_writer;
pub mod types;

pub use reader::RasterReader;
pub use writer::RasterWriter;
pub use netpbm_reader::NetpbmReader;
pub use netpbm_writer::NetpbmWriter;
pub use types::{FormatTag, Raster};
