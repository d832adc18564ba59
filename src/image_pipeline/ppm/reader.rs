use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::ppm::types::Raster;

pub trait RasterReader {
    fn read_raster(&self, data: &[u8]) -> Result<Raster>;

    /// Largest width or height the reader should accept, `None` for no limit.
    fn set_max_dimension(&mut self, _max: Option<usize>) {}
}
