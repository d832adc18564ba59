//! Block-averaging pixelation.
//!
//! The raster is tiled with `block_width × block_width` squares starting at
//! the top-left corner. Each complete square is flattened to its average
//! color. Rows and columns past the last complete square are left as they
//! were, so an image whose sides are not multiples of the block width keeps
//! an unpixelated strip along its bottom and right edges.

use tracing::{debug, instrument};
use crate::image_pipeline::common::error::{PixelateError, Result};
use crate::image_pipeline::ppm::types::{Raster, CHANNELS};

/// Returns a pixelated copy of `input`. The input raster is left untouched.
///
/// # Errors
///
/// * `InvalidParameter` - `block_width` is zero
/// * `InvalidDimensions` - the raster has a zero side
/// * `BufferSizeMismatch` - the pixel buffer does not match the dimensions
#[instrument(skip(input), fields(width = input.width, height = input.height))]
pub fn pixelate(input: &Raster, block_width: usize) -> Result<Raster> {
    if block_width == 0 {
        return Err(PixelateError::InvalidParameter(
            "block width must be at least 1".to_string(),
        ));
    }
    input.validate()?;

    let width = input.width;
    let height = input.height;
    let mut pixels = input.pixels.clone();

    // Blocks never overlap, so each one is summed before anything inside it is written.
    let area = (block_width as u64) * (block_width as u64);
    let mut blocks = 0usize;

    let mut i = block_width;
    while i <= height {
        let mut j = block_width;
        while j <= width {
            let rows = i - block_width..i;
            let cols = j - block_width..j;

            let mut sum = [0u64; CHANNELS];
            for y in rows.clone() {
                let row = &pixels[(y * width + cols.start) * CHANNELS..(y * width + cols.end) * CHANNELS];
                for px in row.chunks_exact(CHANNELS) {
                    sum[0] += u64::from(px[0]);
                    sum[1] += u64::from(px[1]);
                    sum[2] += u64::from(px[2]);
                }
            }

            // Each average is at most the largest sample, so it fits in a byte.
            let average = sum.map(|s| (s / area) as u8);

            for y in rows {
                let row = &mut pixels[(y * width + cols.start) * CHANNELS..(y * width + cols.end) * CHANNELS];
                for px in row.chunks_exact_mut(CHANNELS) {
                    px.copy_from_slice(&average);
                }
            }

            blocks += 1;
            j += block_width;
        }
        i += block_width;
    }

    debug!(block_width, blocks, "Pixelation complete");

    Ok(Raster {
        width,
        height,
        max_color_value: input.max_color_value,
        format: input.format,
        pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::ppm::types::FormatTag;

    fn raster_from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> [u8; 3]) -> Raster {
        let mut pixels = Vec::with_capacity(width * height * 3);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&f(x, y));
            }
        }
        Raster::new(width, height, 255, FormatTag::Binary, pixels).unwrap()
    }

    fn noise(width: usize, height: usize) -> Raster {
        raster_from_fn(width, height, |x, y| {
            let v = (x * 31 + y * 17) % 256;
            [v as u8, (v * 7 % 256) as u8, (255 - v) as u8]
        })
    }

    #[test]
    fn test_zero_block_width_is_rejected() {
        let input = noise(4, 4);
        let err = pixelate(&input, 0).unwrap_err();
        assert!(matches!(err, PixelateError::InvalidParameter(_)));
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        let input = Raster {
            width: 0,
            height: 3,
            max_color_value: 255,
            format: FormatTag::Binary,
            pixels: Vec::new(),
        };
        let err = pixelate(&input, 2).unwrap_err();
        assert!(matches!(err, PixelateError::InvalidDimensions(0, 3)));
    }

    #[test]
    fn test_mismatched_buffer_is_rejected() {
        let input = Raster {
            width: 2,
            height: 2,
            max_color_value: 255,
            format: FormatTag::Binary,
            pixels: vec![0; 3],
        };
        let err = pixelate(&input, 1).unwrap_err();
        assert!(matches!(err, PixelateError::BufferSizeMismatch { expected: 12, actual: 3 }));
    }

    #[test]
    fn test_dimensions_and_metadata_are_preserved() {
        for (w, h, bw) in [(65, 65, 30), (1, 1, 30), (31, 7, 3), (100, 40, 1)] {
            let mut input = noise(w, h);
            input.format = FormatTag::Ascii;
            input.max_color_value = 255;

            let output = pixelate(&input, bw).unwrap();
            assert_eq!(output.width, w);
            assert_eq!(output.height, h);
            assert_eq!(output.format, FormatTag::Ascii);
            assert_eq!(output.max_color_value, 255);
            assert_eq!(output.pixels.len(), input.pixels.len());
        }
    }

    #[test]
    fn test_input_is_not_modified() {
        let input = noise(60, 60);
        let snapshot = input.clone();
        let _ = pixelate(&input, 30).unwrap();
        assert_eq!(input, snapshot);
    }

    #[test]
    fn test_half_red_half_black_block_truncates_average() {
        let input = raster_from_fn(30, 30, |_, y| if y < 15 { [255, 0, 0] } else { [0, 0, 0] });
        let output = pixelate(&input, 30).unwrap();

        assert!(output.pixels.chunks_exact(3).all(|px| px == [127, 0, 0]));
    }

    #[test]
    fn test_single_full_block_becomes_its_average() {
        let input = noise(30, 30);

        let mut sum = [0u64; 3];
        for px in input.pixels.chunks_exact(3) {
            for c in 0..3 {
                sum[c] += u64::from(px[c]);
            }
        }
        let expected = sum.map(|s| (s / 900) as u8);

        let output = pixelate(&input, 30).unwrap();
        assert!(output.pixels.chunks_exact(3).all(|px| px == expected));
    }

    #[test]
    fn test_trailing_strip_is_preserved() {
        let input = noise(65, 65);
        let output = pixelate(&input, 30).unwrap();

        for y in 0..65 {
            for x in 0..65 {
                if y >= 60 || x >= 60 {
                    assert_eq!(output.pixel(x, y), input.pixel(x, y), "pixel ({}, {})", x, y);
                }
            }
        }

        // Each of the four complete blocks is flat.
        for (bx, by) in [(0, 0), (30, 0), (0, 30), (30, 30)] {
            let first = output.pixel(bx, by);
            for y in by..by + 30 {
                for x in bx..bx + 30 {
                    assert_eq!(output.pixel(x, y), first);
                }
            }
        }
    }

    #[test]
    fn test_image_smaller_than_block_is_unchanged() {
        let input = noise(20, 29);
        let output = pixelate(&input, 30).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn test_uniform_blocks_are_idempotent() {
        let input = raster_from_fn(90, 60, |x, y| {
            let bx = (x / 30) as u8;
            let by = (y / 30) as u8;
            [bx * 80, by * 120, 40 + bx + by]
        });
        let output = pixelate(&input, 30).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn test_block_width_one_is_identity() {
        let input = noise(13, 11);
        let output = pixelate(&input, 1).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn test_channels_are_averaged_independently() {
        // 2x2 block: R sums to 1+2+3+4, G to 4*255, B to 0+0+0+3.
        let pixels = vec![1, 255, 0, 2, 255, 0, 3, 255, 0, 4, 255, 3];
        let input = Raster::new(2, 2, 255, FormatTag::Binary, pixels).unwrap();
        let output = pixelate(&input, 2).unwrap();
        assert!(output.pixels.chunks_exact(3).all(|px| px == [2, 255, 0]));
    }

    #[test]
    fn test_large_block_does_not_overflow() {
        let input = raster_from_fn(300, 300, |_, _| [255, 255, 255]);
        let output = pixelate(&input, 300).unwrap();
        assert_eq!(output, input);
    }
}
