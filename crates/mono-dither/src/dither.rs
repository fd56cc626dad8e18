//! The dither pass: grayscale buffer in, packed 1-bit raster out.
//!
//! Pixels are visited strictly row by row, left to right. Diffusion kernels
//! write into pixels that have not been visited yet, so the scan order is part
//! of the result and the pass cannot be split across threads.

use tracing::debug;

use crate::QUANTIZE_LEVEL;
use crate::brightness::GrayscaleBuffer;
use crate::mode::Strategy;
use crate::options::DitherOptions;

/// A 1-bit raster, one bit per dot, most significant bit first.
///
/// A set bit means the dot is printed (dark). Each row occupies
/// `width_bytes()` bytes; trailing bits of a partial last byte are 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedRaster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PackedRaster {
    fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width.div_ceil(8) * height],
        }
    }

    fn set_dark(&mut self, x: usize, y: usize) {
        let idx = y * self.width_bytes() + x / 8;
        self.data[idx] |= 0x80 >> (x % 8);
    }

    /// Width in dots.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in dots (rows).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes per row, `ceil(width / 8)`.
    pub fn width_bytes(&self) -> usize {
        self.width.div_ceil(8)
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.data[y * self.width_bytes() + x / 8] & (0x80 >> (x % 8)) != 0
    }

    pub fn row(&self, y: usize) -> &[u8] {
        let wb = self.width_bytes();
        &self.data[y * wb..(y + 1) * wb]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

/// Dither `buffer` in place and pack the result.
///
/// For diffusion modes each pixel is quantized at 128 and the error is spread
/// to its neighbours through the mode's kernel. For ordered modes each pixel
/// is compared with the tiled threshold matrix and the buffer is left as is.
pub fn dither(buffer: &mut GrayscaleBuffer, options: &DitherOptions) -> PackedRaster {
    let (width, height) = (buffer.width(), buffer.height());
    let strategy = options.mode.strategy();
    debug!(
        width,
        height,
        mode = %options.mode,
        clamp = options.clamp_accumulated,
        "Dithering grayscale buffer"
    );

    let mut raster = PackedRaster::blank(width, height);
    for y in 0..height {
        for x in 0..width {
            let value = buffer.get(x, y);
            let dark = match strategy {
                Strategy::Diffusion(kernel) => {
                    let quantized = if value < QUANTIZE_LEVEL { 0.0 } else { 255.0 };
                    let error = value - quantized;
                    kernel.diffuse(buffer, x, y, error, options.clamp_accumulated);
                    quantized == 0.0
                }
                Strategy::Ordered(matrix) => value < matrix.threshold(x, y),
            };
            if dark {
                raster.set_dark(x, y);
            }
        }
    }

    debug!(bytes = raster.data.len(), "Dithering complete");
    raster
}
