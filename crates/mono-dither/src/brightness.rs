//! Perceived-brightness conversion and the grayscale working buffer.
//!
//! Brightness uses the Rec. 601 luma weights followed by a gamma curve:
//! `((0.299·R + 0.587·G + 0.114·B) / 255)^gamma × 255`.
//! Gamma above 1 darkens the result, gamma below 1 brightens it.

use image::RgbImage;
use tracing::debug;

use crate::{DitherError, Result};

/// Default gamma applied when none is configured.
pub const DEFAULT_GAMMA: f64 = 0.75;

/// A validated gamma factor (finite and greater than 0).
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Gamma(f64);

impl Gamma {
    /// Validate a gamma factor.
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(DitherError::InvalidGamma(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Gamma {
    fn default() -> Self {
        Self(DEFAULT_GAMMA)
    }
}

impl TryFrom<f64> for Gamma {
    type Error = DitherError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

/// Gamma-corrected perceived brightness of an RGB sample, in `[0, 255]`.
pub fn perceived_brightness(rgb: [u8; 3], gamma: Gamma) -> f64 {
    let [r, g, b] = rgb;
    let linear = f64::from(r) * 0.299 + f64::from(g) * 0.587 + f64::from(b) * 0.114;
    (linear / 255.0).powf(gamma.value()) * 255.0
}

/// Brightness truncated to an 8-bit level, as stored in a [`GrayscaleBuffer`].
pub fn brightness_level(rgb: [u8; 3], gamma: Gamma) -> u8 {
    perceived_brightness(rgb, gamma) as u8
}

/// Row-major grid of brightness values consumed by the dither pass.
///
/// Values start in `[0, 255]` but are not re-clamped after error diffusion,
/// so they may drift outside that range during a pass.
#[derive(Debug, Clone, PartialEq)]
pub struct GrayscaleBuffer {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl GrayscaleBuffer {
    /// Wrap existing samples. `data.len()` must equal `width * height`.
    pub fn from_vec(width: usize, height: usize, data: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 || width.checked_mul(height) != Some(data.len()) {
            return Err(DitherError::InvalidDimensions {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A buffer where every sample has the same value.
    pub fn uniform(width: usize, height: usize, value: f32) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .ok_or(DitherError::InvalidDimensions { width, height, len: 0 })?;
        Self::from_vec(width, height, vec![value; len])
    }

    /// Convert an RGB image using the given gamma.
    pub fn from_rgb_image(img: &RgbImage, gamma: Gamma) -> Result<Self> {
        let (width, height) = img.dimensions();
        debug!(width, height, gamma = gamma.value(), "Converting image to grayscale");

        let data = img
            .pixels()
            .map(|px| f32::from(brightness_level(px.0, gamma)))
            .collect();
        Self::from_vec(width as usize, height as usize, data)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        self.data[y * self.width + x] = value;
    }

    /// Add `delta` to the sample at `(x, y)`.
    pub fn add(&mut self, x: usize, y: usize, delta: f32) {
        self.data[y * self.width + x] += delta;
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}
