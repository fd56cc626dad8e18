//! Grayscale conversion and 1-bit dithering for thermal printer output.
//!
//! Converts RGB pixels into a gamma-corrected grayscale buffer and packs it
//! into a monochrome raster (1 bit per dot, MSB first) using either an
//! error-diffusion kernel or an ordered threshold pattern.

pub mod brightness;
pub mod dither;
pub mod kernel;
pub mod mode;
pub mod options;
pub mod threshold;

// Re-exports for convenience
pub use brightness::{Gamma, GrayscaleBuffer, perceived_brightness};
pub use dither::{PackedRaster, dither};
pub use kernel::Kernel;
pub use mode::{DitherMode, Strategy};
pub use options::DitherOptions;
pub use threshold::ThresholdMatrix;

/// Brightness level at which diffusion modes switch from black to white.
pub const QUANTIZE_LEVEL: f32 = 128.0;

/// Errors raised while validating dither input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DitherError {
    #[error("Invalid gamma {0}: must be a finite value greater than 0")]
    InvalidGamma(f64),

    #[error("Unknown dither mode: {0}")]
    UnknownDitherMode(String),

    #[error("Invalid dimensions: {width}x{height} with {len} samples")]
    InvalidDimensions { width: usize, height: usize, len: usize },
}

/// Result type alias for dither operations.
pub type Result<T> = std::result::Result<T, DitherError>;
