//! ESC/POS raster framing for thermal receipt printers.
//!
//! Wraps a packed 1-bit raster in the `GS v 0` raster-image command, preceded
//! by a printer reset, and provides the trailing paper feed sent after an
//! image so the print clears the tear bar.

pub mod frame;

// Re-exports for convenience
pub use frame::{RasterFrame, RasterHeader, feed_lines};

/// Print width in dots of common 58 mm ESC/POS printers.
pub const PRINT_WIDTH_DOTS: u16 = 384;

/// Errors that can occur while building printer frames.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EscPosError {
    #[error("Payload length mismatch: expected {expected} bytes, got {actual}")]
    PayloadLengthMismatch { expected: usize, actual: usize },

    #[error("Invalid raster dimensions: {width_bytes} bytes x {height_dots} dots")]
    InvalidDimensions {
        width_bytes: usize,
        height_dots: usize,
    },

    #[error("Malformed raster header: {0}")]
    MalformedHeader(String),
}

/// Result type alias for escpos-raster operations.
pub type Result<T> = std::result::Result<T, EscPosError>;
