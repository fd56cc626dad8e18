//! `GS v 0` raster frame encoding.
//!
//! Frame layout:
//!
//! ```text
//! 1B 40            ESC @      printer reset
//! 1D 76 30 00      GS v 0 m   raster image, m = 0 (normal density)
//! xL xH            width in bytes, little endian
//! yL yH            height in dots, little endian
//! ...              payload, row-major, width-in-bytes per row
//! ```

use tracing::debug;

use crate::{EscPosError, Result};

/// ESC @ (initialize printer).
const ESC_INIT: [u8; 2] = [0x1b, 0x40];

/// GS v 0 (print raster bit image).
const GS_RASTER: [u8; 3] = [0x1d, 0x76, 0x30];

/// Raster mode byte: normal width and height.
const MODE_NORMAL: u8 = 0x00;

/// Total header length in bytes.
pub const HEADER_LEN: usize = 10;

/// Line feeds sent after an image by default.
pub const DEFAULT_FEED_LINES: usize = 4;

/// Raster dimensions as carried in the frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterHeader {
    pub width_bytes: u16,
    pub height_dots: u16,
}

impl RasterHeader {
    /// Validate dimensions against the 16-bit header fields.
    pub fn new(width_bytes: usize, height_dots: usize) -> Result<Self> {
        let invalid = || EscPosError::InvalidDimensions {
            width_bytes,
            height_dots,
        };
        if width_bytes == 0 || height_dots == 0 {
            return Err(invalid());
        }
        Ok(Self {
            width_bytes: u16::try_from(width_bytes).map_err(|_| invalid())?,
            height_dots: u16::try_from(height_dots).map_err(|_| invalid())?,
        })
    }

    /// Payload size this header announces.
    pub fn payload_len(&self) -> usize {
        usize::from(self.width_bytes) * usize::from(self.height_dots)
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let [xl, xh] = self.width_bytes.to_le_bytes();
        let [yl, yh] = self.height_dots.to_le_bytes();
        [
            ESC_INIT[0],
            ESC_INIT[1],
            GS_RASTER[0],
            GS_RASTER[1],
            GS_RASTER[2],
            MODE_NORMAL,
            xl,
            xh,
            yl,
            yh,
        ]
    }

    /// Read the header at the start of a frame.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let Some(head) = bytes.get(..HEADER_LEN) else {
            return Err(EscPosError::MalformedHeader(format!(
                "need {HEADER_LEN} bytes, got {}",
                bytes.len()
            )));
        };
        if head[..2] != ESC_INIT || head[2..5] != GS_RASTER {
            return Err(EscPosError::MalformedHeader(format!(
                "unexpected command bytes {:02x?}",
                &head[..5]
            )));
        }
        if head[5] != MODE_NORMAL {
            return Err(EscPosError::MalformedHeader(format!(
                "unsupported raster mode {:#04x}",
                head[5]
            )));
        }
        Ok(Self {
            width_bytes: u16::from_le_bytes([head[6], head[7]]),
            height_dots: u16::from_le_bytes([head[8], head[9]]),
        })
    }
}

/// A complete raster frame: header followed by the packed payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterFrame {
    header: RasterHeader,
    bytes: Vec<u8>,
}

impl RasterFrame {
    /// Build a frame for a payload of `width_bytes * height_dots` bytes.
    pub fn encode(width_bytes: usize, height_dots: usize, payload: &[u8]) -> Result<Self> {
        let header = RasterHeader::new(width_bytes, height_dots)?;
        let expected = header.payload_len();
        if payload.len() != expected {
            return Err(EscPosError::PayloadLengthMismatch {
                expected,
                actual: payload.len(),
            });
        }

        let mut bytes = Vec::with_capacity(HEADER_LEN + payload.len());
        bytes.extend_from_slice(&header.to_bytes());
        bytes.extend_from_slice(payload);

        debug!(width_bytes, height_dots, len = bytes.len(), "Encoded raster frame");
        Ok(Self { header, bytes })
    }

    pub fn header(&self) -> RasterHeader {
        self.header
    }

    pub fn payload(&self) -> &[u8] {
        &self.bytes[HEADER_LEN..]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// `count` line feeds, used to advance the paper after an image.
pub fn feed_lines(count: usize) -> Vec<u8> {
    vec![b'\n'; count]
}
