//! Dither mode selection.
//!
//! Modes fall into two families: error diffusion, which carries quantization
//! error forward through the scan, and ordered dithering, which compares each
//! pixel against a tiled threshold matrix.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::kernel::{self, Kernel};
use crate::threshold::{self, ThresholdMatrix};
use crate::{DitherError, Result};

/// All supported dither modes, numbered from 1 in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DitherMode {
    FloydSteinberg,
    #[default]
    Jarvis,
    Stucki,
    Burkes,
    SierraLite,
    Atkinson,
    Bayer2x2,
    Bayer4x4,
    Bayer8x8,
    Halftone4x4,
}

/// How the dither pass handles a pixel for a given mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Diffusion(&'static Kernel),
    Ordered(&'static ThresholdMatrix),
}

impl DitherMode {
    pub const ALL: [DitherMode; 10] = [
        DitherMode::FloydSteinberg,
        DitherMode::Jarvis,
        DitherMode::Stucki,
        DitherMode::Burkes,
        DitherMode::SierraLite,
        DitherMode::Atkinson,
        DitherMode::Bayer2x2,
        DitherMode::Bayer4x4,
        DitherMode::Bayer8x8,
        DitherMode::Halftone4x4,
    ];

    /// Stable kebab-case name, accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            DitherMode::FloydSteinberg => "floyd-steinberg",
            DitherMode::Jarvis => "jarvis",
            DitherMode::Stucki => "stucki",
            DitherMode::Burkes => "burkes",
            DitherMode::SierraLite => "sierra-lite",
            DitherMode::Atkinson => "atkinson",
            DitherMode::Bayer2x2 => "bayer2x2",
            DitherMode::Bayer4x4 => "bayer4x4",
            DitherMode::Bayer8x8 => "bayer8x8",
            DitherMode::Halftone4x4 => "halftone4x4",
        }
    }

    /// 1-based position of this mode in [`DitherMode::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&m| m == self).map_or(0, |i| i + 1)
    }

    /// Look up a mode by its 1-based index.
    pub fn from_index(index: usize) -> Result<Self> {
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| DitherError::UnknownDitherMode(index.to_string()))
    }

    pub fn is_ordered(self) -> bool {
        matches!(self.strategy(), Strategy::Ordered(_))
    }

    /// Resolve the kernel or threshold matrix backing this mode.
    pub fn strategy(self) -> Strategy {
        match self {
            DitherMode::FloydSteinberg => Strategy::Diffusion(&kernel::FLOYD_STEINBERG),
            DitherMode::Jarvis => Strategy::Diffusion(&kernel::JARVIS),
            DitherMode::Stucki => Strategy::Diffusion(&kernel::STUCKI),
            DitherMode::Burkes => Strategy::Diffusion(&kernel::BURKES),
            DitherMode::SierraLite => Strategy::Diffusion(&kernel::SIERRA_LITE),
            DitherMode::Atkinson => Strategy::Diffusion(&kernel::ATKINSON),
            DitherMode::Bayer2x2 => Strategy::Ordered(&threshold::BAYER_2X2),
            DitherMode::Bayer4x4 => Strategy::Ordered(&threshold::BAYER_4X4),
            DitherMode::Bayer8x8 => Strategy::Ordered(&threshold::BAYER_8X8),
            DitherMode::Halftone4x4 => Strategy::Ordered(&threshold::HALFTONE_4X4),
        }
    }
}

impl fmt::Display for DitherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a mode name (case-insensitive, `-`/`_` ignored) or a 1-based index.
impl FromStr for DitherMode {
    type Err = DitherError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<usize>() {
            return Self::from_index(index);
        }

        let wanted = normalize_name(trimmed);
        Self::ALL
            .into_iter()
            .find(|m| normalize_name(m.name()) == wanted)
            .ok_or_else(|| DitherError::UnknownDitherMode(trimmed.to_string()))
    }
}

fn normalize_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
