//! Dither pass configuration.

use crate::mode::DitherMode;

/// Options for a single dither pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DitherOptions {
    /// Diffusion kernel or threshold pattern to use.
    pub mode: DitherMode,

    /// Clamp diffused samples back into `[0, 255]` after each error spread.
    /// Off by default: accumulated values are allowed to drift.
    pub clamp_accumulated: bool,
}

impl DitherOptions {
    /// Create options with the default mode and no clamping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the dither mode.
    pub fn with_mode(mut self, mode: DitherMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builder: set the clamping toggle.
    pub fn with_clamp_accumulated(mut self, val: bool) -> Self {
        self.clamp_accumulated = val;
        self
    }
}
