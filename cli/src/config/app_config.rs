//! Runtime configuration: defaults, then environment, then command-line arguments.

use std::path::PathBuf;

use mono_dither::{DitherMode, DitherOptions, Gamma};
use serde::Serialize;

use super::defaults::{
    KEY_DITHER_MODE, KEY_FEED_LINES, KEY_GAMMA, KEY_PRINTER, KEY_STRICT_CLAMP, KEY_WIDTH,
};
use super::validation::validate_setting;
use crate::args::Args;

/// Runtime configuration for one print job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppConfig {
    pub dither_mode: DitherMode,
    pub gamma: Gamma,
    pub width_dots: u32,
    pub printer: String,
    pub feed_lines: usize,
    pub strict_clamp: bool,
    /// Write the job to this file instead of sending it to a printer.
    pub output: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dither_mode: DitherMode::default(),
            gamma: Gamma::default(),
            width_dots: u32::from(escpos_raster::PRINT_WIDTH_DOTS),
            printer: String::new(),
            feed_lines: escpos_raster::frame::DEFAULT_FEED_LINES,
            strict_clamp: false,
            output: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, keeping defaults for unset or
    /// invalid values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let g = |key: &str| -> Option<String> {
            let value = lookup(key)?;
            match validate_setting(key, &value) {
                Ok(()) => Some(value),
                Err(e) => {
                    tracing::warn!("Ignoring {key}={value:?}: {e}");
                    None
                }
            }
        };

        let mut config = Self::default();
        if let Some(mode) = g(KEY_DITHER_MODE).and_then(|v| v.parse::<DitherMode>().ok()) {
            config.dither_mode = mode;
        }
        if let Some(gamma) = g(KEY_GAMMA).and_then(|v| parse_gamma(&v)) {
            config.gamma = gamma;
        }
        if let Some(width) = g(KEY_WIDTH).and_then(|v| v.trim().parse::<u32>().ok()) {
            config.width_dots = width;
        }
        if let Some(printer) = g(KEY_PRINTER) {
            config.printer = printer;
        }
        if let Some(lines) = g(KEY_FEED_LINES).and_then(|v| v.trim().parse::<usize>().ok()) {
            config.feed_lines = lines;
        }
        if let Some(clamp) = g(KEY_STRICT_CLAMP) {
            config.strict_clamp = clamp == "true";
        }
        config
    }

    /// Apply command-line arguments on top of the loaded configuration.
    ///
    /// An invalid dither mode or gamma is reported and the current value kept.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(printer) = &args.printer {
            self.printer = printer.clone();
        }
        if let Some(raw) = &args.dither_mode {
            match raw.parse::<DitherMode>() {
                Ok(mode) => {
                    tracing::info!("Dither mode set to {mode}");
                    self.dither_mode = mode;
                }
                Err(e) => tracing::warn!("{e}. Default value {} will be used", self.dither_mode),
            }
        }
        if let Some(raw) = &args.gamma {
            match parse_gamma(raw) {
                Some(gamma) => self.gamma = gamma,
                None => tracing::warn!(
                    "Gamma value must be a number greater than 0, got {raw:?}. Default value {} will be used",
                    self.gamma.value()
                ),
            }
        }
        if let Some(width) = args.width {
            match validate_setting(KEY_WIDTH, &width.to_string()) {
                Ok(()) => self.width_dots = width,
                Err(e) => tracing::warn!("Ignoring --width {width}: {e}"),
            }
        }
        if let Some(lines) = args.feed_lines {
            match validate_setting(KEY_FEED_LINES, &lines.to_string()) {
                Ok(()) => self.feed_lines = lines,
                Err(e) => tracing::warn!("Ignoring --feed-lines {lines}: {e}"),
            }
        }
        if args.strict_clamp {
            self.strict_clamp = true;
        }
        if let Some(output) = &args.output {
            self.output = Some(output.clone());
        }
    }

    /// Options for the dither pass.
    pub fn dither_options(&self) -> DitherOptions {
        DitherOptions::new()
            .with_mode(self.dither_mode)
            .with_clamp_accumulated(self.strict_clamp)
    }
}

fn parse_gamma(raw: &str) -> Option<Gamma> {
    raw.trim().parse::<f64>().ok().and_then(|v| Gamma::new(v).ok())
}
