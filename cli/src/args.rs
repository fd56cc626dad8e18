//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Print an image on an ESC/POS thermal printer.
#[derive(Debug, Parser)]
#[command(name = "hotpixels", version, about)]
pub struct Args {
    /// Image file to print.
    pub image: Option<PathBuf>,

    /// Printer name, as listed by `lpstat -p`.
    pub printer: Option<String>,

    /// Dither mode, as a 1-based index or a name.
    pub dither_mode: Option<String>,

    /// Gamma correction factor (> 0). Lower values make the image brighter.
    pub gamma: Option<String>,

    /// Printable width in dots.
    #[arg(long)]
    pub width: Option<u32>,

    /// Write the printer job to a file instead of printing it.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Line feeds sent after the image.
    #[arg(long)]
    pub feed_lines: Option<usize>,

    /// Clamp diffused error back into 0..255 after every step.
    #[arg(long)]
    pub strict_clamp: bool,

    /// Print the installed printer list as JSON and exit.
    #[arg(long)]
    pub json: bool,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}
