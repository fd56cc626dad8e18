pub mod args;
pub mod config;
pub mod services;

use mono_dither::DitherMode;

use services::printer::SystemPrinter;

/// Load .env from multiple candidate paths.
pub fn load_dotenv() {
    let candidates = [".env", "../.env", "../../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::debug!("No .env file found, using system environment variables");
}

/// Usage text with the installed printers and the available dither modes.
pub fn usage(printers: &[SystemPrinter], default_mode: DitherMode) -> String {
    let mut out = String::from("Usage: hotpixels <IMAGE> <PRINTER> [DITHER_MODE] [GAMMA]\n\n");

    out.push_str("Installed printers:\n");
    if printers.is_empty() {
        out.push_str("  (none)\n");
    }
    for printer in printers {
        out.push_str(&format!("  {} ({})\n", printer.name, printer.status));
    }

    out.push_str("\nDither modes:\n");
    for mode in DitherMode::ALL {
        let marker = if mode == default_mode { " (default)" } else { "" };
        out.push_str(&format!("  {:>2}: {mode}{marker}\n", mode.index()));
    }

    out.push_str(
        "\nGamma: a number greater than 0 (default 0.75). Lower values make the image brighter.\n",
    );

    out.push_str("\nEnvironment:\n");
    for def in config::defaults::all_settings() {
        let default = if def.default.is_empty() { "unset" } else { def.default };
        out.push_str(&format!("  {:<24} {} [{default}]\n", def.key, def.description));
    }
    out
}
