//! All setting definitions with their default values.

use std::collections::HashMap;
use std::sync::LazyLock;

pub const KEY_DITHER_MODE: &str = "HOTPIXELS_DITHER_MODE";
pub const KEY_GAMMA: &str = "HOTPIXELS_GAMMA";
pub const KEY_WIDTH: &str = "HOTPIXELS_WIDTH";
pub const KEY_PRINTER: &str = "HOTPIXELS_PRINTER";
pub const KEY_FEED_LINES: &str = "HOTPIXELS_FEED_LINES";
pub const KEY_STRICT_CLAMP: &str = "HOTPIXELS_STRICT_CLAMP";

type DefTuple = (&'static str, &'static str, &'static str);

const DEFS: &[DefTuple] = &[
    (KEY_DITHER_MODE, "jarvis", "Dither mode, by name or 1-based index"),
    (KEY_GAMMA, "0.75", "Gamma correction factor (> 0, lower is brighter)"),
    (KEY_WIDTH, "384", "Printable width in dots"),
    (KEY_PRINTER, "", "Default printer name"),
    (KEY_FEED_LINES, "4", "Line feeds sent after each image"),
    (KEY_STRICT_CLAMP, "false", "Clamp diffused error into 0..255"),
];

/// A single setting definition.
#[derive(Debug, Clone)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

/// Global setting definitions indexed by key.
pub static DEFAULT_SETTINGS: LazyLock<HashMap<&'static str, SettingDef>> = LazyLock::new(|| {
    DEFS.iter()
        .map(|&(key, default, description)| {
            (
                key,
                SettingDef {
                    key,
                    default,
                    description,
                },
            )
        })
        .collect()
});

/// Setting definitions in declaration order.
pub fn all_settings() -> impl Iterator<Item = &'static SettingDef> {
    DEFS.iter().filter_map(|(key, _, _)| DEFAULT_SETTINGS.get(key))
}

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS.get(key).map(|d| d.default)
}
