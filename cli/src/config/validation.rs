//! Setting value validation.

use mono_dither::{DitherMode, Gamma};

use super::defaults::{
    KEY_DITHER_MODE, KEY_FEED_LINES, KEY_GAMMA, KEY_PRINTER, KEY_STRICT_CLAMP, KEY_WIDTH,
};

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        KEY_DITHER_MODE => {
            value.parse::<DitherMode>().map_err(|e| e.to_string())?;
        }
        KEY_GAMMA => {
            let v: f64 = value.trim().parse().map_err(|_| "must be a float")?;
            Gamma::new(v).map_err(|e| e.to_string())?;
        }
        KEY_WIDTH => {
            let v: u32 = value.trim().parse().map_err(|_| "must be an integer")?;
            if !(8..=u32::from(u16::MAX)).contains(&v) {
                return Err(format!("must be between 8 and {}", u16::MAX));
            }
        }
        KEY_PRINTER => {
            if value.len() > 255 {
                return Err("printer name must be at most 255 characters".into());
            }
        }
        KEY_FEED_LINES => {
            let v: usize = value.trim().parse().map_err(|_| "must be an integer")?;
            if v > 255 {
                return Err("must be between 0 and 255".into());
            }
        }
        KEY_STRICT_CLAMP => {
            if value != "true" && value != "false" {
                return Err("must be 'true' or 'false'".into());
            }
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_dither_mode() {
        assert!(validate_setting(KEY_DITHER_MODE, "jarvis").is_ok());
        assert!(validate_setting(KEY_DITHER_MODE, "10").is_ok());
        assert!(validate_setting(KEY_DITHER_MODE, "11").is_err());
        assert!(validate_setting(KEY_DITHER_MODE, "ostromoukhov").is_err());
    }

    #[test]
    fn test_valid_gamma() {
        assert!(validate_setting(KEY_GAMMA, "0.75").is_ok());
        assert!(validate_setting(KEY_GAMMA, "2").is_ok());
        assert!(validate_setting(KEY_GAMMA, "0").is_err());
        assert!(validate_setting(KEY_GAMMA, "-1").is_err());
        assert!(validate_setting(KEY_GAMMA, "bright").is_err());
    }

    #[test]
    fn test_valid_width() {
        assert!(validate_setting(KEY_WIDTH, "384").is_ok());
        assert!(validate_setting(KEY_WIDTH, "576").is_ok());
        assert!(validate_setting(KEY_WIDTH, "0").is_err());
        assert!(validate_setting(KEY_WIDTH, "-384").is_err());
    }

    #[test]
    fn test_valid_boolean() {
        assert!(validate_setting(KEY_STRICT_CLAMP, "true").is_ok());
        assert!(validate_setting(KEY_STRICT_CLAMP, "false").is_ok());
        assert!(validate_setting(KEY_STRICT_CLAMP, "yes").is_err());
    }

    #[test]
    fn test_unknown_key_is_accepted() {
        assert!(validate_setting("SOMETHING_ELSE", "anything").is_ok());
    }
}
