//! Scaling to the printer's dot width.

use image::DynamicImage;
use image::imageops::FilterType;
use tracing::debug;

use crate::{ImageSourceError, Result};

/// Height after scaling an `orig_w × orig_h` image to `target_width`.
///
/// The scale factor is computed in single precision and the height rounded
/// half to even, never below 1.
pub fn scaled_height(orig_w: u32, orig_h: u32, target_width: u32) -> u32 {
    let factor = target_width as f32 / orig_w as f32;
    let height = f64::from(orig_h as f32 * factor).round_ties_even();
    (height as u32).max(1)
}

/// Resize an image to `width` dots, keeping its aspect ratio.
///
/// Uses Lanczos3 filtering. Images already at the target width are returned
/// unchanged.
pub fn scale_to_width(img: DynamicImage, width: u32) -> Result<DynamicImage> {
    if width == 0 {
        return Err(ImageSourceError::InvalidWidth(width));
    }
    let (orig_w, orig_h) = (img.width(), img.height());
    if orig_w == 0 || orig_h == 0 {
        return Err(ImageSourceError::EmptyImage {
            width: orig_w,
            height: orig_h,
        });
    }
    if orig_w == width {
        debug!(width, "Image already at target width, skipping resize");
        return Ok(img);
    }

    let new_height = scaled_height(orig_w, orig_h, width);
    debug!(orig_w, orig_h, new_width = width, new_height, "Resizing image to target width");

    Ok(img.resize_exact(width, new_height, FilterType::Lanczos3))
}
