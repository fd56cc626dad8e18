//! Image decoding and print preparation.

use std::path::Path;

use image::{DynamicImage, RgbImage};
use tracing::{debug, info};

use crate::orient::auto_rotate_portrait;
use crate::scale::scale_to_width;
use crate::{ImageSourceError, Result};

/// Decode an image file, guessing the format from its contents.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let img = image::open(path).map_err(|source| ImageSourceError::Load {
        path: path.display().to_string(),
        source,
    })?;
    info!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "Loaded source image"
    );
    Ok(img)
}

/// Orient and scale an image for printing at `width` dots.
pub fn prepare(img: DynamicImage, width: u32) -> Result<RgbImage> {
    let rotated = auto_rotate_portrait(img);
    let scaled = scale_to_width(rotated, width)?;
    debug!(width = scaled.width(), height = scaled.height(), "Prepared image for printing");
    Ok(scaled.to_rgb8())
}

/// Load an image file and prepare it for printing at `width` dots.
pub fn prepare_for_print(path: &Path, width: u32) -> Result<RgbImage> {
    prepare(load_image(path)?, width)
}
