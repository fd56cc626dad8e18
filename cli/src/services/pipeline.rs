//! Print pipeline: prepared image to ESC/POS job bytes to transport.

use std::path::Path;

use anyhow::Context;
use escpos_raster::{RasterFrame, feed_lines};
use image::RgbImage;
use mono_dither::{GrayscaleBuffer, dither};
use tracing::info;

use super::printer::RawTransport;
use crate::config::AppConfig;

/// Convert a prepared RGB image into a `GS v 0` raster frame.
pub fn render_frame(img: &RgbImage, config: &AppConfig) -> anyhow::Result<RasterFrame> {
    let mut buffer = GrayscaleBuffer::from_rgb_image(img, config.gamma)
        .context("failed to convert image to grayscale")?;
    let raster = dither(&mut buffer, &config.dither_options());

    let width_bytes = raster.width_bytes();
    let height = raster.height();
    RasterFrame::encode(width_bytes, height, raster.as_bytes())
        .context("failed to encode raster frame")
}

/// Full job bytes: the raster frame followed by the paper feed.
pub fn build_job(img: &RgbImage, config: &AppConfig) -> anyhow::Result<Vec<u8>> {
    let mut job = render_frame(img, config)?.into_bytes();
    job.extend(feed_lines(config.feed_lines));
    Ok(job)
}

/// Load, prepare, dither and send one image.
pub async fn print_image<T: RawTransport>(
    path: &Path,
    config: &AppConfig,
    transport: &T,
) -> anyhow::Result<()> {
    let img = image_source::prepare_for_print(path, config.width_dots)?;
    let job = build_job(&img, config)?;

    info!(
        image = %path.display(),
        mode = %config.dither_mode,
        gamma = config.gamma.value(),
        width = img.width(),
        height = img.height(),
        bytes = job.len(),
        "Sending print job"
    );
    transport.send(&config.printer, &job).await
}
