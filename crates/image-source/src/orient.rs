//! Orientation handling.
//!
//! Thermal paper is narrow and long, so landscape images are printed sideways
//! to make use of the full paper length.

use image::DynamicImage;
use tracing::debug;

/// Rotate a landscape image 90 degrees clockwise.
///
/// Portrait and square images are returned unchanged.
pub fn auto_rotate_portrait(img: DynamicImage) -> DynamicImage {
    let (w, h) = (img.width(), img.height());

    if w > h {
        debug!(w, h, "Landscape image detected, rotating to portrait");
        img.rotate90()
    } else {
        img
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    /// Top-left=10, Top-right=20, Bottom-left=30, Bottom-right=40
    fn create_corner_image(width: u32, height: u32) -> DynamicImage {
        let mut img = GrayImage::from_pixel(width, height, Luma([128]));
        img.put_pixel(0, 0, Luma([10]));
        img.put_pixel(width - 1, 0, Luma([20]));
        img.put_pixel(0, height - 1, Luma([30]));
        img.put_pixel(width - 1, height - 1, Luma([40]));
        DynamicImage::ImageLuma8(img)
    }

    fn pixel_value(img: &DynamicImage, x: u32, y: u32) -> u8 {
        img.to_luma8().get_pixel(x, y).0[0]
    }

    #[test]
    fn test_landscape_is_rotated_clockwise() {
        let result = auto_rotate_portrait(create_corner_image(6, 3));

        assert_eq!((result.width(), result.height()), (3, 6));
        assert_eq!(pixel_value(&result, 0, 0), 30);
        assert_eq!(pixel_value(&result, 2, 0), 10);
        assert_eq!(pixel_value(&result, 2, 5), 20);
        assert_eq!(pixel_value(&result, 0, 5), 40);
    }

    #[test]
    fn test_portrait_and_square_unchanged() {
        for (w, h) in [(4, 8), (5, 5)] {
            let result = auto_rotate_portrait(create_corner_image(w, h));
            assert_eq!((result.width(), result.height()), (w, h));
            assert_eq!(pixel_value(&result, 0, 0), 10);
        }
    }
}
