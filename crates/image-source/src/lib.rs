//! Source image preparation for thermal printer output.
//!
//! Decodes an image file, turns landscape images into portrait and scales
//! the result to the printer's dot width.

pub mod load;
pub mod orient;
pub mod scale;

// Re-exports for convenience
pub use load::{load_image, prepare, prepare_for_print};
pub use orient::auto_rotate_portrait;
pub use scale::{scaled_height, scale_to_width};

/// Errors that can occur while preparing a source image.
#[derive(Debug, thiserror::Error)]
pub enum ImageSourceError {
    #[error("Could not load image {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid target width: {0}")]
    InvalidWidth(u32),

    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
}

/// Result type alias for image-source operations.
pub type Result<T> = std::result::Result<T, ImageSourceError>;
