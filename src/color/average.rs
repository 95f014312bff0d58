//! Mean color of an image, used to characterize each tile

use crate::color::Color;
use crate::io::error::{MosaicError, Result};
use image::DynamicImage;
use std::path::Path;

/// Mean channel intensities over every pixel of an image
///
/// Alpha is reported only for images that carry an alpha channel.
/// Returns `None` for an image without pixels.
pub fn average_color(image: &DynamicImage) -> Option<Color> {
    let rgba = image.to_rgba8();
    let pixel_count = u64::from(rgba.width()) * u64::from(rgba.height());
    if pixel_count == 0 {
        return None;
    }

    let mut sums = [0u64; 4];
    for pixel in rgba.pixels() {
        for (sum, &channel) in sums.iter_mut().zip(pixel.0.iter()) {
            *sum += u64::from(channel);
        }
    }

    let [r, g, b, a] = sums.map(|sum| sum as f64 / pixel_count as f64);
    Some(if image.color().has_alpha() {
        Color::rgba(r, g, b, a)
    } else {
        Color::rgb(r, g, b)
    })
}

/// Open an image file and compute its mean color
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - The image has no pixels
pub fn average_color_of_file(path: &Path) -> Result<Color> {
    let image = image::open(path).map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    average_color(&image).ok_or_else(|| MosaicError::EmptyImage {
        path: path.to_path_buf(),
    })
}
