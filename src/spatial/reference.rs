//! Reference image loading, square validation and downsampling to the grid

use crate::color::Color;
use crate::io::configuration::REFERENCE_FILTER;
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::spatial::grid::{ReferenceGrid, cell_position};
use image::{DynamicImage, GenericImageView};
use std::path::{Path, PathBuf};

/// Image the mosaic should approximate
pub struct ReferenceImage {
    path: PathBuf,
    image: DynamicImage,
}

impl ReferenceImage {
    /// Load a reference image from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or decoded
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let image = image::open(&path_buf).map_err(|e| MosaicError::ImageLoad {
            path: path_buf.clone(),
            source: e,
        })?;
        Ok(Self {
            path: path_buf,
            image,
        })
    }

    /// Wrap an already decoded image; `label` is reported in errors
    pub fn from_image<P: AsRef<Path>>(label: P, image: DynamicImage) -> Self {
        Self {
            path: label.as_ref().to_path_buf(),
            image,
        }
    }

    /// Width and height in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Resize to `size`×`size` and sample one color per cell
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The image is not square
    /// - `size` is zero or does not fit an image dimension
    pub fn to_grid(&self, size: usize) -> Result<ReferenceGrid> {
        let (width, height) = self.dimensions();
        if width != height {
            return Err(MosaicError::ReferenceNotSquare {
                path: self.path.clone(),
                width,
                height,
            });
        }
        if size == 0 {
            return Err(invalid_parameter(
                "size",
                &size,
                &"grid must have at least one cell",
            ));
        }
        let side = u32::try_from(size).map_err(|_overflow| {
            invalid_parameter("size", &size, &"grid size exceeds image limits")
        })?;

        let resized = self.image.resize_exact(side, side, REFERENCE_FILTER);
        let has_alpha = resized.color().has_alpha();

        let colors = (0..size * size)
            .map(|cell| {
                let (row, col) = cell_position(cell, size);
                let [r, g, b, a] = resized.get_pixel(col as u32, row as u32).0;
                if has_alpha {
                    Color::from([r, g, b, a])
                } else {
                    Color::from([r, g, b])
                }
            })
            .collect();

        ReferenceGrid::from_colors(size, colors)
    }
}
