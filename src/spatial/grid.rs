//! Square grid of reference colors addressed by row-major cell index
//!
//! Cell index `i` maps to row `i / N` and column `i % N`.

use crate::color::Color;
use crate::io::error::{Result, invalid_parameter};
use ndarray::Array2;

/// One reference color per mosaic cell
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceGrid {
    colors: Array2<Color>,
}

impl ReferenceGrid {
    /// Build a grid from `size * size` colors listed row by row
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `size` is zero
    /// - The number of colors is not `size * size`
    pub fn from_colors(size: usize, colors: Vec<Color>) -> Result<Self> {
        if size == 0 {
            return Err(invalid_parameter(
                "size",
                &size,
                &"grid must have at least one cell",
            ));
        }
        let count = colors.len();
        let colors = Array2::from_shape_vec((size, size), colors).map_err(|_shape_error| {
            invalid_parameter(
                "colors",
                &count,
                &format!("expected {} colors for a {size}x{size} grid", size * size),
            )
        })?;
        Ok(Self { colors })
    }

    /// Cells along one side
    pub fn size(&self) -> usize {
        self.colors.nrows()
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.colors.len()
    }

    /// Reference color of a cell by row-major index
    pub fn color_at(&self, cell: usize) -> Option<&Color> {
        let (row, col) = cell_position(cell, self.size());
        self.colors.get([row, col])
    }

    /// Reference color at explicit grid coordinates
    pub fn get(&self, row: usize, col: usize) -> Option<&Color> {
        self.colors.get([row, col])
    }

    /// All colors in row-major cell order
    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.colors.iter()
    }
}

/// Convert a row-major cell index to `(row, column)`
pub const fn cell_position(cell: usize, size: usize) -> (usize, usize) {
    (cell / size, cell % size)
}

/// Convert `(row, column)` to a row-major cell index
pub const fn cell_index(row: usize, col: usize, size: usize) -> usize {
    row * size + col
}
