//! Tile pool entries and completed cell assignments

use crate::color::Color;

/// Candidate tile characterized by its average color
#[derive(Debug, Clone, PartialEq)]
pub struct Tile<T> {
    /// Caller-defined identifier such as a file path or index
    pub id: T,
    /// Average color of the tile image
    pub color: Color,
}

impl<T> Tile<T> {
    /// Pair an identifier with its average color
    pub const fn new(id: T, color: Color) -> Self {
        Self { id, color }
    }
}

/// Tile identifier for every cell of an N×N grid, in row-major order
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment<T> {
    size: usize,
    cells: Vec<T>,
    mean_score: f64,
}

impl<T> Assignment<T> {
    pub(crate) const fn new(size: usize, cells: Vec<T>, mean_score: f64) -> Self {
        Self {
            size,
            cells,
            mean_score,
        }
    }

    /// Cells along one side of the grid
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Average unpenalized color distance per cell
    pub const fn mean_score(&self) -> f64 {
        self.mean_score
    }

    /// Assigned identifiers indexed by row-major cell index
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Identifier assigned to a cell
    pub fn tile_at(&self, cell: usize) -> Option<&T> {
        self.cells.get(cell)
    }

    /// Identifier assigned at explicit grid coordinates
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col)
    }

    /// Iterate over grid rows
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Consume the assignment, returning cells and mean score
    pub fn into_parts(self) -> (Vec<T>, f64) {
        (self.cells, self.mean_score)
    }
}
