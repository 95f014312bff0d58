//! Reference grid storage and reference image sampling

/// Row-major N×N grid of reference colors
pub mod grid;
/// Reference image loading and per-cell sampling
pub mod reference;

pub use grid::ReferenceGrid;
