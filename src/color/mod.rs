//! Color values and the dissimilarity metric used for tile matching

/// Average color extraction for tile images
pub mod average;
/// Color value type and squared RGB distance
pub mod metric;

pub use metric::{Color, distance};
