//! Randomized greedy assignment of tile images to the cells of a square mosaic
//!
//! Each tile is reduced to its average color and each grid cell to one color
//! sampled from a downscaled reference image. Cells are filled greedily with
//! the nearest available tile, visiting cells in random order, and the best
//! of several independent trials is kept.

#![forbid(unsafe_code)]

/// Greedy trial procedure and the multi-trial assigner
pub mod algorithm;
/// Color values, color distance and average color extraction
pub mod color;
/// Input/output operations and error handling
pub mod io;
/// Reference grid and reference image sampling
pub mod spatial;

pub use algorithm::assigner::{AssignerConfig, MosaicAssigner, TrialObserver};
pub use algorithm::assignment::{Assignment, Tile};
pub use algorithm::trial::TrialMode;
pub use color::{Color, distance};
pub use io::error::{MosaicError, Result};
pub use spatial::ReferenceGrid;
