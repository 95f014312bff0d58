//! Algorithm constants and runtime configuration defaults

use image::imageops::FilterType;

/// Number of independent randomized trials per assignment
pub const DEFAULT_TRIALS: usize = 10;

// Each prior use of a tile multiplies its distance by this factor once more
/// Base of the exponential fatigue penalty in duplicates mode
pub const FATIGUE_BASE: f64 = 1.03;

/// Fixed seed for reproducible assignment
pub const DEFAULT_SEED: u64 = 42;

/// Reference image used when none is given on the command line
pub const DEFAULT_REFERENCE: &str = "reference.png";

/// Resampling filter used to reduce the reference image to one pixel per cell
pub const REFERENCE_FILTER: FilterType = FilterType::CatmullRom;

/// File extensions accepted as tile images
pub const TILE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
