//! Input/output plumbing around the assignment core

/// Command-line interface and end-to-end processing
pub mod cli;
/// Algorithm constants and runtime defaults
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Writing finished assignments
pub mod output;
/// Trial progress display
pub mod progress;
/// Tile directory scanning and pool construction
pub mod tiles;
