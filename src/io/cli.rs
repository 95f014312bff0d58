//! Command-line interface for ordering a directory of tiles into a mosaic

use crate::algorithm::assigner::{AssignerConfig, MosaicAssigner};
use crate::algorithm::assignment::Assignment;
use crate::algorithm::trial::TrialMode;
use crate::io::configuration::{DEFAULT_REFERENCE, DEFAULT_SEED, DEFAULT_TRIALS, FATIGUE_BASE};
use crate::io::error::{MosaicError, Result};
use crate::io::output::{save_assignment, write_assignment};
use crate::io::progress::TrialProgress;
use crate::io::tiles::{collect_tile_paths, default_grid_size, load_tile_pool};
use crate::spatial::reference::ReferenceImage;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "mosaicorder")]
#[command(
    author,
    version,
    about = "Order tile images so the grid approximates a reference image"
)]
/// Command-line arguments for the mosaic ordering tool
pub struct Cli {
    /// Directory containing tile images
    #[arg(value_name = "TILES")]
    pub tiles: PathBuf,

    /// Square reference image the mosaic should approximate
    #[arg(value_name = "REFERENCE", default_value = DEFAULT_REFERENCE)]
    pub reference: PathBuf,

    /// Tiles along each side of the mosaic (defaults to the largest square the tiles can fill)
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Allow a tile to appear in more than one cell
    #[arg(short, long)]
    pub duplicates: bool,

    /// Number of randomized trials to run
    #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,

    /// Random seed for reproducible ordering
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Run trials one after another instead of in parallel
    #[arg(long)]
    pub sequential: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the ordering to this file instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Grid side for the given number of available tiles
    pub fn grid_size(&self, tile_count: usize) -> usize {
        self.width.unwrap_or_else(|| default_grid_size(tile_count))
    }

    /// Assigner configuration derived from the arguments
    pub const fn assigner_config(&self) -> AssignerConfig {
        AssignerConfig {
            trials: self.trials,
            mode: TrialMode::from_flag(self.duplicates, FATIGUE_BASE),
            parallel: !self.sequential,
        }
    }
}

/// Runs the whole pipeline: scan tiles, sample the reference, assign, write
pub struct OrderingProcessor {
    cli: Cli,
}

impl OrderingProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Compute the best assignment without writing it
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tile directory cannot be read or a tile cannot be loaded
    /// - The reference image cannot be loaded or is not square
    /// - The tiles cannot fill the requested grid
    pub fn order(&self) -> Result<Assignment<PathBuf>> {
        let start_time = Instant::now();

        let mut paths = collect_tile_paths(&self.cli.tiles)?;
        let size = self.cli.grid_size(paths.len());
        paths.truncate(size.saturating_mul(size));

        // Square check happens before any tile is decoded
        let reference = ReferenceImage::open(&self.cli.reference)?.to_grid(size)?;
        let pool = load_tile_pool(&paths)?;

        let config = self.cli.assigner_config();
        let progress = if self.cli.should_show_progress() {
            TrialProgress::new(config.trials)
        } else {
            TrialProgress::hidden()
        };

        let mut assigner = MosaicAssigner::seeded(config, self.cli.seed);
        let assignment = assigner.assign_grid_observed(&reference, &pool, &progress);
        progress.finish();
        let assignment = assignment?;

        tracing::info!(
            size,
            tiles = pool.len(),
            mean_score = assignment.mean_score(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "Ordering complete"
        );
        Ok(assignment)
    }

    /// Compute the best assignment and write it to the output file or stdout
    ///
    /// # Errors
    ///
    /// Returns an error if ordering fails or the result cannot be written
    pub fn process(&self) -> Result<()> {
        let assignment = self.order()?;

        match &self.cli.output {
            Some(path) => save_assignment(&assignment, path),
            None => write_assignment(&mut std::io::stdout().lock(), &assignment).map_err(|e| {
                MosaicError::FileSystem {
                    path: PathBuf::from("<stdout>"),
                    operation: "write assignment",
                    source: e,
                }
            }),
        }
    }
}
