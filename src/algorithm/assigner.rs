//! Best-of-N driver over independent randomized trials
//!
//! A single greedy pass is sensitive to the order in which cells are
//! visited, so several trials run and the lowest mean score wins.

use crate::algorithm::assignment::{Assignment, Tile};
use crate::algorithm::trial::{TrialMode, run_trial};
use crate::io::configuration::{DEFAULT_TRIALS, FATIGUE_BASE};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::spatial::ReferenceGrid;
use crate::spatial::reference::ReferenceImage;
use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::prelude::*;
use std::path::Path;

/// Receives a notification after each trial finishes
///
/// Trials may complete on several threads at once and in any order.
pub trait TrialObserver: Sync {
    /// Called once per trial with its index and mean score
    fn trial_completed(&self, trial: usize, mean_score: f64);
}

impl TrialObserver for () {
    fn trial_completed(&self, _trial: usize, _mean_score: f64) {}
}

/// Parameters of the multi-trial search
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AssignerConfig {
    /// Number of independent trials
    pub trials: usize,
    /// Distinct or duplicates mode
    pub mode: TrialMode,
    /// Run trials on the rayon thread pool
    pub parallel: bool,
}

impl Default for AssignerConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            mode: TrialMode::Distinct,
            parallel: true,
        }
    }
}

impl AssignerConfig {
    /// Default configuration with duplicates enabled or disabled
    pub const fn with_duplicates(duplicates: bool) -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            mode: TrialMode::from_flag(duplicates, FATIGUE_BASE),
            parallel: true,
        }
    }

    /// Check parameter ranges
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `trials` is zero
    /// - The fatigue base is below 1 or not finite
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(invalid_parameter(
                "trials",
                &self.trials,
                &"at least one trial is required",
            ));
        }
        if let TrialMode::Duplicates { fatigue_base } = self.mode
            && (!fatigue_base.is_finite() || fatigue_base < 1.0)
        {
            return Err(invalid_parameter(
                "fatigue_base",
                &fatigue_base,
                &"must be a finite value of at least 1",
            ));
        }
        Ok(())
    }
}

/// Randomized greedy mosaic assigner with an injectable random source
///
/// The generator only supplies one seed per trial; every trial then runs
/// from its own `StdRng`, so results do not depend on whether trials run in
/// parallel.
pub struct MosaicAssigner<R> {
    config: AssignerConfig,
    rng: R,
}

impl MosaicAssigner<StdRng> {
    /// Create an assigner driven by a seeded `StdRng`
    pub fn seeded(config: AssignerConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MosaicAssigner<R> {
    /// Create an assigner using the given random source
    pub const fn new(config: AssignerConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Active configuration
    pub const fn config(&self) -> &AssignerConfig {
        &self.config
    }

    /// Load a square reference image, reduce it to `size`×`size` and assign
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid
    /// - The reference image cannot be loaded or is not square
    /// - The pool is empty, or too small for distinct mode
    pub fn assign<T, P>(
        &mut self,
        reference_path: P,
        size: usize,
        pool: &[Tile<T>],
    ) -> Result<Assignment<T>>
    where
        T: Clone + Send + Sync,
        P: AsRef<Path>,
    {
        self.config.validate()?;
        let reference = ReferenceImage::open(reference_path)?.to_grid(size)?;
        self.assign_grid_observed(&reference, pool, &())
    }

    /// Assign tiles to an already sampled reference grid
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the pool cannot
    /// fill the grid
    pub fn assign_grid<T>(
        &mut self,
        reference: &ReferenceGrid,
        pool: &[Tile<T>],
    ) -> Result<Assignment<T>>
    where
        T: Clone + Send + Sync,
    {
        self.assign_grid_observed(reference, pool, &())
    }

    /// Assign tiles to a reference grid, reporting each finished trial
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the pool cannot
    /// fill the grid
    pub fn assign_grid_observed<T, O>(
        &mut self,
        reference: &ReferenceGrid,
        pool: &[Tile<T>],
        observer: &O,
    ) -> Result<Assignment<T>>
    where
        T: Clone + Send + Sync,
        O: TrialObserver + ?Sized,
    {
        let outcomes = self.run_trials(reference, pool, observer)?;

        // Earliest trial wins ties
        let (best_trial, best) = outcomes
            .into_iter()
            .enumerate()
            .reduce(|best, next| {
                if next.1.mean_score() < best.1.mean_score() {
                    next
                } else {
                    best
                }
            })
            .ok_or_else(|| {
                invalid_parameter("trials", &self.config.trials, &"no trial was run")
            })?;

        tracing::info!(
            trial = best_trial,
            mean_score = best.mean_score(),
            "Selected best trial"
        );
        Ok(best)
    }

    /// Run every trial and return all outcomes in trial order
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the pool cannot
    /// fill the grid; no trial runs in that case
    pub fn run_trials<T, O>(
        &mut self,
        reference: &ReferenceGrid,
        pool: &[Tile<T>],
        observer: &O,
    ) -> Result<Vec<Assignment<T>>>
    where
        T: Clone + Send + Sync,
        O: TrialObserver + ?Sized,
    {
        self.config.validate()?;
        check_pool(reference.cell_count(), pool.len(), self.config.mode)?;

        let seeds: Vec<u64> = (0..self.config.trials)
            .map(|_| self.rng.random())
            .collect();
        let mode = self.config.mode;

        let run = |(trial, &seed): (usize, &u64)| -> Result<Assignment<T>> {
            let mut rng = StdRng::seed_from_u64(seed);
            let outcome = run_trial(reference, pool, mode, &mut rng)?;
            tracing::debug!(trial, mean_score = outcome.mean_score(), "Trial completed");
            observer.trial_completed(trial, outcome.mean_score());
            Ok(outcome)
        };

        if self.config.parallel {
            seeds.par_iter().enumerate().map(run).collect()
        } else {
            seeds.iter().enumerate().map(run).collect()
        }
    }
}

/// Verify the pool can fill `cell_count` cells in the given mode
///
/// # Errors
///
/// Returns `PoolExhausted` when distinct mode has fewer tiles than cells and
/// `EmptyPool` when duplicates mode has no tiles
pub fn check_pool(cell_count: usize, pool_size: usize, mode: TrialMode) -> Result<()> {
    match mode {
        TrialMode::Distinct if pool_size < cell_count => Err(MosaicError::PoolExhausted {
            required: cell_count,
            available: pool_size,
        }),
        TrialMode::Duplicates { .. } if pool_size == 0 => Err(MosaicError::EmptyPool),
        _ => Ok(()),
    }
}
