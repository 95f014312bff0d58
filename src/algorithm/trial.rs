//! One randomized greedy pass assigning a tile to every reference cell
//!
//! Cells are visited in a random order so no region of the grid is
//! systematically served first. Each visited cell takes the pool entry with
//! the smallest effective distance to its reference color; ties go to the
//! entry that comes first in pool order, which is never shuffled.

use crate::algorithm::arena::TrialArena;
use crate::algorithm::assignment::{Assignment, Tile};
use crate::color::{Color, distance};
use crate::io::error::{MosaicError, Result};
use crate::spatial::ReferenceGrid;
use rand::Rng;
use rand::seq::SliceRandom;

/// Whether a tile may fill more than one cell
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrialMode {
    /// Each tile fills at most one cell; the pool needs at least N² entries
    Distinct,
    /// Tiles may repeat, with distance scaled by `fatigue_base ^ uses`
    Duplicates {
        /// Multiplier applied once per prior use, greater than or equal to 1
        fatigue_base: f64,
    },
}

impl TrialMode {
    /// Mode for a duplicates flag using the given fatigue base
    pub const fn from_flag(duplicates: bool, fatigue_base: f64) -> Self {
        if duplicates {
            Self::Duplicates { fatigue_base }
        } else {
            Self::Distinct
        }
    }

    /// Whether tiles may repeat
    pub const fn allows_duplicates(&self) -> bool {
        matches!(self, Self::Duplicates { .. })
    }
}

/// Closest available pool entry to `target` as `(index, raw distance)`
fn nearest_available<T>(
    pool: &[Tile<T>],
    arena: &TrialArena,
    target: &Color,
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64, f64)> = None;

    for (index, tile) in pool.iter().enumerate() {
        if !arena.is_available(index) {
            continue;
        }
        let raw = distance(&tile.color, target);
        let effective = arena.effective_distance(index, raw);
        if best.is_none_or(|(_, _, best_effective)| effective < best_effective) {
            best = Some((index, raw, effective));
        }
    }

    best.map(|(index, raw, _)| (index, raw))
}

/// Run a single trial of the greedy assignment
///
/// The returned score is the mean raw distance per cell; the fatigue penalty
/// only steers selection and never enters the score.
///
/// # Errors
///
/// Returns `PoolExhausted` if distinct mode runs out of tiles before every
/// cell is filled.
pub fn run_trial<T, R>(
    reference: &ReferenceGrid,
    pool: &[Tile<T>],
    mode: TrialMode,
    rng: &mut R,
) -> Result<Assignment<T>>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let cell_count = reference.cell_count();
    let exhausted = || MosaicError::PoolExhausted {
        required: cell_count,
        available: pool.len(),
    };

    let mut arena = TrialArena::new(pool.len(), mode);
    let mut order: Vec<usize> = (0..cell_count).collect();
    order.shuffle(rng);

    let mut cells: Vec<Option<T>> = vec![None; cell_count];
    let mut total_distance = 0.0;

    for cell in order {
        let target = reference.color_at(cell).ok_or_else(exhausted)?;
        let (index, raw) = nearest_available(pool, &arena, target).ok_or_else(exhausted)?;
        let tile = pool.get(index).ok_or_else(exhausted)?;

        if let Some(slot) = cells.get_mut(cell) {
            *slot = Some(tile.id.clone());
        }
        arena.record_use(index);
        total_distance += raw;
    }

    let cells = cells
        .into_iter()
        .collect::<Option<Vec<T>>>()
        .ok_or_else(exhausted)?;

    Ok(Assignment::new(
        reference.size(),
        cells,
        total_distance / cell_count as f64,
    ))
}
