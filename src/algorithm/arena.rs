use crate::algorithm::trial::TrialMode;
use bitvec::prelude::*;

/// Working state of one trial over an indexed tile pool
///
/// Pool entries are never removed. Distinct mode clears an availability bit
/// when a tile is used; duplicates mode keeps every tile available and
/// instead tracks how often each one was used, caching the resulting
/// fatigue multiplier so the candidate scan stays a single multiply.
#[derive(Clone, Debug)]
pub struct TrialArena {
    available: BitVec,
    uses: Vec<u32>,
    multipliers: Vec<f64>,
    mode: TrialMode,
}

impl TrialArena {
    /// Create an arena with every pool entry available and unused
    pub fn new(pool_size: usize, mode: TrialMode) -> Self {
        let tracked = match mode {
            TrialMode::Distinct => 0,
            TrialMode::Duplicates { .. } => pool_size,
        };
        Self {
            available: bitvec![1; pool_size],
            uses: vec![0; tracked],
            multipliers: vec![1.0; tracked],
            mode,
        }
    }

    /// Whether the entry may still be chosen
    pub fn is_available(&self, index: usize) -> bool {
        self.available.get(index).as_deref() == Some(&true)
    }

    /// Number of entries that may still be chosen
    pub fn remaining(&self) -> usize {
        self.available.count_ones()
    }

    /// Times the entry has been chosen so far in duplicates mode
    pub fn uses(&self, index: usize) -> u32 {
        self.uses.get(index).copied().unwrap_or(0)
    }

    /// Distance as seen by the greedy comparison
    ///
    /// Duplicates mode scales by `fatigue_base ^ uses`; distinct mode
    /// returns the raw distance.
    pub fn effective_distance(&self, index: usize, raw: f64) -> f64 {
        match self.mode {
            TrialMode::Distinct => raw,
            TrialMode::Duplicates { .. } => {
                raw * self.multipliers.get(index).copied().unwrap_or(1.0)
            }
        }
    }

    /// Record that the entry was assigned to a cell
    pub fn record_use(&mut self, index: usize) {
        match self.mode {
            TrialMode::Distinct => {
                if index < self.available.len() {
                    self.available.set(index, false);
                }
            }
            TrialMode::Duplicates { fatigue_base } => {
                if let (Some(uses), Some(multiplier)) =
                    (self.uses.get_mut(index), self.multipliers.get_mut(index))
                {
                    *uses += 1;
                    *multiplier = fatigue_base.powi(i32::try_from(*uses).unwrap_or(i32::MAX));
                }
            }
        }
    }
}
