//! Terminal progress display for running trials

use crate::algorithm::assigner::TrialObserver;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{LazyLock, Mutex};

static TRIAL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "Trials [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar advanced once per finished trial
///
/// The message shows the best mean score seen so far.
pub struct TrialProgress {
    bar: ProgressBar,
    best_score: Mutex<f64>,
}

impl TrialProgress {
    /// Create a visible progress bar for `trials` trials
    pub fn new(trials: usize) -> Self {
        let bar = ProgressBar::new(trials as u64);
        bar.set_style(TRIAL_STYLE.clone());
        Self::with_bar(bar)
    }

    /// Create a progress tracker that draws nothing
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        Self {
            bar,
            best_score: Mutex::new(f64::INFINITY),
        }
    }

    /// Number of trials reported so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Lowest mean score reported so far
    pub fn best_score(&self) -> f64 {
        self.best_score
            .lock()
            .map_or(f64::INFINITY, |best| *best)
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl TrialObserver for TrialProgress {
    fn trial_completed(&self, _trial: usize, mean_score: f64) {
        if let Ok(mut best) = self.best_score.lock()
            && mean_score < *best
        {
            *best = mean_score;
            self.bar.set_message(format!("best {mean_score:.2}"));
        }
        self.bar.inc(1);
    }
}
