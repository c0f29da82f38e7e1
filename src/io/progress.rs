//! Progress bar for long trial runs

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_UPDATE_INTERVAL};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static TRIAL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Trials: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks completed trials, refreshing the display in batches
///
/// A hidden tracker still counts positions, so callers never branch on
/// whether output is shown.
pub struct TrialProgress {
    bar: ProgressBar,
    reported: usize,
}

impl TrialProgress {
    /// Create a visible progress bar for `total` trials
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(TRIAL_STYLE.clone());
        Self { bar, reported: 0 }
    }

    /// Create a tracker that draws nothing
    pub fn hidden(total: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total as u64);
        Self { bar, reported: 0 }
    }

    /// Record that `completed` trials are done
    ///
    /// The bar only moves every few hundred trials and on the final one.
    pub fn update(&mut self, completed: usize) {
        let total = self.bar.length().unwrap_or(0) as usize;
        if completed.saturating_sub(self.reported) >= PROGRESS_UPDATE_INTERVAL || completed >= total {
            self.bar.set_position(completed as u64);
            self.reported = completed;
        }
    }

    /// Position last pushed to the bar
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
