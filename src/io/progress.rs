//! Batch progress display: one bar for the batch, one for the current painting

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Paintings: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display while a batch of paintings is generated
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    painting_bar: Option<ProgressBar>,
    painting_count: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            painting_bar: None,
            painting_count: 0,
        }
    }

    /// Create the bars for a batch of `painting_count` paintings
    ///
    /// A batch bar only appears for more than one painting.
    pub fn initialize(&mut self, painting_count: usize) {
        self.painting_count = painting_count;

        if painting_count > 1 {
            let batch_bar = ProgressBar::new(painting_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let painting_bar = ProgressBar::new(0);
        painting_bar.set_style(PROGRESS_STYLE.clone());
        self.painting_bar = Some(self.multi_progress.add(painting_bar));
    }

    /// Number of paintings the bars were sized for
    pub const fn painting_count(&self) -> usize {
        self.painting_count
    }

    /// Reset the painting bar for a new painting of `lines` cuts
    pub fn start_painting(&self, name: &str, lines: usize) {
        if let Some(ref bar) = self.painting_bar {
            bar.set_length(lines as u64);
            bar.set_position(0);
            bar.set_prefix(name.to_string());
            bar.set_message(format!("0/{lines}"));
        }
    }

    /// Report the number of accepted cuts and rejected candidates so far
    pub fn update_cuts(&self, cuts: usize, rejected: usize) {
        if let Some(ref bar) = self.painting_bar {
            bar.set_position(cuts as u64);
            let total = bar.length().unwrap_or(0);
            bar.set_message(format!("{cuts}/{total} ({rejected} rejected)"));
        }
    }

    /// Mark the current painting as done
    pub fn complete_painting(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(ref bar) = self.painting_bar {
            let prefix = bar.prefix();
            bar.set_prefix(format!("✓ {prefix}"));
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All paintings generated");
        }
        let _ = self.multi_progress.clear();
    }
}
