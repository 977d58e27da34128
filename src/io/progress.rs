//! Tile progress display for long renders

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::io::configuration::PROGRESS_BAR_WIDTH;

static TILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} tiles"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Counts finished tiles while a render runs on the worker pool
///
/// All methods take `&self`, so workers can report completion concurrently.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to stderr
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::new(0),
        }
    }

    /// Create a progress manager that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::hidden()),
        }
    }

    /// Reset the bar for a render of `tile_count` tiles
    pub fn initialize(&self, tile_count: usize, label: &str) {
        self.bar.set_style(TILE_STYLE.clone());
        self.bar.set_length(tile_count as u64);
        self.bar.set_position(0);
        self.bar.set_message(label.to_string());
    }

    /// Record one finished tile
    pub fn tile_completed(&self) {
        self.bar.inc(1);
    }

    /// Tiles finished so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
