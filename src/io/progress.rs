//! Section-by-section progress display for level assembly

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static SECTION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Sections: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many sections of a level have been assembled
pub struct ProgressManager {
    bar: ProgressBar,
    spawned_tiles: usize,
}

impl ProgressManager {
    /// Create a progress bar for `section_count` sections
    pub fn new(section_count: usize) -> Self {
        let bar = ProgressBar::new(section_count as u64);
        bar.set_style(SECTION_STYLE.clone());
        Self {
            bar,
            spawned_tiles: 0,
        }
    }

    /// Show which section is being built
    pub fn start_section(&self, label: &str) {
        self.bar.set_message(label.to_string());
    }

    /// Count a finished section and the tiles it spawned
    pub fn complete_section(&mut self, spawned: usize) {
        self.spawned_tiles += spawned;
        self.bar.inc(1);
    }

    /// Tiles spawned across all completed sections
    pub const fn spawned_tiles(&self) -> usize {
        self.spawned_tiles
    }

    /// Clear the progress display
    pub fn finish(&self) {
        self.bar
            .finish_with_message(format!("{} tiles spawned", self.spawned_tiles));
    }
}
