//! Terminal progress display while glyph rows are drawn

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static ROW_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} rows"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the glyph rows of one wallpaper
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a bar for `rows` glyph rows rendering into `output`
    pub fn new(rows: usize, output: &Path) -> Self {
        let bar = ProgressBar::new(rows as u64);
        bar.set_style(ROW_STYLE.clone());
        bar.set_prefix(
            output
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
        );
        Self { bar }
    }

    /// Record that `rows_done` rows are finished
    pub fn update(&self, rows_done: usize) {
        self.bar.set_position(rows_done as u64);
    }

    /// Clear the bar and return the number of rows it reached
    pub fn finish(&self) -> u64 {
        let reached = self.bar.position();
        self.bar.finish_and_clear();
        reached
    }
}
