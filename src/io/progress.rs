//! Multi-file progress tracking with automatic batching for large sets

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PIPELINE_STAGES};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Steps of planning one file, in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Decoding the source image
    Load,
    /// Sampling, merging and projecting
    Plan,
    /// Writing the schematic preview
    Schematic,
    /// Writing the plan JSON
    Export,
}

impl Stage {
    /// Number of stages finished once this one starts
    pub const fn completed_before(self) -> usize {
        match self {
            Self::Load => 0,
            Self::Plan => 1,
            Self::Schematic => 2,
            Self::Export => 3,
        }
    }

    /// Short label shown next to the bar
    pub const fn label(self) -> &'static str {
        match self {
            Self::Load => "loading",
            Self::Plan => "planning",
            Self::Schematic => "schematic",
            Self::Export => "export",
        }
    }
}

/// Coordinates progress display for batch operations
///
/// Shows one bar per file for the most recent files and adds a batch bar
/// when there are too many files to list
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    file_count: usize,
    /// Stores (`filename`, `stages_done`, `label`) for rolling window display
    file_states: Vec<(String, usize, &'static str)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg:>10} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_count: 0,
            file_states: Vec::new(),
        }
    }

    /// Create a manager that draws nothing, for tests and piped output
    pub fn hidden() -> Self {
        Self {
            multi_progress: MultiProgress::with_draw_target(indicatif::ProgressDrawTarget::hidden()),
            ..Self::new()
        }
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        self.file_count = file_count;

        // Switch to batch mode for large file sets to avoid terminal spam
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(PIPELINE_STAGES as u64);
            pb.set_style(PROGRESS_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Number of files announced by `initialize`
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    /// Configure progress bar for a new file
    pub fn start_file(&mut self, index: usize, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.file_states.len() {
            self.file_states.resize(index + 1, (String::new(), 0, ""));
        }
        if let Some(state) = self.file_states.get_mut(index) {
            *state = (display_name, 0, Stage::Load.label());
        }
        self.update_bars();
    }

    /// Report the stage a file has reached
    pub fn update_stage(&mut self, index: usize, stage: Stage) {
        if let Some(state) = self.file_states.get_mut(index) {
            state.1 = stage.completed_before();
            state.2 = stage.label();
        }
        self.update_bars();
    }

    /// Mark file as completed and update batch progress
    pub fn complete_file(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.file_states.get_mut(index) {
            state.0 = format!("✓ {}", state.0);
            state.1 = PIPELINE_STAGES;
            state.2 = "done";
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Update all progress bars to show the last N active files
    fn update_bars(&self) {
        let active_files: Vec<_> = self
            .file_states
            .iter()
            .filter(|(name, _, _)| !name.is_empty())
            .collect();

        let start_idx = active_files
            .len()
            .saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible_files = active_files.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, (name, done, label)) in visible_files.iter().enumerate() {
            if let Some(bar) = self.file_bars.get(bar_idx) {
                bar.set_length(PIPELINE_STAGES as u64);
                bar.set_position(*done as u64);
                bar.set_message(*label);
                bar.set_prefix(name.clone());
            }
        }

        // Clear any unused bars
        for bar_idx in visible_files.len()..self.file_bars.len() {
            if let Some(bar) = self.file_bars.get(bar_idx) {
                bar.set_position(0);
                bar.set_message("");
                bar.set_prefix(String::new());
            }
        }
    }
}
