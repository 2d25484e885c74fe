//! UI/Progress presentation layer
//!
//! This module handles:
//! - Progress reporting while a batch runs (see [`ProgressReporter`])
//! - Interactive progress bars using indicatif
//! - Silent progress for dry-run mode
//! - Printing the catalog, tool details and the completion report (see [`display`])
//!
//! All progress reporting goes through the ProgressReporter trait, fed from
//! the batch event stream.

pub mod display;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::batch::{BatchEvent, InstallOutcome, ToolState};
use crate::fetcher::DownloadProgress;

/// Progress reporter fed with batch events
pub trait ProgressReporter {
    /// Show the tool that is starting (`index` is zero-based)
    fn tool_started(&mut self, name: &str, index: usize, total: usize);

    /// Show the current pipeline stage of a tool
    fn state_changed(&mut self, name: &str, state: ToolState);

    /// Update download progress of the current tool
    fn download_progress(&mut self, name: &str, progress: DownloadProgress);

    /// Record that a tool reached a terminal state
    fn tool_finished(&mut self, outcome: &InstallOutcome);

    /// Clear all bars
    fn finish(&mut self);

    /// Route one batch event to the matching method
    fn handle(&mut self, event: &BatchEvent) {
        match event {
            BatchEvent::ToolStarted { index, total, name } => {
                self.tool_started(name, *index, *total);
            }
            BatchEvent::StateChanged { name, state } => self.state_changed(name, *state),
            BatchEvent::DownloadProgress { name, progress } => {
                self.download_progress(name, *progress);
            }
            BatchEvent::ToolFinished(outcome) => self.tool_finished(outcome),
            BatchEvent::Finished => self.finish(),
            BatchEvent::Planned { .. } => {}
        }
    }
}

fn style(template: &str, progress_chars: &str) -> ProgressStyle {
    ProgressStyle::default_bar()
        .template(template)
        .map(|s| s.progress_chars(progress_chars))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
}

/// Interactive progress reporter with visual progress bars
///
/// One bar counts finished tools; a second bar tracks the current download
/// and is replaced for every tool.
pub struct InteractiveProgressReporter {
    bars: MultiProgress,
    /// Main progress bar for tool installation
    tools_pb: ProgressBar,
    /// Download bar for the tool currently being fetched
    download_pb: Option<ProgressBar>,
}

impl InteractiveProgressReporter {
    pub fn new(total_tools: u64) -> Self {
        let bars = MultiProgress::new();
        let tools_pb = bars.add(ProgressBar::new(total_tools));
        tools_pb.set_style(style("[{bar:40.cyan/blue}] {pos}/{len} {msg}", "#>-"));

        Self {
            bars,
            tools_pb,
            download_pb: None,
        }
    }

    fn clear_download(&mut self) {
        if let Some(pb) = self.download_pb.take() {
            pb.finish_and_clear();
            self.bars.remove(&pb);
        }
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn tool_started(&mut self, name: &str, index: usize, total: usize) {
        self.clear_download();
        self.tools_pb
            .set_message(format!("({}/{}) {}", index + 1, total, name));
    }

    fn state_changed(&mut self, name: &str, state: ToolState) {
        match state {
            ToolState::Fetching => {
                let pb = self.bars.add(ProgressBar::new(0));
                pb.set_style(style(
                    "  [{bar:40.green/yellow}] {bytes}/{total_bytes} {msg}",
                    "█▉▊▋▌▍▎▏  ",
                ));
                pb.set_message(format!("downloading {name}"));
                self.download_pb = Some(pb);
            }
            ToolState::Installing => {
                self.clear_download();
                self.tools_pb.set_message(format!("installing {name}"));
            }
            state if state.is_terminal() => self.clear_download(),
            _ => {}
        }
    }

    fn download_progress(&mut self, name: &str, progress: DownloadProgress) {
        if let Some(ref pb) = self.download_pb {
            if progress.downloaded == 0 {
                pb.set_message(format!("downloading {name}"));
            }
            match progress.total {
                Some(total) => pb.set_length(total),
                // Unknown size
                None => pb.set_length(progress.downloaded.max(1)),
            }
            pb.set_position(progress.downloaded);
        }
    }

    fn tool_finished(&mut self, outcome: &InstallOutcome) {
        self.clear_download();
        if let Some(ref reason) = outcome.failure_reason {
            self.tools_pb
                .println(format!("  ✗ {}: {}", outcome.tool_name, reason));
        } else {
            self.tools_pb.println(format!("  ✓ {}", outcome.tool_name));
        }
        self.tools_pb.inc(1);
    }

    fn finish(&mut self) {
        self.clear_download();
        self.tools_pb.finish_and_clear();
    }
}

/// Silent progress reporter for dry-run mode
///
/// No-op implementation that does not display anything.
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn tool_started(&mut self, _name: &str, _index: usize, _total: usize) {}

    fn state_changed(&mut self, _name: &str, _state: ToolState) {}

    fn download_progress(&mut self, _name: &str, _progress: DownloadProgress) {}

    fn tool_finished(&mut self, _outcome: &InstallOutcome) {}

    fn finish(&mut self) {}
}
