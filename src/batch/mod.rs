//! Batch installation
//!
//! This module handles:
//! - The per-tool state machine (`PENDING → LOCATING → FETCHING → INSTALLING →
//!   SUCCEEDED | FAILED`)
//! - Running selected tools strictly one after another (see [`orchestrator`])
//! - Collecting outcomes into a [`BatchSummary`] (see [`summary`])
//! - Running a batch off the caller's thread with a completion signal (see [`worker`])
//!
//! A tool failure is recorded in its outcome and never stops the batch.

pub mod orchestrator;
pub mod summary;
pub mod worker;

use std::fmt;
use std::path::PathBuf;

use crate::fetcher::DownloadProgress;

pub use orchestrator::BatchOrchestrator;
pub use summary::{BatchSummary, InstallOutcome};
pub use worker::spawn;

/// Pipeline state of one tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolState {
    Pending,
    Locating,
    Fetching,
    Installing,
    Succeeded,
    Failed,
}

impl ToolState {
    pub fn is_terminal(self) -> bool {
        matches!(self, ToolState::Succeeded | ToolState::Failed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ToolState::Pending => "pending",
            ToolState::Locating => "locating",
            ToolState::Fetching => "fetching",
            ToolState::Installing => "installing",
            ToolState::Succeeded => "succeeded",
            ToolState::Failed => "failed",
        }
    }
}

impl fmt::Display for ToolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for one batch run
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Directory downloaded installers are written to
    pub work_dir: PathBuf,
    /// Pass silent-install flags to installers
    pub silent: bool,
    /// Locate only; report what would be fetched and run
    pub dry_run: bool,
}

/// Progress notifications emitted while a batch runs
#[derive(Debug, Clone)]
pub enum BatchEvent {
    ToolStarted {
        index: usize,
        total: usize,
        name: String,
    },
    StateChanged {
        name: String,
        state: ToolState,
    },
    DownloadProgress {
        name: String,
        progress: DownloadProgress,
    },
    /// Dry run only: where the artifact would come from and the command that would run
    Planned {
        name: String,
        source: String,
        command: String,
    },
    ToolFinished(InstallOutcome),
    /// Always the last event of a batch; the summary comes from joining the worker
    Finished,
}
