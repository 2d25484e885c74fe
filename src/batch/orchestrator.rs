//! Sequential locate → fetch → install over a selection

use tracing::{info, warn};

use super::{BatchEvent, BatchOptions, BatchSummary, InstallOutcome, ToolState};
use crate::catalog::{ToolDescriptor, ToolKind};
use crate::error::{Result, ToolkitError, resolution_failed};
use crate::fetcher::Fetcher;
use crate::invoker::{InstallCommand, InstallerInvoker};
use crate::locator::ToolLocator;

/// Drives each selected tool through the pipeline, one at a time
pub struct BatchOrchestrator {
    locator: ToolLocator,
    fetcher: Box<dyn Fetcher>,
    invoker: InstallerInvoker,
}

impl BatchOrchestrator {
    pub fn new(locator: ToolLocator, fetcher: Box<dyn Fetcher>, invoker: InstallerInvoker) -> Self {
        Self {
            locator,
            fetcher,
            invoker,
        }
    }

    /// Run every tool to a terminal state and summarize.
    ///
    /// `observer` sees every event, ending with [`BatchEvent::Finished`].
    pub fn run(
        &self,
        tools: &[ToolDescriptor],
        options: &BatchOptions,
        observer: &mut dyn FnMut(BatchEvent),
    ) -> BatchSummary {
        let total = tools.len();
        info!(tools = total, work_dir = %options.work_dir.display(), silent = options.silent, dry_run = options.dry_run, "starting batch");

        let mut outcomes = Vec::with_capacity(total);
        for (index, tool) in tools.iter().enumerate() {
            observer(BatchEvent::ToolStarted {
                index,
                total,
                name: tool.name.clone(),
            });

            let outcome = self.run_tool(tool, options, observer);
            if let Some(ref reason) = outcome.failure_reason {
                warn!(tool = %tool.name, "{reason}");
            }
            observer(BatchEvent::ToolFinished(outcome.clone()));
            outcomes.push(outcome);
        }

        let summary = BatchSummary::new(outcomes);
        info!(
            succeeded = summary.success_count(),
            failed = summary.failure_count(),
            "batch finished"
        );
        observer(BatchEvent::Finished);
        summary
    }

    fn run_tool(
        &self,
        tool: &ToolDescriptor,
        options: &BatchOptions,
        observer: &mut dyn FnMut(BatchEvent),
    ) -> InstallOutcome {
        let mut state = ToolState::Pending;
        let result = self.pipeline(tool, options, &mut state, observer);

        let (final_state, outcome) = match result {
            Ok(()) => (ToolState::Succeeded, InstallOutcome::success(&tool.name)),
            Err(e) => (
                ToolState::Failed,
                InstallOutcome::failure(&tool.name, state, e.to_string()),
            ),
        };
        observer(BatchEvent::StateChanged {
            name: tool.name.clone(),
            state: final_state,
        });
        outcome
    }

    fn pipeline(
        &self,
        tool: &ToolDescriptor,
        options: &BatchOptions,
        state: &mut ToolState,
        observer: &mut dyn FnMut(BatchEvent),
    ) -> Result<()> {
        observer(enter(tool, state, ToolState::Locating));
        let target = self.locator.locate(tool, &options.work_dir)?;

        if options.dry_run {
            let command = InstallCommand::build(
                tool,
                target.artifact_path(),
                target.installer,
                options.silent,
            );
            observer(BatchEvent::Planned {
                name: tool.name.clone(),
                source: target.source.to_string(),
                command: command.to_string(),
            });
            return Ok(());
        }

        observer(enter(tool, state, ToolState::Fetching));
        let fetched = self.fetcher.fetch(&target, &mut |progress| {
            observer(BatchEvent::DownloadProgress {
                name: tool.name.clone(),
                progress,
            });
        });
        let artifact = match fetched {
            Ok(path) => path,
            // A static tool with no local copy is only locatable through the hosted fallback
            Err(e @ ToolkitError::Fetch { .. }) if tool.kind == ToolKind::Static => {
                *state = ToolState::Locating;
                return Err(hosted_fallback_failed(tool, &e));
            }
            Err(e) => return Err(e),
        };

        observer(enter(tool, state, ToolState::Installing));
        self.invoker
            .install(tool, &artifact, target.installer, options.silent)
    }
}

fn enter(tool: &ToolDescriptor, state: &mut ToolState, next: ToolState) -> BatchEvent {
    *state = next;
    BatchEvent::StateChanged {
        name: tool.name.clone(),
        state: next,
    }
}

fn hosted_fallback_failed(tool: &ToolDescriptor, cause: &ToolkitError) -> ToolkitError {
    resolution_failed(
        &tool.name,
        format!("no local copy and the hosted fallback is unavailable ({cause})"),
    )
}
