//! Running a batch on a dedicated worker thread
//!
//! The caller receives events over a channel and joins the worker for the
//! summary. The worker sends [`BatchEvent::Finished`] last, so a receive loop
//! that stops on it never needs to poll.

use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

use tracing::debug;

use super::{BatchEvent, BatchOptions, BatchOrchestrator, BatchSummary};
use crate::catalog::ToolDescriptor;
use crate::error::{Result, ToolkitError};

/// A running batch
pub struct BatchHandle {
    events: Receiver<BatchEvent>,
    worker: JoinHandle<BatchSummary>,
}

impl BatchHandle {
    /// Events in emission order. The channel closes when the worker exits.
    pub fn events(&self) -> &Receiver<BatchEvent> {
        &self.events
    }

    /// Block until the batch completes and return its summary
    pub fn wait(self) -> Result<BatchSummary> {
        drop(self.events);
        self.worker.join().map_err(|_| ToolkitError::WorkerPanicked)
    }
}

/// Start `tools` on a new thread
pub fn spawn(
    orchestrator: BatchOrchestrator,
    tools: Vec<ToolDescriptor>,
    options: BatchOptions,
) -> Result<BatchHandle> {
    let (tx, rx) = mpsc::channel();
    let worker = thread::Builder::new()
        .name("toolkit-batch".to_string())
        .spawn(move || {
            debug!(tools = tools.len(), "batch worker started");
            orchestrator.run(&tools, &options, &mut |event| {
                // Receiver gone means nobody is watching; keep installing
                let _ = tx.send(event);
            })
        })?;

    Ok(BatchHandle { events: rx, worker })
}
