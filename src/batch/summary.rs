//! Per-tool outcomes and the batch summary

use super::ToolState;

/// Result of one tool's pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub tool_name: String,
    pub succeeded: bool,
    pub failure_reason: Option<String>,
    /// State the tool was in when it failed
    pub failed_at: Option<ToolState>,
}

impl InstallOutcome {
    pub fn success(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            succeeded: true,
            failure_reason: None,
            failed_at: None,
        }
    }

    pub fn failure(tool_name: impl Into<String>, stage: ToolState, reason: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            succeeded: false,
            failure_reason: Some(reason.into()),
            failed_at: Some(stage),
        }
    }
}

/// Outcomes of a batch, in selection order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub outcomes: Vec<InstallOutcome>,
}

impl BatchSummary {
    pub fn new(outcomes: Vec<InstallOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded).count()
    }

    pub fn failure_count(&self) -> usize {
        self.outcomes.len() - self.success_count()
    }

    pub fn succeeded_names(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| o.succeeded)
            .map(|o| o.tool_name.as_str())
            .collect()
    }

    pub fn failed_names(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| !o.succeeded)
            .map(|o| o.tool_name.as_str())
            .collect()
    }

    pub fn failures(&self) -> impl Iterator<Item = &InstallOutcome> {
        self.outcomes.iter().filter(|o| !o.succeeded)
    }

    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(|o| o.succeeded)
    }

    /// Number of tools the batch ran
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }
}
