//! Error types and handling for the toolkit installer
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Tool-level failures (`Resolution`, `Fetch`, `Install`) never escape a batch:
//! the orchestrator turns them into an `InstallOutcome` failure reason.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for toolkit operations
#[derive(Error, Diagnostic, Debug)]
pub enum ToolkitError {
    // Manifest errors
    #[error("Failed to load manifest from {source_name}: {reason}")]
    #[diagnostic(
        code(toolkit::manifest::fetch_failed),
        help("The installer falls back to the next manifest source automatically")
    )]
    ManifestFetchFailed { source_name: String, reason: String },

    #[error("Failed to parse manifest: {reason}")]
    #[diagnostic(
        code(toolkit::manifest::parse_failed),
        help("The manifest must be a JSON list of objects with name, url, type and category")
    )]
    ManifestParseFailed { reason: String },

    #[error("Unknown tool type '{kind}' for '{tool}'")]
    #[diagnostic(
        code(toolkit::manifest::invalid_kind),
        help("Tool type must be either 'static' or 'dynamic'")
    )]
    InvalidToolKind { tool: String, kind: String },

    #[error("Unknown installer '{installer}' for '{tool}'")]
    #[diagnostic(
        code(toolkit::manifest::invalid_installer),
        help("Installer must be either 'msi' or 'exe'")
    )]
    InvalidInstallerKind { tool: String, installer: String },

    #[error("Tool '{name}' appears more than once in the manifest")]
    #[diagnostic(code(toolkit::manifest::duplicate_name))]
    DuplicateToolName { name: String },

    // Pipeline errors
    #[error("Could not locate an installer for '{tool}': {reason}")]
    #[diagnostic(code(toolkit::locate::failed))]
    Resolution { tool: String, reason: String },

    #[error("Download failed for {url}: {reason}")]
    #[diagnostic(
        code(toolkit::fetch::failed),
        help("Check your network connection and that the URL is still valid")
    )]
    Fetch { url: String, reason: String },

    #[error("Installation failed for '{tool}': {reason}")]
    #[diagnostic(code(toolkit::install::failed))]
    Install { tool: String, reason: String },

    // Selection errors
    #[error("Tool not found: {name}")]
    #[diagnostic(
        code(toolkit::select::not_found),
        help("Run 'toolkit list' to see the available tools")
    )]
    ToolNotFound { name: String },

    #[error("No tools selected")]
    #[diagnostic(
        code(toolkit::select::empty),
        help("Select at least one application to continue")
    )]
    NoToolsSelected,

    #[error("{failed} of {total} tools failed to install")]
    #[diagnostic(code(toolkit::batch::failures))]
    BatchFailed { failed: usize, total: usize },

    #[error("Batch worker stopped unexpectedly")]
    #[diagnostic(code(toolkit::batch::worker_panicked))]
    WorkerPanicked,

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(toolkit::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(toolkit::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to write file: {path}")]
    #[diagnostic(code(toolkit::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(toolkit::fs::io_error))]
    IoError { message: String },

    // Terminal errors
    #[error("Prompt failed: {message}")]
    #[diagnostic(code(toolkit::ui::prompt_failed))]
    Prompt { message: String },
}

impl From<std::io::Error> for ToolkitError {
    fn from(err: std::io::Error) -> Self {
        ToolkitError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ToolkitError {
    fn from(err: serde_json::Error) -> Self {
        ToolkitError::ManifestParseFailed {
            reason: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ToolkitError {
    fn from(err: serde_yaml::Error) -> Self {
        ToolkitError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for ToolkitError {
    fn from(err: reqwest::Error) -> Self {
        let url = err
            .url()
            .map_or_else(|| "unknown".to_string(), ToString::to_string);
        ToolkitError::Fetch {
            url,
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for ToolkitError {
    fn from(err: inquire::InquireError) -> Self {
        ToolkitError::Prompt {
            message: err.to_string(),
        }
    }
}

/// Creates a resolution error for a tool
pub fn resolution_failed(tool: impl Into<String>, reason: impl Into<String>) -> ToolkitError {
    ToolkitError::Resolution {
        tool: tool.into(),
        reason: reason.into(),
    }
}

/// Creates a fetch error for a URL
pub fn fetch_failed(url: impl Into<String>, reason: impl Into<String>) -> ToolkitError {
    ToolkitError::Fetch {
        url: url.into(),
        reason: reason.into(),
    }
}

/// Creates an install error for a tool
pub fn install_failed(tool: impl Into<String>, reason: impl Into<String>) -> ToolkitError {
    ToolkitError::Install {
        tool: tool.into(),
        reason: reason.into(),
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ToolkitError>;
