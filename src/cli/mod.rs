//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - list: List command arguments
//! - show: Show command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::SettingsOverrides;

pub mod completions;
pub mod install;
pub mod list;
pub mod show;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use list::ListArgs;
pub use show::ShowArgs;

/// Toolkit - security and maintenance tool installer
///
/// Pick optional third-party tools from a manifest, then download and install them one by one.
#[derive(Parser, Debug)]
#[command(
    name = "toolkit",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Download and install security and maintenance tools",
    long_about = "Toolkit reads a tool manifest (remote, local file, or built-in defaults), \
                  lets you pick tools by category, and downloads and runs each installer in turn. \
                  One failed tool never stops the rest.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  toolkit list                           \x1b[90m# Show available tools by category\x1b[0m\n   \
                  toolkit install                        \x1b[90m# Pick tools interactively\x1b[0m\n   \
                  toolkit install WinRAR --silent        \x1b[90m# Install one tool without prompts\x1b[0m\n   \
                  toolkit install --category Security    \x1b[90m# Install a whole category\x1b[0m\n   \
                  toolkit show Malwarebytes              \x1b[90m# Show where a tool comes from\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Config file (defaults to <config dir>/toolkit/config.yaml)
    #[arg(long, global = true, env = "TOOLKIT_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Remote manifest URL
    #[arg(long, global = true, env = "TOOLKIT_MANIFEST_URL", value_name = "URL")]
    pub manifest_url: Option<String>,

    /// Local manifest file used when the remote manifest is unavailable
    #[arg(long, global = true, env = "TOOLKIT_MANIFEST", value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Directory holding bundled installers for static tools
    #[arg(long, global = true, env = "TOOLKIT_STATIC_DIR", value_name = "DIR")]
    pub static_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Settings overrides given on the command line or through the environment
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            manifest_url: self.manifest_url.clone(),
            local_manifest: self.manifest.clone(),
            static_dir: self.static_dir.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download and install tools
    Install(InstallArgs),

    /// List available tools
    List(ListArgs),

    /// Show tool information
    Show(ShowArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
