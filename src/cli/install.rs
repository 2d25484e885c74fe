use clap::Parser;
use std::path::PathBuf;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Pick tools interactively:\n    toolkit install\n\n\
                   Install named tools silently:\n    toolkit install WinRAR \"VLC Media Player\" --silent\n\n\
                   Install every tool in a category:\n    toolkit install --category Maintenance\n\n\
                   Preview without downloading:\n    toolkit install --all --dry-run")]
pub struct InstallArgs {
    /// Tool names to install (case-insensitive). If omitted, shows an interactive menu
    pub names: Vec<String>,

    /// Install every tool in the catalog
    #[arg(long, conflicts_with = "names")]
    pub all: bool,

    /// Only consider tools in this category
    #[arg(long, short = 'c', value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Directory to download installers into (defaults to your Downloads folder)
    #[arg(long, short = 'd', value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Pass silent-install flags to each installer
    #[arg(long, short = 's')]
    pub silent: bool,

    /// Print a completion report when the batch finishes
    #[arg(long)]
    pub notify: bool,

    /// Show what would be downloaded and run without doing it
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with an error if any tool fails
    #[arg(long)]
    pub strict: bool,
}

impl InstallArgs {
    /// Whether the selection is given on the command line
    pub fn has_explicit_selection(&self) -> bool {
        self.all || !self.names.is_empty() || self.category.is_some()
    }
}
