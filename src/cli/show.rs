use clap::Parser;

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show a tool:\n    toolkit show WinDirStat\n\n\
                  Names with spaces:\n    toolkit show \"VLC Media Player\"")]
pub struct ShowArgs {
    /// Tool name (case-insensitive)
    pub name: String,
}
