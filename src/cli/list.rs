use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List all tools:\n    toolkit list\n\n\
                  List one category:\n    toolkit list --category Security\n\n\
                  Use a local manifest:\n    toolkit --manifest ./tools.json list")]
pub struct ListArgs {
    /// Only show tools in this category (case-insensitive)
    #[arg(long, short = 'c', value_name = "CATEGORY")]
    pub category: Option<String>,
}
