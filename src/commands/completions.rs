//! Shell completions command

use clap::CommandFactory;

use crate::cli::CompletionsArgs;
use crate::error::Result;

/// Write completions for `args.shell` to stdout
pub fn run(args: CompletionsArgs) -> Result<()> {
    write_completions(args, &mut std::io::stdout().lock());
    Ok(())
}

fn write_completions(args: CompletionsArgs, out: &mut dyn std::io::Write) {
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(args.shell, &mut cmd, "toolkit", out);
}
