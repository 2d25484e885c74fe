use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Bash:\n    toolkit completions bash > ~/.bash_completion.d/toolkit\n\n\
                  Zsh:\n    toolkit completions zsh > ~/.zfunc/_toolkit\n\n\
                  Fish:\n    toolkit completions fish > ~/.config/fish/completions/toolkit.fish\n\n\
                  PowerShell:\n    toolkit completions powershell | Out-String | Invoke-Expression")]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
