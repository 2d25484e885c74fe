//! Installer invocation
//!
//! MSI packages run through `msiexec`, everything else is executed directly.
//! The child process always runs to completion before the next tool starts.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use crate::catalog::{InstallerKind, ToolDescriptor};
use crate::error::{Result, install_failed};

/// Windows Installer service executable
pub const MSIEXEC: &str = "msiexec.exe";

/// Flags added to `msiexec /i` for silent installs
pub const MSI_SILENT_ARGS: &[&str] = &["/quiet", "/norestart"];

/// Flags passed to EXE installers in silent mode when the manifest gives none
pub const DEFAULT_EXE_SILENT_ARGS: &[&str] = &["/S", "/silent", "/quiet"];

/// A fully built installer command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl InstallCommand {
    /// Build the command for `artifact` using the given mechanism
    pub fn build(
        tool: &ToolDescriptor,
        artifact: &Path,
        installer: InstallerKind,
        silent: bool,
    ) -> Self {
        match installer {
            InstallerKind::Msi => {
                let mut args = vec!["/i".to_string(), artifact.display().to_string()];
                if silent {
                    args.extend(MSI_SILENT_ARGS.iter().map(ToString::to_string));
                }
                Self {
                    program: PathBuf::from(MSIEXEC),
                    args,
                }
            }
            InstallerKind::Exe => {
                let args = if silent {
                    match tool.silent_args {
                        Some(ref custom) => custom.split_whitespace().map(String::from).collect(),
                        None => DEFAULT_EXE_SILENT_ARGS
                            .iter()
                            .map(ToString::to_string)
                            .collect(),
                    }
                } else {
                    Vec::new()
                };
                Self {
                    program: artifact.to_path_buf(),
                    args,
                }
            }
        }
    }
}

impl fmt::Display for InstallCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Runs a command to completion and reports its exit code
///
/// The code is `None` when the process was terminated without one (e.g. by a signal).
pub trait CommandRunner: Send + Sync {
    fn run(&self, command: &InstallCommand) -> std::io::Result<Option<i32>>;
}

/// Spawns real processes
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &InstallCommand) -> std::io::Result<Option<i32>> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args);

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            const CREATE_NO_WINDOW: u32 = 0x0800_0000;
            cmd.creation_flags(CREATE_NO_WINDOW);
        }

        let status = cmd.status()?;
        Ok(status.code())
    }
}

/// Launches installers and turns their exit status into a result
pub struct InstallerInvoker {
    runner: Box<dyn CommandRunner>,
}

impl InstallerInvoker {
    pub fn new(runner: Box<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    pub fn system() -> Self {
        Self::new(Box::new(SystemRunner))
    }

    /// Install one tool from `artifact`. Blocks until the installer exits.
    pub fn install(
        &self,
        tool: &ToolDescriptor,
        artifact: &Path,
        installer: InstallerKind,
        silent: bool,
    ) -> Result<()> {
        let command = InstallCommand::build(tool, artifact, installer, silent);
        debug!(tool = %tool.name, command = %command, "running installer");

        match self.runner.run(&command) {
            Ok(Some(0)) => {
                info!(tool = %tool.name, "installer finished");
                Ok(())
            }
            Ok(Some(code)) => Err(install_failed(
                &tool.name,
                format!("installer exited with status {code}"),
            )),
            Ok(None) => Err(install_failed(
                &tool.name,
                "installer was terminated before it finished",
            )),
            Err(e) => Err(install_failed(
                &tool.name,
                format!("could not launch {}: {e}", command.program.display()),
            )),
        }
    }
}
