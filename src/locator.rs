//! Tool locator: decides where a tool's installer comes from
//!
//! Static tools prefer a file already present in the static directory and
//! fall back to the project's hosted copy. Dynamic tools always download
//! from the vendor URL in the manifest.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::catalog::{InstallerKind, ToolDescriptor, ToolKind};
use crate::config::Settings;
use crate::error::{Result, resolution_failed};
use crate::path_utils;

/// Where an artifact will be read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactSource {
    /// Already on disk; used in place, nothing is downloaded
    Local(PathBuf),
    /// Downloaded from this URL into the destination
    Remote(String),
}

impl fmt::Display for ArtifactSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactSource::Local(path) => write!(f, "{} (local)", path.display()),
            ArtifactSource::Remote(url) => f.write_str(url),
        }
    }
}

/// A reachable source plus the local path the installer will run from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    pub tool: String,
    pub source: ArtifactSource,
    /// Download destination inside the work directory
    pub destination: PathBuf,
    pub installer: InstallerKind,
}

impl DownloadTarget {
    /// Path of the artifact after fetching: the local file itself, or the destination
    pub fn artifact_path(&self) -> &Path {
        match self.source {
            ArtifactSource::Local(ref path) => path,
            ArtifactSource::Remote(_) => &self.destination,
        }
    }

    pub fn needs_download(&self) -> bool {
        matches!(self.source, ArtifactSource::Remote(_))
    }
}

/// Lookup locations for static artifacts
#[derive(Debug, Clone)]
pub struct ToolLocator {
    static_dir: PathBuf,
    static_base_url: Option<String>,
}

impl ToolLocator {
    /// `static_base_url` of `None` disables the hosted fallback for static tools.
    pub fn new(static_dir: impl Into<PathBuf>, static_base_url: Option<String>) -> Self {
        Self {
            static_dir: static_dir.into(),
            static_base_url: static_base_url.filter(|url| !url.trim().is_empty()),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.static_dir.clone(),
            Some(settings.static_base_url.clone()),
        )
    }

    /// Resolve the source and destination for one tool. Performs no I/O beyond
    /// checking the static directory.
    pub fn locate(&self, tool: &ToolDescriptor, work_dir: &Path) -> Result<DownloadTarget> {
        let installer = tool.resolve_installer_kind();
        let destination = work_dir.join(tool.artifact_file_name(installer));

        let source = match tool.kind {
            ToolKind::Dynamic => {
                if tool.source_location.trim().is_empty() {
                    return Err(resolution_failed(&tool.name, "manifest has no download URL"));
                }
                ArtifactSource::Remote(tool.source_location.trim().to_string())
            }
            ToolKind::Static => self.locate_static(tool)?,
        };

        debug!(tool = %tool.name, source = %source, destination = %destination.display(), "located artifact");
        Ok(DownloadTarget {
            tool: tool.name.clone(),
            source,
            destination,
            installer,
        })
    }

    fn locate_static(&self, tool: &ToolDescriptor) -> Result<ArtifactSource> {
        let Some(basename) = path_utils::source_basename(&tool.source_location) else {
            return Err(resolution_failed(
                &tool.name,
                format!("'{}' does not name a file", tool.source_location),
            ));
        };

        let local = self.static_dir.join(basename);
        if local.is_file() {
            return Ok(ArtifactSource::Local(local));
        }

        match self.static_base_url {
            Some(ref base) => Ok(ArtifactSource::Remote(path_utils::join_url(base, basename))),
            None => Err(resolution_failed(
                &tool.name,
                format!(
                    "{basename} not found in {} and no hosted fallback is configured",
                    self.static_dir.display()
                ),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolkitError;
    use crate::test_fixtures::{create_temp_dir, dynamic_tool, static_tool, write_file};

    #[test]
    fn test_static_tool_found_locally() {
        let temp = create_temp_dir();
        let static_dir = temp.path().join("static");
        let local = write_file(&static_dir, "WinDirStat-x64.msi", b"msi");
        let locator = ToolLocator::new(&static_dir, Some("http://127.0.0.1:1/static".into()));

        let target = locator
            .locate(&static_tool("WinDirStat", "WinDirStat-x64.msi"), temp.path())
            .unwrap();

        assert_eq!(target.source, ArtifactSource::Local(local.clone()));
        assert!(!target.needs_download());
        assert_eq!(target.artifact_path(), local.as_path());
        assert_eq!(target.installer, InstallerKind::Msi);
    }

    #[test]
    fn test_static_tool_falls_back_to_hosted_copy() {
        let temp = create_temp_dir();
        let locator = ToolLocator::new(
            temp.path().join("static"),
            Some("https://raw.example.com/static/".into()),
        );

        let target = locator
            .locate(&static_tool("WinRAR", "winrar-x64.exe"), temp.path())
            .unwrap();

        assert_eq!(
            target.source,
            ArtifactSource::Remote("https://raw.example.com/static/winrar-x64.exe".into())
        );
        assert_eq!(target.destination, temp.path().join("WinRAR.exe"));
        assert!(target.needs_download());
    }

    #[test]
    fn test_static_tool_without_any_source_fails() {
        let temp = create_temp_dir();
        let locator = ToolLocator::new(temp.path().join("static"), None);

        let result = locator.locate(&static_tool("WinDirStat", "WinDirStat-x64.msi"), temp.path());
        assert!(matches!(
            result,
            Err(ToolkitError::Resolution { ref tool, .. }) if tool == "WinDirStat"
        ));
    }

    #[test]
    fn test_static_tool_without_basename_fails() {
        let temp = create_temp_dir();
        let locator = ToolLocator::new(temp.path(), Some("https://raw.example.com".into()));
        let tool = ToolDescriptor::new("Broken", "static/", ToolKind::Static, "X");

        assert!(matches!(
            locator.locate(&tool, temp.path()),
            Err(ToolkitError::Resolution { .. })
        ));
    }

    #[test]
    fn test_dynamic_tool_targets_source_location() {
        let temp = create_temp_dir();
        // A same-named file in the static dir must not short-circuit a dynamic tool
        write_file(&temp.path().join("static"), "a.exe", b"stale");
        let locator = ToolLocator::new(temp.path().join("static"), None);

        let target = locator
            .locate(&dynamic_tool("Tool A", "http://x/a.exe"), temp.path())
            .unwrap();

        assert_eq!(target.source, ArtifactSource::Remote("http://x/a.exe".into()));
        assert_eq!(target.destination, temp.path().join("Tool_A.exe"));
        assert_eq!(target.installer, InstallerKind::Exe);
    }

    #[test]
    fn test_extension_follows_inferred_installer() {
        let temp = create_temp_dir();
        let locator = ToolLocator::new(temp.path(), None);

        let msi = locator
            .locate(&dynamic_tool("Agent", "https://x/agent.MSI?v=2"), temp.path())
            .unwrap();
        assert_eq!(msi.installer, InstallerKind::Msi);
        assert!(msi.destination.to_string_lossy().ends_with("Agent.msi"));

        let bare = locator
            .locate(&dynamic_tool("Agent", "https://x/download"), temp.path())
            .unwrap();
        assert_eq!(bare.installer, InstallerKind::Exe);
        assert!(bare.destination.to_string_lossy().ends_with("Agent.exe"));
    }

    #[test]
    fn test_declared_installer_sets_extension() {
        let temp = create_temp_dir();
        let locator = ToolLocator::new(temp.path(), None);
        let tool = dynamic_tool("Agent", "https://x/download").with_installer(InstallerKind::Msi);

        let target = locator.locate(&tool, temp.path()).unwrap();
        assert_eq!(target.destination, temp.path().join("Agent.msi"));
    }
}
