//! Tool catalog
//!
//! This module handles:
//! - The `ToolDescriptor` domain type and its enumerations
//! - Parsing manifest documents into descriptors (see [`manifest`])
//! - The built-in fallback catalog (see [`defaults`])
//! - Three-tier catalog resolution (see [`resolver`])
//!
//! Descriptors are immutable once the resolver returns them. Category
//! grouping is a view computed on demand, never stored.

pub mod defaults;
pub mod manifest;
pub mod resolver;

use std::fmt;

use tracing::warn;

use crate::path_utils;

pub use resolver::{CatalogOrigin, ManifestResolver, ResolvedCatalog};

/// Where a tool's installer comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    /// Ships alongside the project (static dir or the project's hosted files)
    Static,
    /// Downloaded straight from the vendor's URL
    Dynamic,
}

impl ToolKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ToolKind::Static => "static",
            ToolKind::Dynamic => "dynamic",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Installation mechanism for a downloaded artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallerKind {
    /// Windows Installer package, run through `msiexec`
    Msi,
    /// Self-contained executable installer
    Exe,
}

impl InstallerKind {
    /// File extension (with dot) used for the downloaded artifact
    pub fn extension(self) -> &'static str {
        match self {
            InstallerKind::Msi => ".msi",
            InstallerKind::Exe => ".exe",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InstallerKind::Msi => "msi",
            InstallerKind::Exe => "exe",
        }
    }
}

impl fmt::Display for InstallerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One installable application from the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDescriptor {
    /// Unique display name
    pub name: String,
    /// URL (dynamic) or relative path / file name (static)
    pub source_location: String,
    pub kind: ToolKind,
    /// Free-form grouping label, e.g. "Security"
    pub category: String,
    /// Overrides the default silent flags for EXE installers
    pub silent_args: Option<String>,
    /// Explicit installer mechanism; inferred from the source suffix when absent
    pub installer: Option<InstallerKind>,
}

impl ToolDescriptor {
    pub fn new(
        name: impl Into<String>,
        source_location: impl Into<String>,
        kind: ToolKind,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            source_location: source_location.into(),
            kind,
            category: category.into(),
            silent_args: None,
            installer: None,
        }
    }

    #[must_use]
    pub fn with_silent_args(mut self, args: impl Into<String>) -> Self {
        self.silent_args = Some(args.into());
        self
    }

    #[must_use]
    pub fn with_installer(mut self, installer: InstallerKind) -> Self {
        self.installer = Some(installer);
        self
    }

    /// Installer mechanism, and whether it had to be guessed from the source suffix
    pub fn installer_kind(&self) -> (InstallerKind, bool) {
        match self.installer {
            Some(kind) => (kind, false),
            None if path_utils::has_msi_suffix(&self.source_location) => {
                (InstallerKind::Msi, true)
            }
            None => (InstallerKind::Exe, true),
        }
    }

    /// Installer mechanism, warning when it was inferred rather than declared
    pub fn resolve_installer_kind(&self) -> InstallerKind {
        let (kind, inferred) = self.installer_kind();
        if inferred {
            warn!(
                tool = %self.name,
                source = %self.source_location,
                installer = %kind,
                "installer type not declared in manifest, inferred from source suffix"
            );
        }
        kind
    }

    /// File name used for the downloaded artifact, e.g. `VLC_Media_Player.exe`
    pub fn artifact_file_name(&self, installer: InstallerKind) -> String {
        format!(
            "{}{}",
            path_utils::make_file_stem(&self.name),
            installer.extension()
        )
    }

    /// Case-insensitive category match
    pub fn in_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category.trim())
    }
}

/// The list of installable tools for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    tools: Vec<ToolDescriptor>,
}

impl Catalog {
    /// Build a catalog. Name uniqueness is checked by the manifest parser.
    pub fn new(tools: Vec<ToolDescriptor>) -> Self {
        Self { tools }
    }

    pub fn tools(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Find a tool by name (case-insensitive)
    pub fn find(&self, name: &str) -> Option<&ToolDescriptor> {
        let name = name.trim();
        self.tools.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Tools in one category, in manifest order
    pub fn by_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a ToolDescriptor> + 'a {
        self.tools.iter().filter(move |t| t.in_category(category))
    }

    /// Distinct categories in first-seen order, compared case-insensitively
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for tool in &self.tools {
            if !seen.iter().any(|c| c.eq_ignore_ascii_case(&tool.category)) {
                seen.push(tool.category.as_str());
            }
        }
        seen
    }
}
