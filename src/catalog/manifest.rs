//! Manifest document (tools.json) parsing
//!
//! The manifest is a JSON list of records:
//!
//! ```json
//! [
//!   {
//!     "name": "Malwarebytes",
//!     "url": "https://data-cdn.mbamupdates.com/web/mb-windows/MBSetup.exe",
//!     "type": "dynamic",
//!     "category": "Security",
//!     "silent_args": "/VERYSILENT /SUPPRESSMSGBOXES /NORESTART",
//!     "installer": "exe"
//!   }
//! ]
//! ```
//!
//! `silent_args` and `installer` are optional. An unknown `type` or
//! `installer`, or a repeated name, rejects the whole document.

use std::collections::HashSet;

use serde::Deserialize;

use super::{Catalog, InstallerKind, ToolDescriptor, ToolKind};
use crate::error::{Result, ToolkitError};

/// One record as it appears in the manifest
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestRecord {
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    #[serde(default)]
    pub silent_args: Option<String>,
    #[serde(default)]
    pub installer: Option<String>,
}

impl ManifestRecord {
    fn into_descriptor(self) -> Result<ToolDescriptor> {
        let kind = parse_kind(&self.name, &self.kind)?;
        let installer = self
            .installer
            .as_deref()
            .map(|raw| parse_installer(&self.name, raw))
            .transpose()?;
        let silent_args = self
            .silent_args
            .map(|args| args.trim().to_string())
            .filter(|args| !args.is_empty());

        Ok(ToolDescriptor {
            name: self.name.trim().to_string(),
            source_location: self.url.trim().to_string(),
            kind,
            category: self.category.trim().to_string(),
            silent_args,
            installer,
        })
    }
}

fn parse_kind(tool: &str, raw: &str) -> Result<ToolKind> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "static" => Ok(ToolKind::Static),
        "dynamic" => Ok(ToolKind::Dynamic),
        _ => Err(ToolkitError::InvalidToolKind {
            tool: tool.to_string(),
            kind: raw.to_string(),
        }),
    }
}

fn parse_installer(tool: &str, raw: &str) -> Result<InstallerKind> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "msi" => Ok(InstallerKind::Msi),
        "exe" => Ok(InstallerKind::Exe),
        _ => Err(ToolkitError::InvalidInstallerKind {
            tool: tool.to_string(),
            installer: raw.to_string(),
        }),
    }
}

/// Parse and validate a manifest document into a catalog
pub fn parse_manifest(json: &str) -> Result<Catalog> {
    let records: Vec<ManifestRecord> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    let mut tools = Vec::with_capacity(records.len());
    for record in records {
        let tool = record.into_descriptor()?;
        if tool.name.is_empty() {
            return Err(ToolkitError::ManifestParseFailed {
                reason: "tool record with an empty name".to_string(),
            });
        }
        if !seen.insert(tool.name.to_lowercase()) {
            return Err(ToolkitError::DuplicateToolName { name: tool.name });
        }
        tools.push(tool);
    }

    Ok(Catalog::new(tools))
}
