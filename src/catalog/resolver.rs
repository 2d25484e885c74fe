//! Catalog resolution with fallback tiers
//!
//! Tiers are tried in order, first success wins:
//! 1. Remote manifest URL (short timeout)
//! 2. Local manifest file
//! 3. Built-in catalog
//!
//! A failing tier is logged and recorded, never returned to the caller.
//! A tier that parses to an empty list counts as failed so the result is
//! never empty.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info, warn};

use super::Catalog;
use super::defaults::builtin_catalog;
use super::manifest::parse_manifest;
use crate::config::Settings;
use crate::error::{Result, ToolkitError};

/// Which tier produced the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOrigin {
    Remote(String),
    Local(PathBuf),
    Builtin,
}

impl fmt::Display for CatalogOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogOrigin::Remote(url) => write!(f, "remote manifest ({url})"),
            CatalogOrigin::Local(path) => write!(f, "local manifest ({})", path.display()),
            CatalogOrigin::Builtin => f.write_str("built-in defaults"),
        }
    }
}

/// Result of catalog resolution
#[derive(Debug)]
pub struct ResolvedCatalog {
    pub catalog: Catalog,
    pub origin: CatalogOrigin,
    /// Failures of the tiers tried before `origin`, in order
    pub failures: Vec<ToolkitError>,
}

/// Resolves the tool catalog from remote, local, then built-in sources
#[derive(Debug, Clone)]
pub struct ManifestResolver {
    remote_url: Option<String>,
    local_path: Option<PathBuf>,
    timeout: Duration,
}

impl ManifestResolver {
    pub fn new(remote_url: Option<String>, local_path: Option<PathBuf>, timeout: Duration) -> Self {
        Self {
            remote_url: remote_url.filter(|url| !url.trim().is_empty()),
            local_path,
            timeout,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            Some(settings.manifest_url.clone()),
            Some(settings.local_manifest.clone()),
            settings.manifest_timeout(),
        )
    }

    /// Resolve the catalog. Never fails: falls back to the built-in catalog.
    pub fn resolve(&self) -> ResolvedCatalog {
        let mut failures = Vec::new();

        if let Some(ref url) = self.remote_url {
            match self.fetch_remote(url) {
                Ok(catalog) => {
                    info!(url = %url, tools = catalog.len(), "loaded tools from remote manifest");
                    return ResolvedCatalog {
                        catalog,
                        origin: CatalogOrigin::Remote(url.clone()),
                        failures,
                    };
                }
                Err(e) => {
                    warn!("{e}");
                    failures.push(e);
                }
            }
        }

        if let Some(ref path) = self.local_path {
            match read_local(path) {
                Ok(catalog) => {
                    info!(path = %path.display(), tools = catalog.len(), "loaded tools from local manifest");
                    return ResolvedCatalog {
                        catalog,
                        origin: CatalogOrigin::Local(path.clone()),
                        failures,
                    };
                }
                Err(e) => {
                    warn!("{e}");
                    failures.push(e);
                }
            }
        }

        info!("using built-in tool catalog");
        ResolvedCatalog {
            catalog: builtin_catalog(),
            origin: CatalogOrigin::Builtin,
            failures,
        }
    }

    fn fetch_remote(&self, url: &str) -> Result<Catalog> {
        debug!(url = %url, timeout = ?self.timeout, "fetching remote manifest");
        let fail = |reason: String| ToolkitError::ManifestFetchFailed {
            source_name: url.to_string(),
            reason,
        };

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| fail(e.to_string()))?;
        let body = client
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(reqwest::blocking::Response::text)
            .map_err(|e| fail(e.to_string()))?;

        let catalog = parse_manifest(&body).map_err(|e| fail(e.to_string()))?;
        if catalog.is_empty() {
            return Err(fail("manifest lists no tools".to_string()));
        }
        Ok(catalog)
    }
}

fn read_local(path: &Path) -> Result<Catalog> {
    let fail = |reason: String| ToolkitError::ManifestFetchFailed {
        source_name: path.display().to_string(),
        reason,
    };

    let content = std::fs::read_to_string(path).map_err(|e| fail(e.to_string()))?;
    let catalog = parse_manifest(&content).map_err(|e| fail(e.to_string()))?;
    if catalog.is_empty() {
        return Err(fail("manifest lists no tools".to_string()));
    }
    Ok(catalog)
}
