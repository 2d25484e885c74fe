use tracing::debug;

use crate::catalog::{ManifestResolver, ResolvedCatalog};
use crate::config::Settings;

/// Resolve the catalog from the configured sources
pub fn resolve_catalog(settings: &Settings) -> ResolvedCatalog {
    let resolved = ManifestResolver::from_settings(settings).resolve();
    debug!(
        origin = %resolved.origin,
        tools = resolved.catalog.len(),
        skipped_sources = resolved.failures.len(),
        "catalog ready"
    );
    resolved
}
