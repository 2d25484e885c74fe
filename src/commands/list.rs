//! List command implementation
//!
//! Prints the resolved catalog grouped by category.

use crate::cli::ListArgs;
use crate::commands::helpers::resolve_catalog;
use crate::config::Settings;
use crate::error::Result;
use crate::ui::display::display_catalog;

/// Run list command
pub fn run(settings: &Settings, args: ListArgs) -> Result<()> {
    let resolved = resolve_catalog(settings);
    display_catalog(
        &resolved.catalog,
        &resolved.origin,
        args.category.as_deref(),
    );
    Ok(())
}
