//! Show command implementation

use tracing::debug;

use crate::cli::ShowArgs;
use crate::commands::helpers::resolve_catalog;
use crate::config::Settings;
use crate::error::{Result, ToolkitError};
use crate::locator::ToolLocator;
use crate::ui::display::display_tool;

/// Run show command
pub fn run(settings: &Settings, args: ShowArgs) -> Result<()> {
    let resolved = resolve_catalog(settings);
    let tool = resolved
        .catalog
        .find(&args.name)
        .ok_or_else(|| ToolkitError::ToolNotFound {
            name: args.name.clone(),
        })?;

    let locator = ToolLocator::from_settings(settings);
    let target = match locator.locate(tool, &settings.resolved_download_dir()) {
        Ok(target) => Some(target),
        Err(e) => {
            debug!("{e}");
            None
        }
    };

    display_tool(tool, target.as_ref());
    Ok(())
}
