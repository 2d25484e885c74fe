//! Interactive tool selection and install settings

use inquire::{Confirm, MultiSelect};

use crate::catalog::{Catalog, ToolDescriptor};
use crate::error::Result;
use crate::ui::display::selection_label;

/// Settings chosen interactively after the tool selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallChoices {
    pub silent: bool,
    pub notify: bool,
}

/// Tools in category order: categories by first appearance, tools in manifest order
pub fn grouped_tools(catalog: &Catalog) -> Vec<&ToolDescriptor> {
    catalog
        .categories()
        .into_iter()
        .flat_map(|category| catalog.by_category(category))
        .collect()
}

/// Filter on the category and name part of a label, ignoring the file suffix
#[allow(clippy::ptr_arg)]
pub fn score_tool(input: &str, _opt: &String, label: &str, _idx: usize) -> Option<i64> {
    if input.is_empty() {
        return Some(0);
    }
    let searchable = label.split(" (").next().unwrap_or(label);
    if searchable
        .to_lowercase()
        .contains(&input.trim().to_lowercase())
    {
        Some(0)
    } else {
        None
    }
}

/// Let the user pick tools. Returns an empty list when cancelled.
pub fn select_tools(catalog: &Catalog) -> Result<Vec<ToolDescriptor>> {
    let tools = grouped_tools(catalog);
    let labels: Vec<String> = tools.iter().map(|t| selection_label(t)).collect();

    println!();

    let Some(selection) = MultiSelect::new("Select tools to install", labels)
        .with_page_size(12)
        .with_help_message("  ↑↓ navigate  space select  enter confirm  type to filter  esc cancel")
        .with_scorer(&score_tool)
        .raw_prompt_skippable()?
    else {
        return Ok(vec![]);
    };

    Ok(selection
        .iter()
        .filter_map(|option| tools.get(option.index).map(|t| (*t).clone()))
        .collect())
}

/// Ask for silent and notify settings; flags given on the command line are kept.
pub fn prompt_choices(silent: bool, notify: bool) -> Result<InstallChoices> {
    let silent = silent
        || Confirm::new("Install silently (suppress installer dialogs)?")
            .with_default(true)
            .prompt()?;
    let notify = notify
        || Confirm::new("Show a report when installation completes?")
            .with_default(true)
            .prompt()?;
    Ok(InstallChoices { silent, notify })
}
