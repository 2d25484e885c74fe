//! Display functions for the catalog, single tools and batch results

use console::Style;

use crate::batch::BatchSummary;
use crate::catalog::{Catalog, CatalogOrigin, ToolDescriptor};
use crate::locator::DownloadTarget;
use crate::path_utils;

macro_rules! display_field {
    ($label:expr, $value:expr) => {
        println!("    {} {}", Style::new().bold().apply_to($label), $value);
    };
}

/// Print the catalog grouped by category, optionally only one category
pub fn display_catalog(catalog: &Catalog, origin: &CatalogOrigin, category: Option<&str>) {
    let categories: Vec<&str> = match category {
        Some(wanted) => catalog
            .categories()
            .into_iter()
            .filter(|c| c.eq_ignore_ascii_case(wanted.trim()))
            .collect(),
        None => catalog.categories(),
    };

    if categories.is_empty() {
        println!("No tools found.");
        return;
    }

    println!(
        "Available tools ({}):",
        Style::new().dim().apply_to(origin.to_string())
    );
    for category in categories {
        println!();
        println!("{}", Style::new().bold().green().apply_to(category));
        for tool in catalog.by_category(category) {
            println!(
                "  {} {}",
                Style::new().bold().yellow().apply_to(&tool.name),
                Style::new().dim().apply_to(format!("[{}]", tool.kind))
            );
        }
    }
}

/// Print one tool and where it would be installed from
pub fn display_tool(tool: &ToolDescriptor, target: Option<&DownloadTarget>) {
    let (installer, inferred) = tool.installer_kind();

    println!("  {}", Style::new().bold().yellow().apply_to(&tool.name));
    display_field!("Category:", &tool.category);
    display_field!("Type:", tool.kind);
    display_field!("Source:", &tool.source_location);
    if inferred {
        display_field!(
            "Installer:",
            format!(
                "{installer} {}",
                Style::new().dim().apply_to("(inferred from source suffix)")
            )
        );
    } else {
        display_field!("Installer:", installer);
    }
    if let Some(ref args) = tool.silent_args {
        display_field!("Silent args:", args);
    }
    display_field!(
        "File name:",
        tool.artifact_file_name(installer)
    );

    if let Some(target) = target {
        let from = if target.needs_download() {
            target.source.to_string()
        } else {
            format!("{} {}", target.source, Style::new().dim().apply_to("(no download)"))
        };
        display_field!("Fetch from:", from);
    }
}

/// Print the dry-run plan for one tool
pub fn display_plan(name: &str, source: &str, command: &str) {
    println!("  {}", Style::new().bold().yellow().apply_to(name));
    display_field!("Fetch from:", source);
    display_field!("Would run:", command);
}

/// One-line result of a batch, naming the tools that failed
pub fn summary_line(summary: &BatchSummary) -> String {
    let line = format!(
        "{} installed, {} failed",
        summary.success_count(),
        summary.failure_count()
    );
    let failed = summary.failed_names();
    if failed.is_empty() {
        line
    } else {
        format!("{line} ({})", failed.join(", "))
    }
}

/// Print the batch result; `detailed` adds the completion report
pub fn display_summary(summary: &BatchSummary, detailed: bool) {
    let line = summary_line(summary);
    if summary.all_succeeded() {
        println!("{}", Style::new().green().bold().apply_to(line));
    } else {
        println!("{}", Style::new().yellow().bold().apply_to(line));
    }

    if !detailed {
        return;
    }

    println!();
    println!("{}", Style::new().bold().apply_to("Installation report"));
    for name in summary.succeeded_names() {
        println!("  {} {}", Style::new().green().apply_to("✓"), name);
    }
    for outcome in summary.failures() {
        println!(
            "  {} {}: {}",
            Style::new().red().apply_to("✗"),
            outcome.tool_name,
            outcome.failure_reason.as_deref().unwrap_or("unknown error")
        );
    }
}

/// Label for one tool in the interactive selection list
pub fn selection_label(tool: &ToolDescriptor) -> String {
    match path_utils::source_basename(&tool.source_location) {
        Some(file) => format!("[{}] {} ({file})", tool.category, tool.name),
        None => format!("[{}] {}", tool.category, tool.name),
    }
}
