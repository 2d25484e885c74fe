//! Install command implementation
//!
//! Selection comes from the command line (names, `--all`, `--category`) or,
//! when none is given, from an interactive menu. The batch then runs on a
//! worker thread while this thread renders its events.

use console::Style;
use tracing::debug;

use crate::batch::{self, BatchEvent, BatchOptions, BatchOrchestrator, BatchSummary};
use crate::catalog::{Catalog, ToolDescriptor};
use crate::cli::InstallArgs;
use crate::commands::helpers::resolve_catalog;
use crate::commands::menu::{self, InstallChoices};
use crate::config::Settings;
use crate::error::{Result, ToolkitError};
use crate::fetcher::HttpFetcher;
use crate::invoker::InstallerInvoker;
use crate::locator::ToolLocator;
use crate::ui::display::{display_plan, display_summary};
use crate::ui::{InteractiveProgressReporter, ProgressReporter, SilentProgressReporter};

/// Run install command
pub fn run(settings: &Settings, args: InstallArgs) -> Result<()> {
    let resolved = resolve_catalog(settings);

    let (tools, choices) = if args.has_explicit_selection() {
        let tools = select_from_args(&resolved.catalog, &args)?;
        (
            tools,
            InstallChoices {
                silent: args.silent,
                notify: args.notify,
            },
        )
    } else {
        let tools = menu::select_tools(&resolved.catalog)?;
        if tools.is_empty() {
            return Err(ToolkitError::NoToolsSelected);
        }
        let choices = menu::prompt_choices(args.silent, args.notify)?;
        (tools, choices)
    };

    let options = BatchOptions {
        work_dir: args
            .dir
            .clone()
            .unwrap_or_else(|| settings.resolved_download_dir()),
        silent: choices.silent,
        dry_run: args.dry_run,
    };
    debug!(?options, tools = tools.len(), "install options");

    let summary = run_batch(settings, tools, options)?;

    if args.dry_run {
        println!(
            "{}",
            Style::new().bold().apply_to(format!(
                "Dry run: {} of {} tools located, nothing downloaded or installed",
                summary.success_count(),
                summary.total()
            ))
        );
        for outcome in summary.failures() {
            println!(
                "  {} {}: {}",
                Style::new().red().apply_to("✗"),
                outcome.tool_name,
                outcome.failure_reason.as_deref().unwrap_or("unknown error")
            );
        }
    } else {
        display_summary(&summary, choices.notify);
    }

    if args.strict && !summary.all_succeeded() {
        return Err(ToolkitError::BatchFailed {
            failed: summary.failure_count(),
            total: summary.total(),
        });
    }

    Ok(())
}

/// Resolve tool names and filters given on the command line.
///
/// `--category` narrows the pool that names are looked up in. Repeated
/// names select a tool once; selection order follows the arguments.
pub fn select_from_args(catalog: &Catalog, args: &InstallArgs) -> Result<Vec<ToolDescriptor>> {
    let in_pool = |tool: &ToolDescriptor| {
        args.category
            .as_deref()
            .is_none_or(|category| tool.in_category(category))
    };

    let selected: Vec<ToolDescriptor> = if args.names.is_empty() {
        catalog
            .tools()
            .iter()
            .filter(|&t| in_pool(t))
            .cloned()
            .collect()
    } else {
        let mut selected: Vec<ToolDescriptor> = Vec::with_capacity(args.names.len());
        for name in &args.names {
            let tool = catalog
                .find(name)
                .filter(|&t| in_pool(t))
                .ok_or_else(|| ToolkitError::ToolNotFound { name: name.clone() })?;
            if !selected.iter().any(|s| s.name == tool.name) {
                selected.push(tool.clone());
            }
        }
        selected
    };

    if selected.is_empty() {
        return Err(ToolkitError::NoToolsSelected);
    }
    Ok(selected)
}

fn run_batch(
    settings: &Settings,
    tools: Vec<ToolDescriptor>,
    options: BatchOptions,
) -> Result<BatchSummary> {
    let orchestrator = BatchOrchestrator::new(
        ToolLocator::from_settings(settings),
        Box::new(HttpFetcher::new(settings.download_timeout())?),
        InstallerInvoker::system(),
    );

    let mut reporter: Box<dyn ProgressReporter> = if options.dry_run {
        Box::new(SilentProgressReporter)
    } else {
        Box::new(InteractiveProgressReporter::new(tools.len() as u64))
    };

    let handle = batch::spawn(orchestrator, tools, options)?;
    for event in handle.events() {
        if let BatchEvent::Planned {
            ref name,
            ref source,
            ref command,
        } = event
        {
            display_plan(name, source, command);
        }
        reporter.handle(&event);
        if matches!(event, BatchEvent::Finished) {
            break;
        }
    }

    handle.wait()
}
