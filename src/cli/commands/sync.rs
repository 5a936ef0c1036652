//! File <-> store synchronisation commands: import, find, export.

use anyhow::{Context, Result};

use super::super::{
    args::{ExportCommand, FindCommand, ImportCommand},
    context::CommandContext,
};
use super::{CommandResult, CommandSummary, ExportReport, ImportReport};

pub fn import(cmd: ImportCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let summary = ctx
        .manager()
        .import_translations(cmd.replace)
        .context("Import failed")?;

    Ok(CommandResult::new(
        CommandSummary::Import(ImportReport {
            summary,
            replace: cmd.replace,
        }),
        cmd.common.verbose,
    ))
}

pub fn find(cmd: FindCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let root = cmd.path.clone().unwrap_or_else(|| ctx.source_root());
    let summary = ctx
        .manager()
        .find_translations(&root)
        .with_context(|| format!("Scanning {} failed", root.display()))?;

    Ok(CommandResult::new(
        CommandSummary::Find(summary),
        cmd.common.verbose,
    ))
}

pub fn export(cmd: ExportCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let summary = ctx
        .manager()
        .export_translations(&cmd.group)
        .with_context(|| format!("Export of '{}' failed", cmd.group))?;

    Ok(CommandResult::new(
        CommandSummary::Export(ExportReport {
            summary,
            group: cmd.group,
        }),
        cmd.common.verbose,
    ))
}
