//! Store maintenance commands: clean, reset, add, edit, delete.

use anyhow::Result;

use super::super::{
    args::{AddCommand, CleanCommand, DeleteCommand, EditCommand, ResetCommand},
    context::CommandContext,
};
use super::{CommandResult, CommandSummary, ResetSummary};
use crate::core::{RecordFilter, Triple};

pub fn clean(cmd: CleanCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let removed = ctx.manager().clean_translations()?;

    Ok(CommandResult::new(
        CommandSummary::Clean { removed },
        cmd.common.verbose,
    ))
}

/// Without `--apply` only counts what would be deleted.
pub fn reset(cmd: ResetCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let manager = ctx.manager();
    let count = manager.store().list(&RecordFilter::all())?.len();

    if cmd.apply {
        manager.truncate_translations()?;
    }

    Ok(CommandResult::new(
        CommandSummary::Reset(ResetSummary {
            count,
            is_apply: cmd.apply,
        }),
        cmd.common.verbose,
    ))
}

pub fn add(cmd: AddCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let created = ctx.manager().add_keys(&cmd.group, &cmd.keys)?;

    Ok(CommandResult::new(
        CommandSummary::Add {
            group: cmd.group,
            created,
        },
        cmd.common.verbose,
    ))
}

pub fn edit(cmd: EditCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let triple = Triple::new(cmd.locale, cmd.group, cmd.key);
    let translation = ctx.manager().set_value(&triple, Some(cmd.value))?;

    Ok(CommandResult::new(
        CommandSummary::Edit(translation),
        cmd.common.verbose,
    ))
}

pub fn delete(cmd: DeleteCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let removed = ctx.manager().delete_key(&cmd.group, &cmd.key)?;

    Ok(CommandResult::new(
        CommandSummary::Delete {
            group: cmd.group,
            key: cmd.key,
            removed,
        },
        cmd.common.verbose,
    ))
}
