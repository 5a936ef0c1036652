//! Read-side commands: list and lookup.

use anyhow::Result;

use super::super::{
    args::{ListCommand, LookupCommand},
    context::CommandContext,
};
use super::{CommandResult, CommandSummary, LookupSummary};
use crate::core::{
    RecordFilter,
    lookup::{Replacements, TranslationLookup},
};

pub fn list(cmd: ListCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let filter = RecordFilter {
        group: cmd.group.clone(),
        locale: cmd.locale.clone(),
        require_value: false,
    };

    let mut records = ctx.manager().list(&filter)?;
    if cmd.missing {
        records.retain(|t| t.value.is_none());
    }

    Ok(CommandResult::new(
        CommandSummary::List(records),
        cmd.common.verbose,
    ))
}

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let replacements: Replacements = cmd.replacements.into_iter().collect();

    let result = ctx.manager().recording_lookup().resolve(
        &cmd.key,
        &replacements,
        cmd.locale.as_deref(),
        !cmd.no_fallback,
    )?;

    Ok(CommandResult::new(
        CommandSummary::Lookup(LookupSummary {
            key: cmd.key,
            result,
        }),
        cmd.common.verbose,
    ))
}
