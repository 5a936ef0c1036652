//! Report formatting and printing utilities.
//!
//! Kept apart from the engine so langsync can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, ExportReport, ImportReport, InitSummary, LookupSummary,
    ResetSummary,
};
use crate::core::{Status, Translation, scanner::FindSummary};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Init(init) => print_init(init, writer),
        CommandSummary::Import(import) => print_import(import, writer),
        CommandSummary::Find(find) => print_find(find, writer),
        CommandSummary::Export(export) => print_export(export, result.verbose, writer),
        CommandSummary::Clean { removed } => success(
            writer,
            format!("Removed {} untranslated {}", removed, plural(*removed, "key", "keys")),
        ),
        CommandSummary::Reset(reset) => print_reset(reset, writer),
        CommandSummary::Add { group, created } => success(
            writer,
            format!(
                "Added {} {} to group '{}'",
                created,
                plural(*created, "record", "records"),
                group
            ),
        ),
        CommandSummary::Edit(translation) => success(
            writer,
            format!(
                "Set {} = \"{}\"",
                translation.triple(),
                translation.value.as_deref().unwrap_or_default()
            ),
        ),
        CommandSummary::Delete {
            group,
            key,
            removed,
        } => {
            if *removed == 0 {
                let _ = writeln!(
                    writer,
                    "{} No translations found for '{}.{}'",
                    FAILURE_MARK.yellow(),
                    group,
                    key
                );
            } else {
                success(
                    writer,
                    format!(
                        "Deleted '{}.{}' from {} {}",
                        group,
                        key,
                        removed,
                        plural(*removed, "locale", "locales")
                    ),
                );
            }
        }
        CommandSummary::List(records) => print_list(records, writer),
        CommandSummary::Lookup(lookup) => print_lookup(lookup, writer),
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

fn success<W: Write>(writer: &mut W, message: String) {
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green());
}

fn print_init<W: Write>(init: &InitSummary, writer: &mut W) {
    match &init.error {
        Some(error) => {
            let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), error.red());
        }
        None => success(writer, format!("Created {}", init.path.display())),
    }
}

fn print_import<W: Write>(import: &ImportReport, writer: &mut W) {
    let summary = &import.summary;
    success(
        writer,
        format!(
            "Imported {} {} from {} group {} in {} {}",
            summary.leaves,
            plural(summary.leaves, "translation", "translations"),
            summary.groups,
            plural(summary.groups, "file", "files"),
            summary.locales,
            plural(summary.locales, "locale", "locales"),
        ),
    );
    if import.replace {
        let _ = writeln!(writer, "  {}", "existing values were replaced".dimmed());
    }
}

fn print_find<W: Write>(find: &FindSummary, writer: &mut W) {
    success(
        writer,
        format!(
            "Found {} translation {} in {} {} ({} new)",
            find.found,
            plural(find.found, "key", "keys"),
            find.files_scanned,
            plural(find.files_scanned, "file", "files"),
            find.created,
        ),
    );
}

fn print_export<W: Write>(export: &ExportReport, verbose: bool, writer: &mut W) {
    let summary = &export.summary;
    if summary.groups == 0 {
        let _ = writeln!(
            writer,
            "{} Nothing to export for '{}'",
            FAILURE_MARK.yellow(),
            export.group
        );
        return;
    }

    success(
        writer,
        format!(
            "Exported {} {} to {} {}",
            summary.groups,
            plural(summary.groups, "group", "groups"),
            summary.files.len(),
            plural(summary.files.len(), "file", "files"),
        ),
    );
    if verbose {
        for file in &summary.files {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), file.display());
        }
    }
}

fn print_reset<W: Write>(reset: &ResetSummary, writer: &mut W) {
    if reset.is_apply {
        success(
            writer,
            format!(
                "Deleted {} {}",
                reset.count,
                plural(reset.count, "translation", "translations")
            ),
        );
    } else {
        let _ = writeln!(
            writer,
            "{} would delete {} {} (use {} to apply)",
            "warning:".bold().yellow(),
            reset.count,
            plural(reset.count, "translation", "translations"),
            "--apply".cyan()
        );
    }
}

fn print_list<W: Write>(records: &[Translation], writer: &mut W) {
    if records.is_empty() {
        let _ = writeln!(writer, "No translations found");
        return;
    }

    for record in records {
        let value = match &record.value {
            Some(value) => format!("\"{}\"", value).normal(),
            None => "<missing>".yellow(),
        };
        let status = match record.status {
            Status::Saved => record.status.as_str().dimmed(),
            Status::Changed => record.status.as_str().cyan(),
        };
        let _ = writeln!(
            writer,
            "{} {}.{} = {} {}",
            record.locale.bold(),
            record.group,
            record.key,
            value,
            status
        );
    }

    let missing = records.iter().filter(|t| t.value.is_none()).count();
    let _ = writeln!(
        writer,
        "{} {}, {} missing",
        records.len(),
        plural(records.len(), "translation", "translations"),
        missing
    );
}

fn print_lookup<W: Write>(lookup: &LookupSummary, writer: &mut W) {
    if lookup.found() {
        let _ = writeln!(writer, "{}", lookup.result);
    } else {
        let _ = writeln!(
            writer,
            "{} No translation for '{}'",
            FAILURE_MARK.red(),
            lookup.key
        );
    }
}
