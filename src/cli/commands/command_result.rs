use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::core::{
    Translation, exporter::ExportSummary, importer::ImportSummary, scanner::FindSummary,
};

#[derive(Debug)]
pub enum CommandSummary {
    Init(InitSummary),
    Import(ImportReport),
    Find(FindSummary),
    Export(ExportReport),
    Clean { removed: usize },
    Reset(ResetSummary),
    Add { group: String, created: usize },
    Edit(Translation),
    Delete { group: String, key: String, removed: usize },
    List(Vec<Translation>),
    Lookup(LookupSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    /// Set when the config file already existed.
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct ImportReport {
    pub summary: ImportSummary,
    pub replace: bool,
}

#[derive(Debug)]
pub struct ExportReport {
    pub summary: ExportSummary,
    pub group: String,
}

#[derive(Debug)]
pub struct ResetSummary {
    pub count: usize,
    pub is_apply: bool,
}

#[derive(Debug)]
pub struct LookupSummary {
    pub key: String,
    pub result: String,
}

impl LookupSummary {
    /// A lookup that falls through returns the key unchanged.
    pub fn found(&self) -> bool {
        self.result != self.key
    }
}

/// Result of running a langsync command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub verbose: bool,
}

impl CommandResult {
    pub fn new(summary: CommandSummary, verbose: bool) -> Self {
        Self { summary, verbose }
    }

    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Init(init) => ExitStatus::from_success(init.error.is_none()),
            CommandSummary::Lookup(lookup) => ExitStatus::from_success(lookup.found()),
            _ => ExitStatus::Success,
        }
    }
}
