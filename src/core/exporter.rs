//! Write stored translations back to locale files.
//!
//! Export replaces each `(locale, group)` file in full with the store's
//! view of it and then marks the exported records `Saved`.

use std::{collections::BTreeMap, fs, path::PathBuf};

use serde_json::Value;
use tracing::{debug, info};

use super::{
    key_path::{Tree, sort_tree, unflatten},
    loader::group_file_path,
    record::{RecordFilter, Status},
    store::TranslationStore,
};
use crate::config::{ALL_GROUPS, Config};
use crate::error::{Result, SyncError};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub files: Vec<PathBuf>,
    pub groups: usize,
}

pub struct Exporter<'a> {
    config: &'a Config,
    store: &'a dyn TranslationStore,
}

impl<'a> Exporter<'a> {
    pub fn new(config: &'a Config, store: &'a dyn TranslationStore) -> Self {
        Self { config, store }
    }

    /// Export one group, or every group when `group` is `"*"`.
    pub fn export_group(&self, group: &str) -> Result<ExportSummary> {
        if self.config.is_excluded(group) {
            debug!(group, "skipping excluded group");
            return Ok(ExportSummary::default());
        }
        if group == ALL_GROUPS {
            return self.export_all();
        }

        let records = self.store.list_by_group(group, true)?;
        let mut by_locale: BTreeMap<String, Vec<(String, Value)>> = BTreeMap::new();
        for record in records {
            if let Some(value) = record.value {
                by_locale
                    .entry(record.locale)
                    .or_default()
                    .push((record.key, Value::String(value)));
            }
        }

        let mut summary = ExportSummary {
            groups: usize::from(!by_locale.is_empty()),
            ..ExportSummary::default()
        };
        for (locale, pairs) in by_locale {
            let mut tree = unflatten(pairs);
            if self.config.sort_keys {
                sort_tree(&mut tree);
            }
            summary.files.push(self.write_group(&locale, group, &tree)?);
        }

        let updated = self
            .store
            .set_status(&RecordFilter::group(group).with_value(), Status::Saved)?;
        debug!(group, updated, "marked exported records saved");

        Ok(summary)
    }

    /// Export every group that has at least one value.
    pub fn export_all(&self) -> Result<ExportSummary> {
        let mut summary = ExportSummary::default();
        for group in self.store.distinct_groups(true)? {
            let exported = self.export_group(&group)?;
            summary.files.extend(exported.files);
            summary.groups += exported.groups;
        }

        info!(
            groups = summary.groups,
            files = summary.files.len(),
            "export finished"
        );
        Ok(summary)
    }

    fn write_group(&self, locale: &str, group: &str, tree: &Tree) -> Result<PathBuf> {
        let path = group_file_path(&self.config.lang_root_path(), locale, group)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| SyncError::fs(parent, e))?;
        }

        fs::write(&path, render_group(tree)?).map_err(|e| SyncError::fs(&path, e))?;
        debug!(file = %path.display(), "wrote locale file");
        Ok(path)
    }
}

/// Render a group tree as a locale file: pretty JSON with a trailing newline.
pub fn render_group(tree: &Tree) -> Result<String> {
    let content = serde_json::to_string_pretty(tree)?;
    Ok(format!("{}\n", content))
}
