//! Import locale files into the record store.
//!
//! For every leaf of every group file the stored record is reconciled
//! against the file value:
//!
//! - status becomes `Saved` when the stored value equals the file value and
//!   `Changed` otherwise;
//! - the value is only written when the stored one is blank, or when the
//!   caller asked to replace.
//!
//! Any loader, file system or store failure aborts the run. Records written
//! before the failure stay written.

use serde_json::Value;
use tracing::{debug, info, warn};

use super::{
    key_path::{flatten, scalar_to_string},
    loader::LocaleLoader,
    locale_files::{group_files, locale_dirs},
    record::{Status, Triple},
    store::TranslationStore,
};
use crate::config::Config;
use crate::error::Result;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    /// Leaves reconciled against the store.
    pub leaves: usize,
    /// Group files that yielded a translation tree.
    pub groups: usize,
    pub locales: usize,
}

pub struct Importer<'a> {
    config: &'a Config,
    loader: &'a dyn LocaleLoader,
    store: &'a dyn TranslationStore,
}

impl<'a> Importer<'a> {
    pub fn new(
        config: &'a Config,
        loader: &'a dyn LocaleLoader,
        store: &'a dyn TranslationStore,
    ) -> Self {
        Self {
            config,
            loader,
            store,
        }
    }

    /// Import every group of every locale; returns the number of leaves processed.
    pub fn import(&self, replace: bool) -> Result<usize> {
        Ok(self.import_with_summary(replace)?.leaves)
    }

    pub fn import_with_summary(&self, replace: bool) -> Result<ImportSummary> {
        let mut summary = ImportSummary::default();
        let root = self.config.lang_root_path();

        for locale_dir in locale_dirs(&root)? {
            summary.locales += 1;

            for file in group_files(&locale_dir.path)? {
                if self.config.is_excluded(&file.stem) || self.config.is_excluded(&file.group) {
                    debug!(group = %file.group, "skipping excluded group");
                    continue;
                }

                let Some(Value::Object(tree)) = self.loader.load(&locale_dir.locale, &file.group)?
                else {
                    debug!(locale = %locale_dir.locale, group = %file.group, "no translations loaded");
                    continue;
                };

                summary.groups += 1;
                for (key, leaf) in flatten(&tree) {
                    let Some(value) = scalar_to_string(&leaf) else {
                        warn!(
                            locale = %locale_dir.locale,
                            group = %file.group,
                            key = %key,
                            "skipping non-scalar translation value"
                        );
                        continue;
                    };

                    let triple = Triple::new(&locale_dir.locale, &file.group, key);
                    self.reconcile(&triple, value, replace)?;
                    summary.leaves += 1;
                }
            }
        }

        info!(
            leaves = summary.leaves,
            groups = summary.groups,
            locales = summary.locales,
            replace,
            "import finished"
        );
        Ok(summary)
    }

    fn reconcile(&self, triple: &Triple, file_value: String, replace: bool) -> Result<()> {
        let mut translation = self.store.first_or_new(triple)?;

        let new_status = if translation.value.as_deref() == Some(file_value.as_str()) {
            Status::Saved
        } else {
            Status::Changed
        };
        if new_status != translation.status {
            translation.status = new_status;
        }

        // Never overwrite a curated value unless asked to
        if replace || translation.is_blank() {
            translation.value = Some(file_value);
        }

        self.store.save(&mut translation)
    }
}
