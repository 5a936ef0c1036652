//! Entry point tying configuration, store and loader together.
//!
//! The CLI goes through [`Manager`]; each method maps to one user-facing
//! operation and applies the configuration switches that gate it.

use std::path::Path;

use tracing::info;

use super::{
    exporter::{ExportSummary, Exporter},
    importer::{ImportSummary, Importer},
    loader::{LocaleLoader, check_names},
    lookup::{CatalogLookup, MissingKeyRecordingLookup},
    record::{RecordFilter, Status, Translation, Triple},
    registrar::MissingKeyRegistrar,
    scanner::{FindSummary, KeyScanner},
    store::TranslationStore,
};
use crate::config::Config;
use crate::error::{Result, SyncError};

pub struct Manager<'a> {
    config: &'a Config,
    loader: &'a dyn LocaleLoader,
    store: &'a dyn TranslationStore,
}

impl<'a> Manager<'a> {
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

    pub fn config(&self) -> &Config {
        self.config
    }

    pub fn store(&self) -> &dyn TranslationStore {
        self.store
    }

    pub fn import_translations(&self, replace: bool) -> Result<ImportSummary> {
        if !self.config.import_enabled {
            return Err(SyncError::Disabled("import"));
        }
        Importer::new(self.config, self.loader, self.store).import_with_summary(replace)
    }

    pub fn find_translations(&self, root: &Path) -> Result<FindSummary> {
        if !self.config.find_enabled {
            return Err(SyncError::Disabled("find"));
        }
        KeyScanner::new(self.config)?.find_with_summary(root, self.store)
    }

    pub fn export_translations(&self, group: &str) -> Result<ExportSummary> {
        Exporter::new(self.config, self.store).export_group(group)
    }

    pub fn missing_key(&self, namespace: &str, group: &str, key: &str) -> Result<bool> {
        self.registrar().missing_key(namespace, group, key)
    }

    /// Delete every record that never received a value.
    pub fn clean_translations(&self) -> Result<usize> {
        let removed = self.store.delete_where_value_null()?;
        info!(removed, "removed untranslated keys");
        Ok(removed)
    }

    pub fn truncate_translations(&self) -> Result<()> {
        self.store.truncate()?;
        info!("truncated translation store");
        Ok(())
    }

    /// Create empty records for new keys in every known locale.
    ///
    /// Returns the number of records created; existing ones are untouched.
    pub fn add_keys(&self, group: &str, keys: &[String]) -> Result<usize> {
        if !self.config.creating_enabled {
            return Err(SyncError::Disabled("creating"));
        }
        if self.config.is_excluded(group) {
            return Ok(0);
        }

        let mut locales = self.store.distinct_locales()?;
        if locales.is_empty() {
            locales.insert(self.config.default_locale.clone());
        }

        for locale in &locales {
            check_names(locale, group)?;
        }

        let mut created = 0;
        for key in keys.iter().map(|k| k.trim()).filter(|k| !k.is_empty()) {
            for locale in &locales {
                let triple = Triple::new(locale, group, key);
                if self.store.find(&triple)?.is_none() {
                    self.store.first_or_create(&triple)?;
                    created += 1;
                }
            }
        }
        Ok(created)
    }

    /// Set a value by hand; the record is marked `Changed` until the next export.
    pub fn set_value(&self, triple: &Triple, value: Option<String>) -> Result<Translation> {
        check_names(&triple.locale, &triple.group)?;
        let mut translation = self.store.first_or_new(triple)?;
        translation.value = value;
        translation.status = Status::Changed;
        self.store.save(&mut translation)?;
        Ok(translation)
    }

    pub fn delete_key(&self, group: &str, key: &str) -> Result<usize> {
        if !self.config.delete_enabled {
            return Err(SyncError::Disabled("delete"));
        }
        self.store.delete_key(group, key)
    }

    pub fn list(&self, filter: &RecordFilter) -> Result<Vec<Translation>> {
        let records = self.store.list(filter)?;
        Ok(records
            .into_iter()
            .filter(|t| !self.config.is_excluded(&t.group))
            .collect())
    }

    pub fn registrar(&self) -> MissingKeyRegistrar<'a> {
        MissingKeyRegistrar::new(self.config, self.store)
    }

    /// A catalog lookup that records keys it cannot resolve.
    pub fn recording_lookup(&self) -> MissingKeyRecordingLookup<'a, CatalogLookup<'a>> {
        MissingKeyRecordingLookup::new(
            CatalogLookup::new(self.config, self.loader),
            self.registrar(),
        )
    }
}
