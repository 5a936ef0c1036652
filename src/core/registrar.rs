use tracing::debug;

use super::{record::Triple, store::TranslationStore};
use crate::config::Config;
use crate::error::Result;

/// Records keys that are referenced but have no translation.
///
/// Registration goes to the default locale with a null value and never
/// touches a record that already exists.
pub struct MissingKeyRegistrar<'a> {
    config: &'a Config,
    store: &'a dyn TranslationStore,
}

impl<'a> MissingKeyRegistrar<'a> {
    pub fn new(config: &'a Config, store: &'a dyn TranslationStore) -> Self {
        Self { config, store }
    }

    /// Register `group.key`; returns true if a new record was created.
    pub fn missing_key(&self, namespace: &str, group: &str, key: &str) -> Result<bool> {
        if self.config.is_excluded(group) {
            return Ok(false);
        }

        let triple = Triple::new(&self.config.default_locale, group, key);
        if self.store.find(&triple)?.is_some() {
            return Ok(false);
        }

        self.store.first_or_create(&triple)?;
        debug!(namespace, %triple, "registered missing key");
        Ok(true)
    }
}
