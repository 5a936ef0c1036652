//! Record store gateway.
//!
//! Every method is its own atomic unit against the store. Nothing here
//! wraps a whole import or export run; concurrent writers to the same
//! triple race with last-write-wins.

mod sqlite;

pub use sqlite::SqliteStore;

use std::collections::BTreeSet;

use super::record::{RecordFilter, Status, Translation, Triple};
use crate::error::Result;

pub trait TranslationStore {
    /// Fetch a record by triple without creating it.
    fn find(&self, triple: &Triple) -> Result<Option<Translation>>;

    /// Fetch a record by triple, inserting an empty one if absent.
    fn first_or_create(&self, triple: &Triple) -> Result<Translation>;

    /// Fetch a record by triple, or build an unsaved empty one.
    fn first_or_new(&self, triple: &Triple) -> Result<Translation> {
        Ok(self
            .find(triple)?
            .unwrap_or_else(|| Translation::new(triple)))
    }

    /// Insert or update by triple; assigns `id` on first save.
    fn save(&self, translation: &mut Translation) -> Result<()>;

    fn list(&self, filter: &RecordFilter) -> Result<Vec<Translation>>;

    fn list_by_group(&self, group: &str, require_value: bool) -> Result<Vec<Translation>> {
        let mut filter = RecordFilter::group(group);
        filter.require_value = require_value;
        self.list(&filter)
    }

    /// Returns the number of records updated.
    fn set_status(&self, filter: &RecordFilter, status: Status) -> Result<usize>;

    /// Remove discovered-but-untranslated records.
    fn delete_where_value_null(&self) -> Result<usize>;

    /// Remove a key from every locale of a group.
    fn delete_key(&self, group: &str, key: &str) -> Result<usize>;

    fn truncate(&self) -> Result<()>;

    fn distinct_groups(&self, require_value: bool) -> Result<BTreeSet<String>>;

    fn distinct_locales(&self) -> Result<BTreeSet<String>>;
}
