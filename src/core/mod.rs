//! Reconciliation and discovery engine.
//!
//! - `key_path`: flatten / unflatten between trees and dotted keys
//! - `store`: record store gateway and its SQLite implementation
//! - `loader`, `locale_files`: reading the language root
//! - `importer`, `exporter`: file <-> store synchronisation
//! - `scanner`: static key discovery in source code
//! - `registrar`, `lookup`: missing-key registration at runtime
//! - `manager`: configuration-gated entry point used by the CLI

pub mod exporter;
pub mod importer;
pub mod key_path;
pub mod loader;
pub mod locale_files;
pub mod lookup;
pub mod manager;
pub mod record;
pub mod registrar;
pub mod scanner;
pub mod store;

pub use loader::{JsonFileLoader, LocaleLoader};
pub use manager::Manager;
pub use record::{RecordFilter, Status, Translation, Triple};
pub use store::{SqliteStore, TranslationStore};
