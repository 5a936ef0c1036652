//! Per-invocation setup: configuration, store and loader.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::debug;

use super::args::CommonArgs;
use crate::config::{Config, load_config};
use crate::core::{JsonFileLoader, Manager, SqliteStore};

pub struct CommandContext {
    pub config: Config,
    pub store: SqliteStore,
    pub loader: JsonFileLoader,
    /// True if the configuration came from a file.
    pub from_file: bool,
}

impl CommandContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to read current directory")?;
        Self::from_dir(&cwd, common)
    }

    pub fn from_dir(dir: &Path, common: &CommonArgs) -> Result<Self> {
        let loaded = load_config(dir)?;
        let mut config = loaded.config;
        apply_overrides(&mut config, common);

        let db_path = PathBuf::from(&config.db_connection);
        let store = SqliteStore::open(&db_path)
            .with_context(|| format!("Failed to open translation store: {}", db_path.display()))?;
        let loader = JsonFileLoader::new(config.lang_root_path());

        debug!(
            lang_root = %config.lang_root,
            db = %config.db_connection,
            from_file = loaded.from_file,
            "command context ready"
        );

        Ok(Self {
            config,
            store,
            loader,
            from_file: loaded.from_file,
        })
    }

    pub fn manager(&self) -> Manager<'_> {
        Manager::new(&self.config, &self.loader, &self.store)
    }

    pub fn source_root(&self) -> PathBuf {
        PathBuf::from(&self.config.source_root)
    }
}

fn apply_overrides(config: &mut Config, common: &CommonArgs) {
    if let Some(lang_root) = &common.lang_root {
        config.lang_root = lang_root.to_string_lossy().to_string();
    }
    if let Some(source_root) = &common.source_root {
        config.source_root = source_root.to_string_lossy().to_string();
    }
    if let Some(db) = &common.db {
        config.db_connection = db.to_string_lossy().to_string();
    }
}
