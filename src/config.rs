use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".langsyncrc.json";

/// Sentinel group name meaning "every group with at least one value".
pub const ALL_GROUPS: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuPosition {
    #[default]
    Top,
    Bottom,
}

/// Route settings for a hosting UI. Not read by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    #[serde(default = "default_route_prefix")]
    pub prefix: String,
    #[serde(default = "default_route_middleware")]
    pub middleware: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            prefix: default_route_prefix(),
            middleware: default_route_middleware(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_lang_root", alias = "langPath")]
    pub lang_root: String,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_locale")]
    pub default_locale: String,
    #[serde(default = "default_locale")]
    pub fallback_locale: String,
    #[serde(default)]
    pub exclude_groups: BTreeSet<String>,
    #[serde(default)]
    pub sort_keys: bool,
    #[serde(default = "default_db_connection")]
    pub db_connection: String,
    #[serde(default = "default_scan_extensions")]
    pub scan_extensions: Vec<String>,
    #[serde(default = "default_scan_excluded_dirs")]
    pub scan_excluded_dirs: Vec<String>,
    #[serde(default)]
    pub scan_ignores: Vec<String>,
    #[serde(default)]
    pub menu_position: MenuPosition,
    #[serde(default = "default_enabled")]
    pub delete_enabled: bool,
    #[serde(default = "default_enabled")]
    pub creating_enabled: bool,
    #[serde(default = "default_enabled")]
    pub import_enabled: bool,
    #[serde(default = "default_enabled")]
    pub find_enabled: bool,
    #[serde(default)]
    pub route: RouteConfig,
}

fn default_lang_root() -> String {
    "./lang".to_string()
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_db_connection() -> String {
    "./.langsync/translations.db".to_string()
}

fn default_scan_extensions() -> Vec<String> {
    ["php", "twig"].map(String::from).to_vec()
}

fn default_scan_excluded_dirs() -> Vec<String> {
    vec!["storage".to_string()]
}

fn default_enabled() -> bool {
    true
}

fn default_route_prefix() -> String {
    "translations".to_string()
}

fn default_route_middleware() -> String {
    "auth".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lang_root: default_lang_root(),
            source_root: default_source_root(),
            default_locale: default_locale(),
            fallback_locale: default_locale(),
            exclude_groups: BTreeSet::new(),
            sort_keys: false,
            db_connection: default_db_connection(),
            scan_extensions: default_scan_extensions(),
            scan_excluded_dirs: default_scan_excluded_dirs(),
            scan_ignores: Vec::new(),
            menu_position: MenuPosition::default(),
            delete_enabled: true,
            creating_enabled: true,
            import_enabled: true,
            find_enabled: true,
            route: RouteConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns in `scanIgnores` or empty locales.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.scan_ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'scanIgnores': \"{}\"", pattern))?;
        }

        if self.default_locale.trim().is_empty() {
            bail!("'defaultLocale' must not be empty");
        }
        if self.fallback_locale.trim().is_empty() {
            bail!("'fallbackLocale' must not be empty");
        }

        Ok(())
    }

    pub fn is_excluded(&self, group: &str) -> bool {
        self.exclude_groups.contains(group)
    }

    pub fn lang_root_path(&self) -> PathBuf {
        PathBuf::from(&self.lang_root)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
