//! Locale loading contract and the JSON file loader.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::error::{Result, SyncError};

/// File extension of locale files read by [`JsonFileLoader`] and written by the exporter.
pub const LOCALE_FILE_EXTENSION: &str = "json";

/// Supplies the translation tree of one (locale, group).
///
/// `Ok(None)` means the group has no translations for that locale. A
/// returned value that is not an object is treated the same way by callers.
pub trait LocaleLoader {
    fn load(&self, locale: &str, group: &str) -> Result<Option<Value>>;
}

/// Reads `<root>/<locale>/<group>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileLoader {
    root: PathBuf,
}

impl JsonFileLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn group_path(&self, locale: &str, group: &str) -> Result<PathBuf> {
        group_file_path(&self.root, locale, group)
    }
}

/// Location of a group file under the language root.
///
/// Path-qualified groups such as `vendor/package` map to subdirectories.
/// Names that would leave `<root>/<locale>` are rejected.
pub fn group_file_path(root: &Path, locale: &str, group: &str) -> Result<PathBuf> {
    check_names(locale, group)?;

    let mut path = root.join(locale);
    let (dirs, file) = group.rsplit_once('/').unwrap_or(("", group));
    for segment in dirs.split('/') {
        path.push(segment);
    }
    // set_extension would swallow the tail of a dotted group name
    path.push(format!("{}.{}", file, LOCALE_FILE_EXTENSION));
    Ok(path)
}

/// Reject a locale or group that cannot be mapped to a file under the root.
///
/// The locale is a single path segment. A group is one or more
/// `/`-separated segments; none may be empty, `.`, `..` or contain `\`.
pub fn check_names(locale: &str, group: &str) -> Result<()> {
    let unsafe_segment = |s: &str| s.is_empty() || s == "." || s == ".." || s.contains('\\');

    if unsafe_segment(locale) || locale.contains('/') {
        return Err(SyncError::InvalidName {
            kind: "locale",
            name: locale.to_string(),
        });
    }
    if group.split('/').any(unsafe_segment) {
        return Err(SyncError::InvalidName {
            kind: "group",
            name: group.to_string(),
        });
    }
    Ok(())
}

impl LocaleLoader for JsonFileLoader {
    fn load(&self, locale: &str, group: &str) -> Result<Option<Value>> {
        let path = self.group_path(locale, group)?;
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SyncError::fs(path, e)),
        };

        let value = serde_json::from_str(&content).map_err(|e| SyncError::Loader {
            locale: locale.to_string(),
            group: group.to_string(),
            message: e.to_string(),
        })?;
        Ok(Some(value))
    }
}
