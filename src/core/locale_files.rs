//! Enumeration of locale directories and group files under a language root.
//!
//! ```text
//! lang/
//!   en/
//!     messages.json          -> group "messages"
//!     vendor/package.json    -> group "vendor/package"
//!   fr/
//!     messages.json
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use super::loader::LOCALE_FILE_EXTENSION;
use crate::error::{Result, SyncError};

/// A locale directory directly under the language root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDir {
    pub locale: String,
    pub path: PathBuf,
}

/// A file inside a locale directory and the group name derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupFile {
    /// Path-qualified group, e.g. `vendor/package`.
    pub group: String,
    /// Bare file stem, e.g. `package`.
    pub stem: String,
    pub path: PathBuf,
}

/// List immediate subdirectories of `root`, sorted by name.
///
/// A missing root yields no locales.
pub fn locale_dirs(root: &Path) -> Result<Vec<LocaleDir>> {
    if !root.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(root).map_err(|e| SyncError::fs(root, e))?;
    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SyncError::fs(root, e))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if let Some(locale) = path.file_name().and_then(|n| n.to_str()) {
            dirs.push(LocaleDir {
                locale: locale.to_string(),
                path: path.clone(),
            });
        }
    }
    dirs.sort_by(|a, b| a.locale.cmp(&b.locale));
    Ok(dirs)
}

/// Recursively list locale files in a locale directory with their group names.
///
/// Files with any other extension are ignored.
pub fn group_files(locale_dir: &Path) -> Result<Vec<GroupFile>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(locale_dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(LOCALE_FILE_EXTENSION) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        let relative_dir = path
            .parent()
            .and_then(|parent| parent.strip_prefix(locale_dir).ok())
            .map(|rel| {
                rel.components()
                    .filter_map(|c| c.as_os_str().to_str())
                    .collect::<Vec<_>>()
                    .join("/")
            })
            .unwrap_or_default();

        let group = if relative_dir.is_empty() {
            stem.to_string()
        } else {
            format!("{}/{}", relative_dir, stem)
        };

        files.push(GroupFile {
            group,
            stem: stem.to_string(),
            path: path.to_path_buf(),
        });
    }

    Ok(files)
}
