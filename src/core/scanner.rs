//! Static discovery of translation keys in source and template files.
//!
//! Recognized call sites, with a single- or double-quoted `group.key`
//! literal directly after the opening parenthesis:
//!
//! ```text
//! trans('group.key')          Lang::get('group.key')
//! trans_choice('group.key')   Lang::choice('group.key')
//! @lang('group.key')          Lang::trans('group.key')
//! @choice('group.key')        Lang::transChoice('group.key')
//! ```
//!
//! Keys built at runtime (concatenation, variables) are invisible here.

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use glob::Pattern;
use regex::Regex;
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use super::{registrar::MissingKeyRegistrar, store::TranslationStore};
use crate::config::Config;
use crate::error::{Result, SyncError};

/// Call-site tokens, longest first within each family.
const CALL_SITES: &[&str] = &[
    "trans_choice",
    "trans",
    "Lang::transChoice",
    "Lang::trans",
    "Lang::choice",
    "Lang::get",
    "@lang",
    "@choice",
];

/// Build the call-site pattern.
///
/// Call names match case-insensitively. The character before the call
/// must not be a word character, `|` or `>`, so `foo_trans(`,
/// `$this->trans(` and `|trans(` are skipped; the text start counts as a
/// boundary. Group 2 captures the key: a group name, then one or more
/// `.segment` parts, closed by a quote and `)` or `,`.
pub fn call_site_pattern() -> Result<Regex> {
    let calls = CALL_SITES
        .iter()
        .map(|c| regex::escape(c))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(
        r#"(?si)(?:^|[^\w|>])({calls})\(['"]([a-zA-Z0-9_-]+(?:[.][^\x01)]+?)+?)['"][),]"#
    );
    Ok(Regex::new(&pattern)?)
}

/// Extract key literals from text, in order of appearance (duplicates kept).
pub fn extract_keys(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .captures_iter(text)
        .filter_map(|caps| caps.get(2).map(|m| m.as_str().to_string()))
        .collect()
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    pub keys: BTreeSet<String>,
    pub files_scanned: usize,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FindSummary {
    /// Distinct keys found, whether or not they were already stored.
    pub found: usize,
    /// Records created for keys that were not stored yet.
    pub created: usize,
    pub files_scanned: usize,
}

pub struct KeyScanner<'a> {
    config: &'a Config,
    pattern: Regex,
    ignores: Vec<Pattern>,
}

impl<'a> KeyScanner<'a> {
    pub fn new(config: &'a Config) -> Result<Self> {
        // Patterns were checked by Config::validate; anything left invalid is dropped
        let ignores = config
            .scan_ignores
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect();

        Ok(Self {
            config,
            pattern: call_site_pattern()?,
            ignores,
        })
    }

    /// Collect the distinct keys used under `root`.
    pub fn scan(&self, root: &Path) -> Result<ScanSummary> {
        let mut summary = ScanSummary::default();

        for path in self.source_files(root)? {
            let bytes = fs::read(&path).map_err(|e| SyncError::fs(&path, e))?;
            let text = String::from_utf8_lossy(&bytes);
            let keys = extract_keys(&self.pattern, &text);
            if !keys.is_empty() {
                debug!(file = %path.display(), count = keys.len(), "found translation keys");
            }
            summary.keys.extend(keys);
            summary.files_scanned += 1;
        }

        Ok(summary)
    }

    /// Scan `root` and register every discovered key; returns the distinct key count.
    pub fn find_translations(&self, root: &Path, store: &dyn TranslationStore) -> Result<usize> {
        Ok(self.find_with_summary(root, store)?.found)
    }

    pub fn find_with_summary(
        &self,
        root: &Path,
        store: &dyn TranslationStore,
    ) -> Result<FindSummary> {
        let scan = self.scan(root)?;
        let registrar = MissingKeyRegistrar::new(self.config, store);

        let mut created = 0;
        for key in &scan.keys {
            let Some((group, item)) = key.split_once('.') else {
                continue;
            };
            if registrar.missing_key("", group, item)? {
                created += 1;
            }
        }

        let summary = FindSummary {
            found: scan.keys.len(),
            created,
            files_scanned: scan.files_scanned,
        };
        info!(
            found = summary.found,
            created = summary.created,
            files = summary.files_scanned,
            "key scan finished"
        );
        Ok(summary)
    }

    fn source_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_excluded_dir(entry));

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let relative = path.strip_prefix(root).unwrap_or(path);
            if self.ignores.iter().any(|p| p.matches_path(relative)) {
                continue;
            }

            if self.has_scan_extension(path) {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }

    fn is_excluded_dir(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.config.scan_excluded_dirs.iter().any(|d| d == name))
    }

    fn has_scan_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.config.scan_extensions.iter().any(|e| e == ext))
    }
}
