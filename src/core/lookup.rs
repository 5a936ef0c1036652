//! Runtime translation lookup and missing-key interception.
//!
//! [`CatalogLookup`] resolves keys from locale files. Wrapping any
//! [`TranslationLookup`] in a [`MissingKeyRecordingLookup`] records keys
//! that have no translation without changing what the caller gets back.

use std::{
    cell::RefCell,
    collections::{BTreeMap, HashMap},
};

use serde_json::Value;

use super::{key_path::Tree, loader::LocaleLoader, registrar::MissingKeyRegistrar};
use crate::config::Config;
use crate::error::Result;

/// Namespace of keys that carry no `ns::` prefix.
pub const DEFAULT_NAMESPACE: &str = "*";

/// Placeholder substitutions: `:name` is replaced by the value of `name`.
pub type Replacements = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKey {
    pub namespace: String,
    pub group: String,
    pub item: Option<String>,
}

/// Split `ns::group.item` into its parts.
///
/// `group.item.deeper` gives group `group` and item `item.deeper`; a key
/// without a dot has no item.
pub fn parse_key(key: &str) -> ParsedKey {
    let (namespace, rest) = key.split_once("::").unwrap_or((DEFAULT_NAMESPACE, key));
    let (group, item) = match rest.split_once('.') {
        Some((group, item)) => (group, Some(item.to_string())),
        None => (rest, None),
    };

    ParsedKey {
        namespace: namespace.to_string(),
        group: group.to_string(),
        item,
    }
}

/// Something that turns a key into a translated line.
///
/// By convention a key that cannot be resolved is returned unchanged.
pub trait TranslationLookup {
    fn resolve(
        &self,
        key: &str,
        replacements: &Replacements,
        locale: Option<&str>,
        fallback: bool,
    ) -> Result<String>;
}

impl<T: TranslationLookup + ?Sized> TranslationLookup for &T {
    fn resolve(
        &self,
        key: &str,
        replacements: &Replacements,
        locale: Option<&str>,
        fallback: bool,
    ) -> Result<String> {
        (**self).resolve(key, replacements, locale, fallback)
    }
}

/// Resolves keys from a locale loader, caching each loaded group.
pub struct CatalogLookup<'a> {
    config: &'a Config,
    loader: &'a dyn LocaleLoader,
    loaded: RefCell<HashMap<(String, String), Option<Tree>>>,
}

impl<'a> CatalogLookup<'a> {
    pub fn new(config: &'a Config, loader: &'a dyn LocaleLoader) -> Self {
        Self {
            config,
            loader,
            loaded: RefCell::new(HashMap::new()),
        }
    }

    /// A string leaf, or the subtree when `item` names a branch.
    fn line(&self, locale: &str, group: &str, item: &str) -> Result<Option<Value>> {
        let cache_key = (locale.to_string(), group.to_string());
        if !self.loaded.borrow().contains_key(&cache_key) {
            let tree = match self.loader.load(locale, group)? {
                Some(Value::Object(tree)) => Some(tree),
                _ => None,
            };
            self.loaded.borrow_mut().insert(cache_key.clone(), tree);
        }

        let loaded = self.loaded.borrow();
        let Some(Some(tree)) = loaded.get(&cache_key) else {
            return Ok(None);
        };

        let mut segments = item.split('.');
        let mut current = segments.next().and_then(|first| tree.get(first));
        for segment in segments {
            current = current.and_then(|v| v.get(segment));
        }
        Ok(current
            .filter(|v| v.is_string() || v.is_object())
            .cloned())
    }
}

impl TranslationLookup for CatalogLookup<'_> {
    fn resolve(
        &self,
        key: &str,
        replacements: &Replacements,
        locale: Option<&str>,
        fallback: bool,
    ) -> Result<String> {
        let parsed = parse_key(key);
        // Only the default namespace is backed by the catalog
        let Some(item) = parsed
            .item
            .as_deref()
            .filter(|_| parsed.namespace == DEFAULT_NAMESPACE)
        else {
            return Ok(key.to_string());
        };

        let locale = locale.unwrap_or(&self.config.default_locale);
        let mut line = self.line(locale, &parsed.group, item)?;

        if line.is_none() && fallback && self.config.fallback_locale != locale {
            line = self.line(&self.config.fallback_locale, &parsed.group, item)?;
        }

        Ok(match line {
            Some(Value::String(line)) => make_replacements(&line, replacements),
            // A branch resolves to itself, rendered as JSON
            Some(subtree) => subtree.to_string(),
            None => key.to_string(),
        })
    }
}

/// Replace `:name`, `:Name` and `:NAME` placeholders, longest names first.
pub fn make_replacements(line: &str, replacements: &Replacements) -> String {
    let mut ordered: Vec<(&String, &String)> = replacements.iter().collect();
    ordered.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()));

    let mut result = line.to_string();
    for (name, value) in ordered {
        result = result
            .replace(&format!(":{}", name), value)
            .replace(&format!(":{}", name.to_uppercase()), &value.to_uppercase())
            .replace(&format!(":{}", upper_first(name)), &upper_first(value));
    }
    result
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Decorator that records missing keys, then resolves with fallback as asked.
pub struct MissingKeyRecordingLookup<'a, L> {
    inner: L,
    registrar: MissingKeyRegistrar<'a>,
}

impl<'a, L: TranslationLookup> MissingKeyRecordingLookup<'a, L> {
    pub fn new(inner: L, registrar: MissingKeyRegistrar<'a>) -> Self {
        Self { inner, registrar }
    }

    pub fn into_inner(self) -> L {
        self.inner
    }

    fn notify_missing_key(&self, key: &str) -> Result<()> {
        let parsed = parse_key(key);
        match parsed.item {
            Some(item)
                if parsed.namespace == DEFAULT_NAMESPACE
                    && !parsed.group.is_empty()
                    && !item.is_empty() =>
            {
                self.registrar
                    .missing_key(&parsed.namespace, &parsed.group, &item)?;
            }
            _ => {}
        }
        Ok(())
    }
}

impl<L: TranslationLookup> TranslationLookup for MissingKeyRecordingLookup<'_, L> {
    fn resolve(
        &self,
        key: &str,
        replacements: &Replacements,
        locale: Option<&str>,
        fallback: bool,
    ) -> Result<String> {
        let result = self.inner.resolve(key, replacements, locale, false)?;
        if result != key {
            return Ok(result);
        }

        self.notify_missing_key(key)?;
        self.inner.resolve(key, replacements, locale, fallback)
    }
}
