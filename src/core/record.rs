use std::fmt;

/// Whether a stored value matches the last file sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// Value matches the file content it was last imported from or exported to.
    #[default]
    Saved,
    /// Value was edited since the last sync, or differs from the file on import.
    Changed,
}

impl Status {
    pub fn as_i64(self) -> i64 {
        match self {
            Status::Saved => 0,
            Status::Changed => 1,
        }
    }

    /// Unknown codes are read as `Changed` so they get re-exported.
    pub fn from_i64(code: i64) -> Self {
        match code {
            0 => Status::Saved,
            _ => Status::Changed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Saved => "saved",
            Status::Changed => "changed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a record: at most one record exists per triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triple {
    pub locale: String,
    pub group: String,
    pub key: String,
}

impl Triple {
    pub fn new(
        locale: impl Into<String>,
        group: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            locale: locale.into(),
            group: group.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}.{}", self.locale, self.group, self.key)
    }
}

/// A stored translation.
///
/// `value == None` marks a key that is referenced somewhere but has never
/// been given a translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// `None` until the record has been persisted.
    pub id: Option<i64>,
    pub locale: String,
    pub group: String,
    pub key: String,
    pub value: Option<String>,
    pub status: Status,
}

impl Translation {
    /// An unsaved record with empty defaults.
    pub fn new(triple: &Triple) -> Self {
        Self {
            id: None,
            locale: triple.locale.clone(),
            group: triple.group.clone(),
            key: triple.key.clone(),
            value: None,
            status: Status::Saved,
        }
    }

    pub fn triple(&self) -> Triple {
        Triple::new(&self.locale, &self.group, &self.key)
    }

    pub fn exists(&self) -> bool {
        self.id.is_some()
    }

    /// True when the value is absent or the empty string.
    pub fn is_blank(&self) -> bool {
        self.value.as_deref().is_none_or(str::is_empty)
    }
}

/// Selection criteria for bulk reads and updates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub group: Option<String>,
    pub locale: Option<String>,
    /// Only match records whose value is not null.
    pub require_value: bool,
}

impl RecordFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn group(group: impl Into<String>) -> Self {
        Self {
            group: Some(group.into()),
            ..Self::default()
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_value(mut self) -> Self {
        self.require_value = true;
        self
    }

    pub fn matches(&self, translation: &Translation) -> bool {
        self.group.as_ref().is_none_or(|g| *g == translation.group)
            && self.locale.as_ref().is_none_or(|l| *l == translation.locale)
            && (!self.require_value || translation.value.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Status::Saved.as_i64(), 0);
        assert_eq!(Status::Changed.as_i64(), 1);
        assert_eq!(Status::from_i64(0), Status::Saved);
        assert_eq!(Status::from_i64(1), Status::Changed);
        assert_eq!(Status::from_i64(7), Status::Changed);
    }

    #[test]
    fn test_new_translation_is_unsaved_and_blank() {
        let t = Translation::new(&Triple::new("en", "messages", "greeting.hi"));
        assert!(!t.exists());
        assert!(t.is_blank());
        assert_eq!(t.status, Status::Saved);
        assert_eq!(t.triple().to_string(), "en:messages.greeting.hi");
    }

    #[test]
    fn test_blank_includes_empty_string() {
        let mut t = Translation::new(&Triple::new("en", "g", "k"));
        t.value = Some(String::new());
        assert!(t.is_blank());
        t.value = Some("x".to_string());
        assert!(!t.is_blank());
    }

    #[test]
    fn test_filter_matches() {
        let mut t = Translation::new(&Triple::new("fr", "auth", "failed"));
        assert!(RecordFilter::all().matches(&t));
        assert!(RecordFilter::group("auth").matches(&t));
        assert!(!RecordFilter::group("auth").with_locale("en").matches(&t));
        assert!(!RecordFilter::group("auth").with_value().matches(&t));

        t.value = Some("Échec".to_string());
        assert!(RecordFilter::group("auth").with_locale("fr").with_value().matches(&t));
    }
}
