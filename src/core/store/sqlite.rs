//! SQLite-backed translation store using rusqlite.

use std::{collections::BTreeSet, path::Path};

use rusqlite::{Connection, OptionalExtension, Row, params};

use super::TranslationStore;
use crate::core::record::{RecordFilter, Status, Translation, Triple};
use crate::error::{Result, SyncError};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS ltm_translations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    status INTEGER NOT NULL DEFAULT 0,
    locale TEXT NOT NULL,
    "group" TEXT NOT NULL,
    "key" TEXT NOT NULL,
    value TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now')),
    UNIQUE (locale, "group", "key")
);
CREATE INDEX IF NOT EXISTS ltm_translations_group ON ltm_translations ("group");
"#;

const SELECT_COLUMNS: &str = r#"SELECT id, locale, "group", "key", value, status FROM ltm_translations"#;

/// Filter clause shared by list and bulk updates; binds ?1 group, ?2 locale, ?3 require_value.
const FILTER_CLAUSE: &str = r#"(?1 IS NULL OR "group" = ?1)
    AND (?2 IS NULL OR locale = ?2)
    AND (?3 = 0 OR value IS NOT NULL)"#;

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open or create a store at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| SyncError::fs(parent, e))?;
        }

        let conn = Connection::open(path)?;
        Self::initialize(conn)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self> {
        Self::initialize(Connection::open_in_memory()?)
    }

    fn initialize(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        tracing::debug!("translation store schema ready");
        Ok(Self { conn })
    }
}

fn row_to_translation(row: &Row<'_>) -> rusqlite::Result<Translation> {
    Ok(Translation {
        id: Some(row.get(0)?),
        locale: row.get(1)?,
        group: row.get(2)?,
        key: row.get(3)?,
        value: row.get(4)?,
        status: Status::from_i64(row.get(5)?),
    })
}

impl TranslationStore for SqliteStore {
    fn find(&self, triple: &Triple) -> Result<Option<Translation>> {
        let sql = format!(r#"{SELECT_COLUMNS} WHERE locale = ?1 AND "group" = ?2 AND "key" = ?3"#);
        let found = self
            .conn
            .query_row(
                &sql,
                params![triple.locale, triple.group, triple.key],
                row_to_translation,
            )
            .optional()?;
        Ok(found)
    }

    fn first_or_create(&self, triple: &Triple) -> Result<Translation> {
        self.conn.execute(
            r#"INSERT INTO ltm_translations (locale, "group", "key", status)
               VALUES (?1, ?2, ?3, ?4)
               ON CONFLICT (locale, "group", "key") DO NOTHING"#,
            params![
                triple.locale,
                triple.group,
                triple.key,
                Status::Saved.as_i64()
            ],
        )?;

        self.find(triple)?
            .ok_or_else(|| SyncError::Store(format!("record {} vanished after insert", triple)))
    }

    fn save(&self, translation: &mut Translation) -> Result<()> {
        match translation.id {
            Some(id) => {
                self.conn.execute(
                    r#"UPDATE ltm_translations
                       SET locale = ?1, "group" = ?2, "key" = ?3, value = ?4, status = ?5,
                           updated_at = datetime('now')
                       WHERE id = ?6"#,
                    params![
                        translation.locale,
                        translation.group,
                        translation.key,
                        translation.value,
                        translation.status.as_i64(),
                        id
                    ],
                )?;
            }
            None => {
                let id: i64 = self.conn.query_row(
                    r#"INSERT INTO ltm_translations (locale, "group", "key", value, status)
                       VALUES (?1, ?2, ?3, ?4, ?5)
                       ON CONFLICT (locale, "group", "key") DO UPDATE
                       SET value = excluded.value, status = excluded.status,
                           updated_at = datetime('now')
                       RETURNING id"#,
                    params![
                        translation.locale,
                        translation.group,
                        translation.key,
                        translation.value,
                        translation.status.as_i64()
                    ],
                    |row| row.get(0),
                )?;
                translation.id = Some(id);
            }
        }
        Ok(())
    }

    fn list(&self, filter: &RecordFilter) -> Result<Vec<Translation>> {
        let sql = format!(r#"{SELECT_COLUMNS} WHERE {FILTER_CLAUSE} ORDER BY "group", "key", locale"#);
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(
            params![filter.group, filter.locale, filter.require_value],
            row_to_translation,
        )?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    fn set_status(&self, filter: &RecordFilter, status: Status) -> Result<usize> {
        let sql = format!(
            "UPDATE ltm_translations SET status = ?4, updated_at = datetime('now') WHERE {FILTER_CLAUSE}"
        );
        let updated = self.conn.execute(
            &sql,
            params![
                filter.group,
                filter.locale,
                filter.require_value,
                status.as_i64()
            ],
        )?;
        Ok(updated)
    }

    fn delete_where_value_null(&self) -> Result<usize> {
        Ok(self
            .conn
            .execute("DELETE FROM ltm_translations WHERE value IS NULL", [])?)
    }

    fn delete_key(&self, group: &str, key: &str) -> Result<usize> {
        Ok(self.conn.execute(
            r#"DELETE FROM ltm_translations WHERE "group" = ?1 AND "key" = ?2"#,
            params![group, key],
        )?)
    }

    fn truncate(&self) -> Result<()> {
        self.conn.execute("DELETE FROM ltm_translations", [])?;
        Ok(())
    }

    fn distinct_groups(&self, require_value: bool) -> Result<BTreeSet<String>> {
        let mut stmt = self.conn.prepare(
            r#"SELECT DISTINCT "group" FROM ltm_translations WHERE ?1 = 0 OR value IS NOT NULL"#,
        )?;
        let rows = stmt.query_map(params![require_value], |row| row.get::<_, String>(0))?;
        Ok(rows.collect::<rusqlite::Result<BTreeSet<String>>>()?)
    }

    fn distinct_locales(&self) -> Result<BTreeSet<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT locale FROM ltm_translations")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        Ok(rows.collect::<rusqlite::Result<BTreeSet<String>>>()?)
    }
}
