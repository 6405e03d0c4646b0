//! State store contract and SQLite implementation.
//!
//! # Invariants
//! - Documents are stored as JSON text under a stable key string.
//! - Read paths reject undecodable documents instead of masking them as
//!   defaults.

use crate::db::{ensure_state_schema, DbError};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Logical document keys in the installation key space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKey {
    /// The category forest.
    Categories,
    /// The standalone "known folders" list.
    Projects,
}

impl StateKey {
    /// Stable key string used in persisted storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Categories => "categories",
            Self::Projects => "projects",
        }
    }
}

impl Display for StateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from state store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying SQLite error, or a connection whose schema is not ready.
    Db(DbError),
    /// Value could not be encoded as a JSON document.
    Encode {
        key: StateKey,
        source: serde_json::Error,
    },
    /// Persisted document is not valid for the requested type.
    Decode {
        key: StateKey,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode { key, source } => {
                write!(f, "failed to encode state document `{key}`: {source}")
            }
            Self::Decode { key, source } => {
                write!(f, "invalid persisted state document `{key}`: {source}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode { source, .. } | Self::Decode { source, .. } => Some(source),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Whole-document key/value store scoped to one installation.
pub trait StateStore {
    /// Loads the raw JSON document for `key`, if one was ever saved.
    fn load_document(&self, key: StateKey) -> StoreResult<Option<String>>;
    /// Durably replaces the raw JSON document for `key`.
    fn save_document(&self, key: StateKey, document: &str) -> StoreResult<()>;

    /// Loads and decodes the document for `key`, or `T::default()` when absent.
    fn load<T>(&self, key: StateKey) -> StoreResult<T>
    where
        T: DeserializeOwned + Default,
    {
        match self.load_document(key)? {
            Some(document) => serde_json::from_str(&document)
                .map_err(|source| StoreError::Decode { key, source }),
            None => Ok(T::default()),
        }
    }

    /// Encodes `value` and replaces the document for `key`.
    fn save<T>(&self, key: StateKey, value: &T) -> StoreResult<()>
    where
        T: Serialize + ?Sized,
    {
        let document =
            serde_json::to_string(value).map_err(|source| StoreError::Encode { key, source })?;
        self.save_document(key, &document)
    }
}

impl<S: StateStore> StateStore for &S {
    fn load_document(&self, key: StateKey) -> StoreResult<Option<String>> {
        (**self).load_document(key)
    }

    fn save_document(&self, key: StateKey, document: &str) -> StoreResult<()> {
        (**self).save_document(key, document)
    }
}

/// SQLite-backed state store over table `state_documents`.
pub struct SqliteStateStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStateStore<'conn> {
    /// Creates a store from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        ensure_state_schema(conn)?;
        Ok(Self { conn })
    }
}

impl StateStore for SqliteStateStore<'_> {
    fn load_document(&self, key: StateKey) -> StoreResult<Option<String>> {
        let document = self
            .conn
            .query_row(
                "SELECT value
                 FROM state_documents
                 WHERE key = ?1;",
                [key.as_str()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        debug!(
            "event=state_load module=store status=ok key={key} found={}",
            document.is_some()
        );
        Ok(document)
    }

    fn save_document(&self, key: StateKey, document: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO state_documents (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key.as_str(), document],
        )?;
        debug!(
            "event=state_save module=store status=ok key={key} bytes={}",
            document.len()
        );
        Ok(())
    }
}
