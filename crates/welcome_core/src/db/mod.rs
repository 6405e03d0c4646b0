//! State database bootstrap.
//!
//! Connections returned from [`open_db`] / [`open_db_in_memory`] are migrated
//! and pass [`ensure_state_schema`]; stores built on a raw connection must call
//! the check themselves before touching `state_documents`.

use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

/// Table holding one JSON document per state key.
pub const STATE_TABLE: &str = "state_documents";

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// File was written by a newer build; refusing to downgrade it.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    /// Connection was never migrated (or only partially).
    StateSchemaNotReady { expected: u32, actual: u32 },
    /// Version pragma says migrated but the document table is gone.
    MissingStateTable,
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "sqlite: {err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "state database schema v{db_version} was written by a newer build (this build knows up to v{latest_supported})"
            ),
            Self::StateSchemaNotReady { expected, actual } => write!(
                f,
                "state database is at schema v{actual}, expected v{expected}; open it through open_db"
            ),
            Self::MissingStateTable => write!(f, "state database has no `{STATE_TABLE}` table"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Verifies `conn` is at the latest schema and owns the document table.
pub fn ensure_state_schema(conn: &Connection) -> DbResult<()> {
    let expected = migrations::latest_version();
    let actual = migrations::current_user_version(conn)?;
    if actual != expected {
        return Err(DbError::StateSchemaNotReady { expected, actual });
    }

    let has_table: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1);",
        [STATE_TABLE],
        |row| row.get(0),
    )?;
    if !has_table {
        return Err(DbError::MissingStateTable);
    }
    Ok(())
}
