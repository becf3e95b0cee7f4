//! SQLite connection configuration and persistence error taxonomy.
//!
//! # Responsibility
//! - Define the immutable connection parameters shared by every store.
//! - Define the error kinds raised by the persistence layer.
//!
//! # Invariants
//! - `ConnectionConfig` is read-only after construction; stores clone it,
//!   they never mutate it.
//! - Every error wraps its underlying driver cause; nothing is swallowed.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::schema::SchemaError;

mod provider;

pub use provider::{ConnectionConfig, ConnectionProvider};

pub type DbResult<T> = Result<T, DbError>;

/// Persistence-layer failures.
///
/// `Connection` covers everything up to a usable handle, `Statement`
/// covers statement preparation, execution and row fetch, `Bootstrap`
/// is fatal to store construction, and `Schema` surfaces schema-source
/// lookup failures.
#[derive(Debug)]
pub enum DbError {
    Connection(rusqlite::Error),
    Statement {
        table: &'static str,
        op: &'static str,
        source: rusqlite::Error,
    },
    Bootstrap {
        table: &'static str,
        source: Box<DbError>,
    },
    Schema(SchemaError),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connection(err) => write!(f, "could not open database connection: {err}"),
            Self::Statement { table, op, source } => {
                write!(f, "statement failed ({op} on `{table}`): {source}")
            }
            Self::Bootstrap { table, source } => {
                write!(f, "bootstrap of table `{table}` failed: {source}")
            }
            Self::Schema(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Connection(err) => Some(err),
            Self::Statement { source, .. } => Some(source),
            Self::Bootstrap { source, .. } => Some(source),
            Self::Schema(err) => Some(err),
        }
    }
}

impl From<SchemaError> for DbError {
    fn from(value: SchemaError) -> Self {
        Self::Schema(value)
    }
}
