//! Schema text supply for lazy table bootstrap.
//!
//! # Responsibility
//! - Define the fetch-by-table-name contract for DDL and seed SQL.
//! - Split multi-statement seed text into executable statements.
//!
//! # Invariants
//! - A schema source is consulted only while a table store bootstraps;
//!   nothing retains it afterwards.
//! - Seed text is `;`-separated; blank fragments are never executed.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod dir_source;
mod embedded;

pub use dir_source::DirSchemaSource;
pub use embedded::EmbeddedSchemaSource;

/// Resource-file suffix holding a table's creation statement.
pub const CREATE_SUFFIX: &str = "crear.sql";
/// Resource-file suffix holding a table's `;`-separated seed inserts.
pub const SEED_SUFFIX: &str = "insertar.sql";

pub type SchemaResult<T> = Result<T, SchemaError>;

#[derive(Debug)]
pub enum SchemaError {
    /// No schema text is known for the requested table.
    NotFound { table: String, path: PathBuf },
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for SchemaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { table, path } => write!(
                f,
                "no schema text for table `{table}` (expected `{}`)",
                path.display()
            ),
            Self::Io { path, source } => {
                write!(f, "could not read schema file `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for SchemaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound { .. } => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Supplier of schema-creation and seed SQL, keyed by table name.
pub trait SchemaSource {
    /// Returns the `CREATE TABLE` statement for `table`.
    fn create_sql(&self, table: &str) -> SchemaResult<String>;

    /// Returns the seed-insert text for `table`. Empty text means the
    /// table starts without rows.
    fn seed_sql(&self, table: &str) -> SchemaResult<String>;
}

/// Splits seed text on the statement terminator, dropping blank pieces.
///
/// `"INSERT A;INSERT B"` yields two statements; empty or whitespace-only
/// input yields none.
pub fn split_statements(seed_text: &str) -> Vec<&str> {
    seed_text
        .split(';')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}
