//! Per-operation connection acquisition.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections on demand.
//! - Apply connection pragmas (`foreign_keys=ON`, busy timeout) before a
//!   handle is handed out.
//!
//! # Invariants
//! - Every acquired connection is independent; release happens when the
//!   caller drops it, on success and failure paths alike.
//! - In-memory databases survive between acquisitions for as long as the
//!   provider that owns them is alive.

use log::{error, info};
use rusqlite::{Connection, OpenFlags};
use std::path::PathBuf;
use std::time::Duration;
use uuid::Uuid;

use super::{DbError, DbResult};

const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Location {
    File(PathBuf),
    /// Named shared-cache in-memory database. The name keeps concurrent
    /// providers in one process from seeing each other's data.
    Memory(String),
}

/// Immutable connection parameters, read once per store construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    location: Location,
    busy_timeout: Duration,
}

impl ConnectionConfig {
    /// Configuration for a file-backed database. The file is created on
    /// first acquisition if it does not exist.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            location: Location::File(path.into()),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    /// Configuration for a process-private in-memory database.
    pub fn in_memory() -> Self {
        Self {
            location: Location::Memory(format!("depot-{}", Uuid::new_v4())),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    /// Overrides the busy timeout applied to every acquired connection.
    pub fn busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }
}

/// Opens one connection per persistence operation.
///
/// A fresh handle is returned from every [`ConnectionProvider::acquire`]
/// call; the caller releases it by dropping it. For in-memory
/// configurations the provider keeps an anchor connection open so the
/// database outlives the per-operation handles.
#[derive(Debug)]
pub struct ConnectionProvider {
    config: ConnectionConfig,
    _anchor: Option<Connection>,
}

impl ConnectionProvider {
    /// Creates a provider from immutable connection parameters.
    ///
    /// # Errors
    /// Fails with [`DbError::Connection`] when an in-memory database
    /// cannot be anchored.
    pub fn new(config: ConnectionConfig) -> DbResult<Self> {
        let anchor = match &config.location {
            Location::File(_) => None,
            Location::Memory(name) => Some(open_memory(name)?),
        };
        if anchor.is_some() {
            info!("event=db_anchor module=db status=ok mode=memory");
        }
        Ok(Self {
            config,
            _anchor: anchor,
        })
    }

    /// Opens a fresh configured connection.
    ///
    /// # Errors
    /// Fails with [`DbError::Connection`] when the database cannot be
    /// opened or a pragma cannot be applied. The partially opened handle
    /// is dropped before the error propagates.
    pub fn acquire(&self) -> DbResult<Connection> {
        let conn = match &self.config.location {
            Location::File(path) => Connection::open(path).map_err(|err| {
                error!(
                    "event=db_acquire module=db status=error mode=file error={err}"
                );
                DbError::Connection(err)
            })?,
            Location::Memory(name) => open_memory(name)?,
        };
        configure(&conn, self.config.busy_timeout)?;
        Ok(conn)
    }

    /// Returns the parameters this provider was built from.
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }
}

fn open_memory(name: &str) -> DbResult<Connection> {
    let uri = format!("file:{name}?mode=memory&cache=shared");
    Connection::open_with_flags(
        &uri,
        OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|err| {
        error!("event=db_acquire module=db status=error mode=memory error={err}");
        DbError::Connection(err)
    })
}

fn configure(conn: &Connection, busy_timeout: Duration) -> DbResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(DbError::Connection)?;
    conn.busy_timeout(busy_timeout)
        .map_err(DbError::Connection)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ConnectionConfig, ConnectionProvider};
    use std::time::Duration;

    #[test]
    fn memory_database_survives_between_acquisitions() {
        let provider = ConnectionProvider::new(ConnectionConfig::in_memory()).unwrap();

        let first = provider.acquire().unwrap();
        first
            .execute_batch("CREATE TABLE probe (id INTEGER PRIMARY KEY);")
            .unwrap();
        drop(first);

        let second = provider.acquire().unwrap();
        let count: i64 = second
            .query_row(
                "SELECT count(*) FROM sqlite_master WHERE name = 'probe'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn distinct_memory_providers_are_isolated() {
        let first = ConnectionProvider::new(ConnectionConfig::in_memory()).unwrap();
        let second = ConnectionProvider::new(ConnectionConfig::in_memory()).unwrap();

        first
            .acquire()
            .unwrap()
            .execute_batch("CREATE TABLE only_here (id INTEGER);")
            .unwrap();

        let count: i64 = second
            .acquire()
            .unwrap()
            .query_row(
                "SELECT count(*) FROM sqlite_master WHERE name = 'only_here'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn acquired_connections_have_foreign_keys_enabled() {
        let provider = ConnectionProvider::new(
            ConnectionConfig::in_memory().busy_timeout(Duration::from_millis(100)),
        )
        .unwrap();
        let conn = provider.acquire().unwrap();
        let enabled: i64 = conn
            .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }
}
