//! Generic table-scoped persistence accessor.
//!
//! # Responsibility
//! - Guarantee the owned table exists (create + seed) on construction.
//! - Execute DML/DDL and run SELECTs with eager row materialization.
//!
//! # Invariants
//! - Table existence is re-derived from the live `sqlite_master` catalog
//!   on every construction; there is no persisted bootstrap flag.
//! - Every operation opens its own connection and releases it before
//!   returning, on success and failure paths alike.
//! - `query` never exposes a cursor: all rows are drained into an owned
//!   `Vec` while the connection is still held.

use log::{error, info};
use rusqlite::{Params, Row};

use crate::db::{ConnectionProvider, DbError, DbResult};
use crate::schema::{split_statements, SchemaSource};

/// Immutable identity of the table a store manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDescriptor {
    pub name: &'static str,
    /// Primary-key column list, usable in `ORDER BY`.
    pub key_column: &'static str,
}

/// Table-scoped accessor over a [`ConnectionProvider`].
///
/// Construction bootstraps the table from a [`SchemaSource`]; afterwards
/// the store only needs its provider and descriptor. The schema source
/// is not retained.
#[derive(Debug)]
pub struct TableStore {
    provider: ConnectionProvider,
    table: TableDescriptor,
}

impl TableStore {
    /// Creates a store, bootstrapping its table when absent.
    ///
    /// The catalog is consulted live; when the table is missing its
    /// creation statement is executed, followed by each seed statement in
    /// order. Re-construction against an existing table is a no-op.
    ///
    /// # Errors
    /// Fails with [`DbError::Bootstrap`] when schema text cannot be
    /// fetched or a bootstrap statement fails; the store is not returned
    /// in that case.
    pub fn new(
        provider: ConnectionProvider,
        table: TableDescriptor,
        schema: &dyn SchemaSource,
    ) -> DbResult<Self> {
        let store = Self { provider, table };
        store.bootstrap(schema).map_err(|err| {
            error!(
                "event=table_bootstrap module=store table={} status=error error={err}",
                table.name
            );
            DbError::Bootstrap {
                table: table.name,
                source: Box::new(err),
            }
        })?;
        Ok(store)
    }

    fn bootstrap(&self, schema: &dyn SchemaSource) -> DbResult<()> {
        let conn = self.provider.acquire()?;

        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table'")
            .map_err(|source| self.statement_error("catalog", source))?;
        let tables = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<String>>>())
            .map_err(|source| self.statement_error("catalog", source))?;
        drop(stmt);

        if tables.iter().any(|name| name == self.table.name) {
            info!(
                "event=table_bootstrap module=store table={} status=ok created=false",
                self.table.name
            );
            return Ok(());
        }

        let ddl = schema.create_sql(self.table.name)?;
        conn.execute_batch(&ddl)
            .map_err(|source| self.statement_error("create", source))?;

        let seed_text = schema.seed_sql(self.table.name)?;
        for statement in split_statements(&seed_text) {
            conn.execute(statement, [])
                .map_err(|source| self.statement_error("seed", source))?;
        }

        info!(
            "event=table_bootstrap module=store table={} status=ok created=true",
            self.table.name
        );
        Ok(())
    }

    /// Executes one INSERT/UPDATE/DELETE/DDL statement with bound
    /// parameters and returns the affected-row count.
    ///
    /// Callers detect no-ops through existence checks, not this count.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> DbResult<usize> {
        let conn = self.provider.acquire()?;
        conn.execute(sql, params)
            .map_err(|source| self.statement_error("execute", source))
    }

    /// Runs a SELECT and materializes every row through `map_row`.
    ///
    /// The backing connection is released before this returns; no cursor
    /// outlives the call.
    pub fn query<T, P, F>(&self, sql: &str, params: P, map_row: F) -> DbResult<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let conn = self.provider.acquire()?;
        let mut stmt = conn
            .prepare(sql)
            .map_err(|source| self.statement_error("prepare", source))?;
        let rows = stmt
            .query_map(params, map_row)
            .and_then(|mapped| mapped.collect::<rusqlite::Result<Vec<T>>>())
            .map_err(|source| self.statement_error("query", source))?;
        Ok(rows)
    }

    pub fn table(&self) -> TableDescriptor {
        self.table
    }

    fn statement_error(&self, op: &'static str, source: rusqlite::Error) -> DbError {
        DbError::Statement {
            table: self.table.name,
            op,
            source,
        }
    }
}
