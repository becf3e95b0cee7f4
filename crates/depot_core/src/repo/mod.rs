//! Generic per-entity repository over the table store.
//!
//! # Responsibility
//! - Define the entity-to-row mapping contract (`EntityMapping`).
//! - Provide one generic accessor (`TableRepository`) offering
//!   find/insert/update/delete for every entity type.
//!
//! # Invariants
//! - All entity SQL binds parameters; no value is spliced into SQL text.
//! - Repositories hold no entity state between calls; every operation
//!   re-reads the database.

use std::fmt::Display;
use std::marker::PhantomData;

use rusqlite::params_from_iter;
use rusqlite::types::Value;
use rusqlite::Row;

use crate::db::{ConnectionProvider, DbResult};
use crate::schema::SchemaSource;
use crate::store::{TableDescriptor, TableStore};

mod aggregates;
mod mappings;

pub use aggregates::SlotUsage;

/// Row mapping and SQL text for one entity type.
///
/// Implementations replace the original one-subclass-per-entity design
/// with composition: the generic [`TableRepository`] supplies the
/// algorithm, the mapping supplies table identity, key rendering and
/// encode/decode.
pub trait EntityMapping: Sized {
    /// Natural-key type; composite keys use a dedicated key struct.
    type Key: Clone + Display;

    const TABLE: TableDescriptor;
    /// Human-readable entity name used in error messages.
    const ENTITY: &'static str;
    /// Column list for SELECTs, in `from_row` order.
    const COLUMNS: &'static str;
    /// Parameterized WHERE fragment matching exactly one key.
    const KEY_PREDICATE: &'static str;

    fn key(&self) -> Self::Key;
    fn key_values(key: &Self::Key) -> Vec<Value>;
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
    fn insert_sql() -> &'static str;
    fn insert_values(&self) -> Vec<Value>;
    fn update_sql() -> &'static str;
    fn update_values(&self) -> Vec<Value>;
}

/// Table-scoped CRUD accessor for one entity type.
#[derive(Debug)]
pub struct TableRepository<E: EntityMapping> {
    store: TableStore,
    _entity: PhantomData<E>,
}

impl<E: EntityMapping> TableRepository<E> {
    /// Creates the repository, bootstrapping its table when absent.
    pub fn new(provider: ConnectionProvider, schema: &dyn SchemaSource) -> DbResult<Self> {
        let store = TableStore::new(provider, E::TABLE, schema)?;
        Ok(Self {
            store,
            _entity: PhantomData,
        })
    }

    /// Looks one entity up by natural key.
    pub fn find_by_key(&self, key: &E::Key) -> DbResult<Option<E>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE {}",
            E::COLUMNS,
            E::TABLE.name,
            E::KEY_PREDICATE
        );
        let rows = self
            .store
            .query(&sql, params_from_iter(E::key_values(key)), E::from_row)?;
        Ok(rows.into_iter().next())
    }

    /// Returns every stored entity, ordered by key.
    pub fn find_all(&self) -> DbResult<Vec<E>> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY {}",
            E::COLUMNS,
            E::TABLE.name,
            E::TABLE.key_column
        );
        self.store.query(&sql, [], E::from_row)
    }

    /// Whether an entity with `key` is currently stored.
    pub fn exists(&self, key: &E::Key) -> DbResult<bool> {
        Ok(self.find_by_key(key)?.is_some())
    }

    pub fn insert(&self, entity: &E) -> DbResult<()> {
        self.store
            .execute(E::insert_sql(), params_from_iter(entity.insert_values()))?;
        Ok(())
    }

    pub fn update(&self, entity: &E) -> DbResult<()> {
        self.store
            .execute(E::update_sql(), params_from_iter(entity.update_values()))?;
        Ok(())
    }

    pub fn delete(&self, entity: &E) -> DbResult<()> {
        let sql = format!("DELETE FROM {} WHERE {}", E::TABLE.name, E::KEY_PREDICATE);
        self.store
            .execute(&sql, params_from_iter(E::key_values(&entity.key())))?;
        Ok(())
    }

    pub(crate) fn store(&self) -> &TableStore {
        &self.store
    }
}
