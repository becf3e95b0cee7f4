//! Warehouse inventory persistence core.
//! This crate is the single source of truth for storage and domain invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod schema;
pub mod service;
pub mod store;

pub use db::{ConnectionConfig, ConnectionProvider, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::{
    Client, Dock, Placement, PlacementKey, Product, Shelf, StorageKind, Validate, ValidationError,
    Zone,
};
pub use repo::{EntityMapping, SlotUsage, TableRepository};
pub use schema::{DirSchemaSource, EmbeddedSchemaSource, SchemaError, SchemaSource};
pub use service::{
    CatalogService, DockService, PlacementService, ServiceError, ServiceResult, Warehouse,
};
pub use store::{TableDescriptor, TableStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
