//! Compiled-in schema source for the warehouse tables.
//!
//! The six table definitions ship inside the binary (teacher-style
//! `include_str!` registry) so the library works without loose resource
//! files. Only `zone` carries seed rows; the remaining tables start
//! empty.

use std::path::PathBuf;

use super::{SchemaError, SchemaResult, SchemaSource};

#[derive(Debug, Clone, Copy)]
struct TableSql {
    table: &'static str,
    create: &'static str,
    seed: &'static str,
}

const TABLES: &[TableSql] = &[
    TableSql {
        table: "zone",
        create: include_str!("sql/zone.crear.sql"),
        seed: include_str!("sql/zone.insertar.sql"),
    },
    TableSql {
        table: "client",
        create: include_str!("sql/client.crear.sql"),
        seed: "",
    },
    TableSql {
        table: "dock",
        create: include_str!("sql/dock.crear.sql"),
        seed: "",
    },
    TableSql {
        table: "shelf",
        create: include_str!("sql/shelf.crear.sql"),
        seed: "",
    },
    TableSql {
        table: "product",
        create: include_str!("sql/product.crear.sql"),
        seed: "",
    },
    TableSql {
        table: "placement",
        create: include_str!("sql/placement.crear.sql"),
        seed: "",
    },
];

/// Schema source serving the built-in warehouse table definitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSchemaSource;

impl EmbeddedSchemaSource {
    pub fn new() -> Self {
        Self
    }

    fn lookup(table: &str) -> SchemaResult<&'static TableSql> {
        TABLES
            .iter()
            .find(|entry| entry.table == table)
            .ok_or_else(|| SchemaError::NotFound {
                table: table.to_string(),
                path: PathBuf::from(format!("src/schema/sql/{table}.crear.sql")),
            })
    }
}

impl SchemaSource for EmbeddedSchemaSource {
    fn create_sql(&self, table: &str) -> SchemaResult<String> {
        Ok(Self::lookup(table)?.create.to_string())
    }

    fn seed_sql(&self, table: &str) -> SchemaResult<String> {
        Ok(Self::lookup(table)?.seed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{EmbeddedSchemaSource, SchemaError, SchemaSource};

    #[test]
    fn serves_every_warehouse_table() {
        let source = EmbeddedSchemaSource::new();
        for table in ["zone", "client", "dock", "shelf", "product", "placement"] {
            let ddl = source.create_sql(table).unwrap();
            assert!(ddl.contains(&format!("CREATE TABLE {table}")));
        }
    }

    #[test]
    fn only_zone_has_seed_rows() {
        let source = EmbeddedSchemaSource::new();
        assert!(!source.seed_sql("zone").unwrap().is_empty());
        assert!(source.seed_sql("product").unwrap().is_empty());
    }

    #[test]
    fn unknown_table_is_not_found() {
        let source = EmbeddedSchemaSource::new();
        assert!(matches!(
            source.create_sql("warehouse_orders"),
            Err(SchemaError::NotFound { .. })
        ));
    }
}
