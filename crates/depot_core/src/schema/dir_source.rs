//! Directory-backed schema source.
//!
//! Reads `{table}.crear.sql` (DDL) and `{table}.insertar.sql` (seed
//! inserts) from a resource directory, following the layout the original
//! warehouse deployments ship with.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{SchemaError, SchemaResult, SchemaSource, CREATE_SUFFIX, SEED_SUFFIX};

/// Schema source reading SQL resource files from one directory.
#[derive(Debug, Clone)]
pub struct DirSchemaSource {
    dir: PathBuf,
}

impl DirSchemaSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn read(&self, table: &str, suffix: &str) -> SchemaResult<String> {
        let path = self.dir.join(format!("{table}.{suffix}"));
        std::fs::read_to_string(&path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => SchemaError::NotFound {
                table: table.to_string(),
                path,
            },
            _ => SchemaError::Io { path, source: err },
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SchemaSource for DirSchemaSource {
    fn create_sql(&self, table: &str) -> SchemaResult<String> {
        self.read(table, CREATE_SUFFIX)
    }

    fn seed_sql(&self, table: &str) -> SchemaResult<String> {
        self.read(table, SEED_SUFFIX)
    }
}
