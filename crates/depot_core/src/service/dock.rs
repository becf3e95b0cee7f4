//! Dock service with zone referential checks.

use crate::model::{Dock, Validate, Zone};
use crate::repo::TableRepository;

use super::{CatalogService, ServiceError, ServiceResult};

/// Check-then-act service for docks.
///
/// On top of the catalog contract, inserts and updates require the
/// referenced zone to exist.
pub struct DockService {
    catalog: CatalogService<Dock>,
    zones: TableRepository<Zone>,
}

impl DockService {
    pub fn new(docks: TableRepository<Dock>, zones: TableRepository<Zone>) -> Self {
        Self {
            catalog: CatalogService::new(docks),
            zones,
        }
    }

    fn check_zone(&self, dock: &Dock) -> ServiceResult<()> {
        if !self.zones.exists(&dock.zone_id)? {
            return Err(ServiceError::MissingReference {
                entity: "dock",
                reference: "zone",
                key: dock.zone_id.to_string(),
            });
        }
        Ok(())
    }

    pub fn find(&self, id: i64) -> ServiceResult<Option<Dock>> {
        self.catalog.find(&id)
    }

    pub fn find_all(&self) -> ServiceResult<Vec<Dock>> {
        self.catalog.find_all()
    }

    pub fn insert(&self, dock: &Dock) -> ServiceResult<()> {
        dock.validate()?;
        self.check_zone(dock)?;
        self.catalog.insert(dock)
    }

    pub fn update(&self, dock: &Dock) -> ServiceResult<()> {
        dock.validate()?;
        self.check_zone(dock)?;
        self.catalog.update(dock)
    }

    pub fn delete(&self, dock: &Dock) -> ServiceResult<()> {
        self.catalog.delete(dock)
    }
}
