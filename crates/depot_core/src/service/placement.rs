//! Placement service with product/shelf referential checks and
//! warehouse-wide aggregates.

use crate::db::DbResult;
use crate::model::{Placement, PlacementKey, Product, Shelf, Validate};
use crate::repo::{SlotUsage, TableRepository};

use super::{CatalogService, ServiceError, ServiceResult};

/// Check-then-act service for product-on-shelf placements.
///
/// Inserts and updates require both referenced entities to exist; the
/// aggregate figures of the original warehouse reports are exposed here.
pub struct PlacementService {
    catalog: CatalogService<Placement>,
    products: TableRepository<Product>,
    shelves: TableRepository<Shelf>,
}

impl PlacementService {
    pub fn new(
        placements: TableRepository<Placement>,
        products: TableRepository<Product>,
        shelves: TableRepository<Shelf>,
    ) -> Self {
        Self {
            catalog: CatalogService::new(placements),
            products,
            shelves,
        }
    }

    fn check_references(&self, placement: &Placement) -> ServiceResult<()> {
        if !self.products.exists(&placement.product_id)? {
            return Err(ServiceError::MissingReference {
                entity: "placement",
                reference: "product",
                key: placement.product_id.to_string(),
            });
        }
        if !self.shelves.exists(&placement.shelf_id)? {
            return Err(ServiceError::MissingReference {
                entity: "placement",
                reference: "shelf",
                key: placement.shelf_id.to_string(),
            });
        }
        Ok(())
    }

    pub fn find(&self, key: PlacementKey) -> ServiceResult<Option<Placement>> {
        self.catalog.find(&key)
    }

    pub fn find_all(&self) -> ServiceResult<Vec<Placement>> {
        self.catalog.find_all()
    }

    pub fn insert(&self, placement: &Placement) -> ServiceResult<()> {
        placement.validate()?;
        self.check_references(placement)?;
        self.catalog.insert(placement)
    }

    pub fn update(&self, placement: &Placement) -> ServiceResult<()> {
        placement.validate()?;
        self.check_references(placement)?;
        self.catalog.update(placement)
    }

    pub fn delete(&self, placement: &Placement) -> ServiceResult<()> {
        self.catalog.delete(placement)
    }

    /// Total monetary value of all placed stock.
    pub fn total_stock_value(&self) -> DbResult<f64> {
        self.catalog.repo().total_stock_value()
    }

    /// Occupied shelf slots across the warehouse.
    pub fn occupied_slots(&self) -> DbResult<i64> {
        self.catalog.repo().occupied_slots()
    }

    /// Slots offered by every shelving unit.
    pub fn total_slots(&self) -> DbResult<i64> {
        self.catalog.repo().total_slots()
    }

    /// Occupied and total slots in one pair.
    pub fn slot_usage(&self) -> DbResult<SlotUsage> {
        self.catalog.repo().slot_usage()
    }
}
