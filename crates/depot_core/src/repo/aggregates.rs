//! Warehouse-wide aggregate queries over placements.
//!
//! These read across the placement, product and shelf tables; they live
//! on the placement repository because placements are the fact table the
//! figures derive from.

use serde::{Deserialize, Serialize};

use crate::db::DbResult;
use crate::model::Placement;

use super::TableRepository;

/// Occupied versus total shelf slots across the warehouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotUsage {
    pub occupied: i64,
    pub total: i64,
}

impl TableRepository<Placement> {
    /// Total monetary value of all placed stock (Σ price × quantity).
    pub fn total_stock_value(&self) -> DbResult<f64> {
        let values = self.store().query(
            "SELECT COALESCE(SUM(pr.price * pl.quantity), 0) \
             FROM placement pl JOIN product pr ON pr.id = pl.product_id",
            [],
            |row| row.get::<_, f64>(0),
        )?;
        Ok(values.into_iter().next().unwrap_or(0.0))
    }

    /// Shelf slots currently holding stock (Σ placement quantity).
    pub fn occupied_slots(&self) -> DbResult<i64> {
        let counts = self.store().query(
            "SELECT COALESCE(SUM(quantity), 0) FROM placement",
            [],
            |row| row.get::<_, i64>(0),
        )?;
        Ok(counts.into_iter().next().unwrap_or(0))
    }

    /// Slots offered by every shelving unit (Σ shelf slots).
    pub fn total_slots(&self) -> DbResult<i64> {
        let counts = self
            .store()
            .query("SELECT COALESCE(SUM(slots), 0) FROM shelf", [], |row| {
                row.get::<_, i64>(0)
            })?;
        Ok(counts.into_iter().next().unwrap_or(0))
    }

    /// Occupied and total slots in one pair.
    pub fn slot_usage(&self) -> DbResult<SlotUsage> {
        Ok(SlotUsage {
            occupied: self.occupied_slots()?,
            total: self.total_slots()?,
        })
    }
}
