//! Product-on-shelf placement record.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::{Checks, Validate, ValidationError};

/// A quantity of one product stored on one shelving unit.
///
/// Composite natural key: `(product_id, shelf_id)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub product_id: i64,
    pub shelf_id: i64,
    /// Units of the product on the shelf, always positive.
    pub quantity: i64,
}

impl Placement {
    pub fn new(product_id: i64, shelf_id: i64, quantity: i64) -> Self {
        Self {
            product_id,
            shelf_id,
            quantity,
        }
    }

    pub fn key(&self) -> PlacementKey {
        PlacementKey {
            product_id: self.product_id,
            shelf_id: self.shelf_id,
        }
    }
}

/// Composite lookup key for a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacementKey {
    pub product_id: i64,
    pub shelf_id: i64,
}

impl Display for PlacementKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "product {} on shelf {}", self.product_id, self.shelf_id)
    }
}

impl Validate for Placement {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut checks = Checks::new("placement");
        checks.require(self.product_id > 0, "product id must be greater than 0");
        checks.require(self.shelf_id > 0, "shelf id must be greater than 0");
        checks.require(self.quantity > 0, "quantity must be greater than 0");
        checks.finish()
    }
}
