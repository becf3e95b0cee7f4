//! Product catalog record.

use serde::{Deserialize, Serialize};

use super::kind::StorageKind;
use super::{Checks, Validate, ValidationError};

/// A product that can be stored on warehouse shelves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Natural key, positive integer.
    pub id: i64,
    pub name: String,
    /// Unit price, never negative.
    pub price: f64,
    /// Storage category this product requires.
    pub kind: StorageKind,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>, price: f64, kind: StorageKind) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            kind,
        }
    }
}

impl Validate for Product {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut checks = Checks::new("product");
        checks.require(self.id > 0, "product id must be greater than 0");
        checks.require(
            !self.name.trim().is_empty(),
            "product name cannot be blank",
        );
        checks.require(self.price >= 0.0, "product price cannot be negative");
        checks.finish()
    }
}
