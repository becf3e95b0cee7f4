//! Shelving unit record.

use serde::{Deserialize, Serialize};

use super::{Checks, Validate, ValidationError};

/// A shelving unit holding a fixed number of product slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shelf {
    /// Natural key, positive integer.
    pub id: i64,
    /// Total product slots this unit offers.
    pub slots: i64,
}

impl Shelf {
    pub fn new(id: i64, slots: i64) -> Self {
        Self { id, slots }
    }
}

impl Validate for Shelf {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut checks = Checks::new("shelf");
        checks.require(self.id > 0, "shelf id must be greater than 0");
        checks.require(self.slots > 0, "shelf slot count must be greater than 0");
        checks.finish()
    }
}
