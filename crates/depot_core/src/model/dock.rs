//! Loading dock record.

use serde::{Deserialize, Serialize};

use super::{valid_zone_letter, Checks, Validate, ValidationError};

/// A loading dock attached to one storage zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dock {
    /// Natural key, positive integer.
    pub id: i64,
    /// Zone this dock serves.
    pub zone_id: char,
}

impl Dock {
    pub fn new(id: i64, zone_id: char) -> Self {
        Self { id, zone_id }
    }
}

impl Validate for Dock {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut checks = Checks::new("dock");
        checks.require(self.id > 0, "dock id must be greater than 0");
        checks.require(
            valid_zone_letter(self.zone_id),
            "dock zone id must be a letter between A and Z",
        );
        checks.finish()
    }
}
