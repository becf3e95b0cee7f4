//! Storage zone record.

use serde::{Deserialize, Serialize};

use super::kind::StorageKind;
use super::{valid_zone_letter, Checks, Validate, ValidationError};

/// A lettered storage zone of the warehouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Natural key, a single letter `'A'..='Z'`.
    pub id: char,
    pub kind: StorageKind,
}

impl Zone {
    pub fn new(id: char, kind: StorageKind) -> Self {
        Self { id, kind }
    }
}

impl Validate for Zone {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut checks = Checks::new("zone");
        checks.require(
            valid_zone_letter(self.id),
            "zone id must be a letter between A and Z",
        );
        checks.finish()
    }
}
