//! Storage-category shared by zones and products.

use serde::{Deserialize, Serialize};

/// Storage category a zone provides and a product requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageKind {
    /// Refrigerated, above freezing.
    Cold,
    /// Below freezing.
    Frozen,
    /// Ambient, no temperature control.
    Dry,
}

impl StorageKind {
    /// Canonical database text for this kind.
    pub fn as_db_str(self) -> &'static str {
        match self {
            Self::Cold => "cold",
            Self::Frozen => "frozen",
            Self::Dry => "dry",
        }
    }

    /// Parses the canonical database text back into a kind.
    pub fn parse_db_str(value: &str) -> Option<Self> {
        match value {
            "cold" => Some(Self::Cold),
            "frozen" => Some(Self::Frozen),
            "dry" => Some(Self::Dry),
            _ => None,
        }
    }
}
