//! Warehouse client record.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{Checks, Validate, ValidationError};

// Organization letter, seven digits, control digit or letter.
static CIF_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-HJ-NP-SUVW][0-9]{7}[0-9A-J]$").expect("CIF pattern is valid"));

/// A company storing goods in the warehouse, keyed by its tax ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Natural key, Spanish company tax ID (CIF).
    pub cif: String,
    pub name: String,
    /// Contractual discount, percent, never negative.
    pub discount_pct: f64,
}

impl Client {
    pub fn new(cif: impl Into<String>, name: impl Into<String>, discount_pct: f64) -> Self {
        Self {
            cif: cif.into(),
            name: name.into(),
            discount_pct,
        }
    }
}

impl Validate for Client {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut checks = Checks::new("client");
        checks.require(
            CIF_PATTERN.is_match(&self.cif),
            "client tax id must be a valid CIF",
        );
        checks.require(!self.name.trim().is_empty(), "client name cannot be blank");
        checks.require(
            self.discount_pct >= 0.0,
            "client discount cannot be negative",
        );
        checks.finish()
    }
}
