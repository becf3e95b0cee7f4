//! Warehouse entity records and field validation.
//!
//! # Responsibility
//! - Define the plain value records persisted by the repositories.
//! - Collect every violated field constraint into one aggregated error.
//!
//! # Invariants
//! - Validation is eager: all fields are checked and all violation
//!   messages collected, never fail-fast on the first.
//! - Records are owned by their callers; no layer retains them beyond a
//!   single call.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod client;
pub mod dock;
pub mod kind;
pub mod placement;
pub mod product;
pub mod shelf;
pub mod zone;

pub use client::Client;
pub use dock::Dock;
pub use kind::StorageKind;
pub use placement::{Placement, PlacementKey};
pub use product::Product;
pub use shelf::Shelf;
pub use zone::Zone;

/// Aggregated field-constraint violations for one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    entity: &'static str,
    violations: Vec<String>,
}

impl ValidationError {
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Every violated constraint, one message per field rule.
    pub fn violations(&self) -> &[String] {
        &self.violations
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "invalid {}:", self.entity)?;
        for (index, violation) in self.violations.iter().enumerate() {
            if index + 1 < self.violations.len() {
                writeln!(f, "  {violation}")?;
            } else {
                write!(f, "  {violation}")?;
            }
        }
        Ok(())
    }
}

impl Error for ValidationError {}

/// Per-entity pure validation entry point.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Eager rule collector backing every `Validate` implementation.
pub(crate) struct Checks {
    entity: &'static str,
    violations: Vec<String>,
}

impl Checks {
    pub(crate) fn new(entity: &'static str) -> Self {
        Self {
            entity,
            violations: Vec::new(),
        }
    }

    pub(crate) fn require(&mut self, ok: bool, message: impl Into<String>) {
        if !ok {
            self.violations.push(message.into());
        }
    }

    pub(crate) fn finish(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                entity: self.entity,
                violations: self.violations,
            })
        }
    }
}

/// Whether `id` is a valid zone letter (`'A'..='Z'`).
pub(crate) fn valid_zone_letter(id: char) -> bool {
    id.is_ascii_uppercase()
}
