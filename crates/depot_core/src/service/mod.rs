//! Check-then-act domain services.
//!
//! # Responsibility
//! - Enforce validate → existence-check → act for every entity mutation.
//! - Enforce referential checks (dock→zone, placement→product/shelf)
//!   above the persistence layer.
//!
//! # Invariants
//! - Validation runs before any persistence call and aggregates every
//!   violated field rule into one error.
//! - The existence check and the following write are not transactional:
//!   under concurrent callers a lost race surfaces as the driver's
//!   constraint violation (`ServiceError::Db`), not a domain error.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::db::DbError;
use crate::model::ValidationError;

mod catalog;
mod dock;
mod placement;
mod warehouse;

pub use catalog::CatalogService;
pub use dock::DockService;
pub use placement::PlacementService;
pub use warehouse::Warehouse;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug)]
pub enum ServiceError {
    Validation(ValidationError),
    AlreadyExists {
        entity: &'static str,
        key: String,
    },
    NotFound {
        entity: &'static str,
        key: String,
    },
    /// A referenced entity (for example a dock's zone) is absent.
    MissingReference {
        entity: &'static str,
        reference: &'static str,
        key: String,
    },
    Db(DbError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::AlreadyExists { entity, key } => {
                write!(f, "{entity} `{key}` already exists")
            }
            Self::NotFound { entity, key } => write!(f, "{entity} `{key}` does not exist"),
            Self::MissingReference {
                entity,
                reference,
                key,
            } => write!(
                f,
                "{entity} references {reference} `{key}`, which does not exist"
            ),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for ServiceError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}
