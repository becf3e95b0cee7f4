//! Generic check-then-act service for one entity type.

use log::debug;

use crate::model::Validate;
use crate::repo::{EntityMapping, TableRepository};

use super::{ServiceError, ServiceResult};

/// Validate → existence-check → act wrapper over one repository.
///
/// The check and the write are two separate statements on two separate
/// connections. Two concurrent callers can both pass the absence check;
/// the loser's insert then fails with the driver's duplicate-key error,
/// surfaced as [`ServiceError::Db`] rather than `AlreadyExists`.
pub struct CatalogService<E: EntityMapping + Validate> {
    repo: TableRepository<E>,
}

impl<E: EntityMapping + Validate> CatalogService<E> {
    pub fn new(repo: TableRepository<E>) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &TableRepository<E> {
        &self.repo
    }

    /// Looks an entity up by key. Absence is `Ok(None)`, not an error.
    pub fn find(&self, key: &E::Key) -> ServiceResult<Option<E>> {
        Ok(self.repo.find_by_key(key)?)
    }

    pub fn find_all(&self) -> ServiceResult<Vec<E>> {
        Ok(self.repo.find_all()?)
    }

    /// Inserts a validated entity that must not exist yet.
    pub fn insert(&self, entity: &E) -> ServiceResult<()> {
        entity.validate()?;
        let key = entity.key();
        if self.repo.exists(&key)? {
            return Err(ServiceError::AlreadyExists {
                entity: E::ENTITY,
                key: key.to_string(),
            });
        }
        self.repo.insert(entity)?;
        debug!(
            "event=entity_insert module=service entity={} key={key} status=ok",
            E::ENTITY
        );
        Ok(())
    }

    /// Updates a validated entity that must already exist.
    pub fn update(&self, entity: &E) -> ServiceResult<()> {
        entity.validate()?;
        let key = entity.key();
        if !self.repo.exists(&key)? {
            return Err(ServiceError::NotFound {
                entity: E::ENTITY,
                key: key.to_string(),
            });
        }
        self.repo.update(entity)?;
        debug!(
            "event=entity_update module=service entity={} key={key} status=ok",
            E::ENTITY
        );
        Ok(())
    }

    /// Deletes a validated entity that must already exist.
    pub fn delete(&self, entity: &E) -> ServiceResult<()> {
        entity.validate()?;
        let key = entity.key();
        if !self.repo.exists(&key)? {
            return Err(ServiceError::NotFound {
                entity: E::ENTITY,
                key: key.to_string(),
            });
        }
        self.repo.delete(entity)?;
        debug!(
            "event=entity_delete module=service entity={} key={key} status=ok",
            E::ENTITY
        );
        Ok(())
    }
}
