//! The catalog service.
//!
//! Sits between the HTTP handlers and the storage engine. Each create is a
//! single validate-then-store step:
//! 1.  Run the raw submission through the validation pipeline.
//! 2.  Hand the typed record to the injected `CatalogStore`.
//! 3.  Return the stored record, or a `ServiceError` the transport layer maps
//!     to a response.

use crate::domain::model::{NewRecord, NewSemester, NewUnit, Semester, Unit};
use crate::domain::validate::{validate_as, ValidationErrors};
use crate::storage::CatalogStore;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The submission broke one or more schema rules. Safe to show the caller.
    #[error("{0}")]
    Validation(ValidationErrors),

    /// Anything that went wrong below validation. Never shown to the caller.
    #[error("storage failure: {0:#}")]
    Storage(#[from] anyhow::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }

    pub async fn health(&self) -> anyhow::Result<()> {
        self.store.ping().await
    }

    pub async fn create_semester(&self, raw: &JsonValue) -> ServiceResult<Semester> {
        let new = checked::<NewSemester>(raw)?;
        let semester = self.store.create_semester(new).await?;
        info!(id = semester.id, title = %semester.title, "semester created");
        Ok(semester)
    }

    pub async fn list_semesters(&self) -> ServiceResult<Vec<Semester>> {
        Ok(self.store.list_semesters().await?)
    }

    pub async fn get_semester(&self, id: i32) -> ServiceResult<Option<Semester>> {
        Ok(self.store.get_semester(id).await?)
    }

    pub async fn create_unit(&self, raw: &JsonValue) -> ServiceResult<Unit> {
        let new = checked::<NewUnit>(raw)?;
        let unit = self.store.create_unit(new).await?;
        info!(id = unit.id, unitno = %unit.unitno, title = %unit.title, "unit created");
        Ok(unit)
    }

    pub async fn list_units(&self) -> ServiceResult<Vec<Unit>> {
        Ok(self.store.list_units().await?)
    }

    pub async fn get_unit(&self, id: i32) -> ServiceResult<Option<Unit>> {
        Ok(self.store.get_unit(id).await?)
    }
}

fn checked<R: NewRecord>(raw: &JsonValue) -> ServiceResult<R> {
    validate_as::<R>(raw).map_err(|errors| {
        let kind = R::KIND;
        warn!(entity = %kind, fields = ?errors.fields(), "submission rejected");
        ServiceError::Validation(errors)
    })
}
