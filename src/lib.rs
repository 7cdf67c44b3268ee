pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::catalog_service::{CatalogService, ServiceError};
pub use domain::model::{EntityKind, NewSemester, NewUnit, Semester, Unit};
pub use domain::validate::{validate, FieldError, ValidatedRecord, ValidationErrors};
pub use infra::config::{AppConfig, StoreConfig};
pub use storage::{CatalogStore, MemoryStore, PostgresStore};
