//! Storage engines for catalog records.
//!
//! Handlers never touch a store directly; they go through `CatalogService`,
//! which holds one `Arc<dyn CatalogStore>` constructed at process start.

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

use crate::domain::model::{NewSemester, NewUnit, Semester, Unit};
use async_trait::async_trait;

/// Identity-assigning, append-only store for semesters and units.
///
/// Any implementation must guarantee:
/// - ids start at 1 and strictly increase per entity type, never reused,
///   even when `create_*` calls race;
/// - `list_*` returns every retained record in insertion (= id) order.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn create_semester(&self, semester: NewSemester) -> anyhow::Result<Semester>;
    async fn list_semesters(&self) -> anyhow::Result<Vec<Semester>>;
    async fn get_semester(&self, id: i32) -> anyhow::Result<Option<Semester>>;

    async fn create_unit(&self, unit: NewUnit) -> anyhow::Result<Unit>;
    async fn list_units(&self) -> anyhow::Result<Vec<Unit>>;
    async fn get_unit(&self, id: i32) -> anyhow::Result<Option<Unit>>;

    /// Verifies the backing store is reachable.
    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Short backend name for logs and the health endpoint.
    fn backend(&self) -> &'static str;
}
