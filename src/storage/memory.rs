//! In-process reference store. Records are lost on restart.

use super::CatalogStore;
use crate::domain::model::{EntityKind, NewSemester, NewUnit, Semester, Unit};
use anyhow::anyhow;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// One entity table: the id counter and the rows it has handed out.
///
/// Both live behind the same lock so increment and insert are one step.
struct Table<T> {
    next_id: i32,
    rows: BTreeMap<i32, T>,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }

    fn insert_with(&mut self, kind: EntityKind, build: impl FnOnce(i32) -> T) -> anyhow::Result<T> {
        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or_else(|| anyhow!("id space exhausted for table '{}'", kind.table_name()))?;
        let row = build(id);
        self.rows.insert(id, row.clone());
        Ok(row)
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn get(&self, id: i32) -> Option<T> {
        self.rows.get(&id).cloned()
    }
}

pub struct MemoryStore {
    semesters: RwLock<Table<Semester>>,
    units: RwLock<Table<Unit>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            semesters: RwLock::new(Table::new()),
            units: RwLock::new(Table::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn create_semester(&self, semester: NewSemester) -> anyhow::Result<Semester> {
        let mut table = self.semesters.write().await;
        table.insert_with(EntityKind::Semester, |id| Semester::from_new(id, semester))
    }

    async fn list_semesters(&self) -> anyhow::Result<Vec<Semester>> {
        Ok(self.semesters.read().await.all())
    }

    async fn get_semester(&self, id: i32) -> anyhow::Result<Option<Semester>> {
        Ok(self.semesters.read().await.get(id))
    }

    async fn create_unit(&self, unit: NewUnit) -> anyhow::Result<Unit> {
        let mut table = self.units.write().await;
        table.insert_with(EntityKind::Unit, |id| Unit::from_new(id, unit))
    }

    async fn list_units(&self) -> anyhow::Result<Vec<Unit>> {
        Ok(self.units.read().await.all())
    }

    async fn get_unit(&self, id: i32) -> anyhow::Result<Option<Unit>> {
        Ok(self.units.read().await.get(id))
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
