//! Domain records for the course catalog.
//!
//! Every entity comes in two forms: a `New*` record produced by the validation
//! pipeline (no identity yet) and the stored record carrying the `id` assigned
//! by the storage engine.

pub mod semester;
pub mod unit;

pub use semester::{NewSemester, Semester};
pub use unit::{NewUnit, Unit};

use crate::domain::schema::RecordSchema;
use crate::domain::validate::ValidatedFields;
use std::fmt;

/// Tag selecting which record schema applies to a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Semester,
    Unit,
}

impl EntityKind {
    /// Returns the name of the table (or in-memory map) holding this entity.
    pub fn table_name(&self) -> &'static str {
        match self {
            EntityKind::Semester => "semesters",
            EntityKind::Unit => "units",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Semester => write!(f, "Semester"),
            EntityKind::Unit => write!(f, "Unit"),
        }
    }
}

/// Contract for any submission type a client can create.
///
/// The schema drives validation; `from_fields` only assembles the typed record
/// once every rule in that schema has passed.
pub trait NewRecord: Sized + Send + 'static {
    /// Which entity this submission creates.
    const KIND: EntityKind;

    /// Returns the field table used to validate raw submissions.
    fn schema() -> &'static RecordSchema {
        RecordSchema::for_kind(Self::KIND)
    }

    /// Builds the typed record from fields that already passed validation.
    fn from_fields(fields: ValidatedFields) -> Self;
}
