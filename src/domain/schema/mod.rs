//! Declarative record schemas.
//!
//! A schema is a static table of fields. Each entry names the field, its shape,
//! whether it must be present, and the ordered rules applied to its value (or
//! to each item of a list). The validator walks the table uniformly, so adding
//! a rule never means adding a new branch of hand-written checks.

pub mod catalog;
pub mod rules;

pub use rules::Rule;

use crate::domain::model::EntityKind;

/// Primitive shape a field value must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    Text,
    TextList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    /// Absent or `null` values are accepted and normalized to an explicit `None`.
    Optional,
}

/// A single rule plus the message reported when it fails.
#[derive(Debug, Clone, Copy)]
pub struct Check {
    pub rule: Rule,
    pub message: &'static str,
}

/// Minimum item count for list fields.
#[derive(Debug, Clone, Copy)]
pub struct MinItems {
    pub count: usize,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub shape: FieldShape,
    pub presence: Presence,
    /// Reported when a required field is absent, `null`, or blank text.
    pub missing_message: &'static str,
    pub min_items: Option<MinItems>,
    /// Applied in order to a text value, or to every item of a list.
    /// Evaluation of one value stops at its first failed check.
    pub checks: &'static [Check],
}

#[derive(Debug)]
pub struct RecordSchema {
    pub kind: EntityKind,
    pub fields: &'static [FieldSpec],
}

impl RecordSchema {
    /// Returns the process-wide schema for an entity kind.
    pub fn for_kind(kind: EntityKind) -> &'static RecordSchema {
        match kind {
            EntityKind::Semester => &catalog::SEMESTER_SCHEMA,
            EntityKind::Unit => &catalog::UNIT_SCHEMA,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of every field that must be present for a submission to pass.
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields
            .iter()
            .filter(|f| f.presence == Presence::Required)
            .map(|f| f.name)
    }
}
