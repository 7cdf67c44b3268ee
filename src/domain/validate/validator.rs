use super::errors::{FieldError, ValidationErrors};
use crate::domain::model::{EntityKind, NewRecord, NewSemester, NewUnit};
use crate::domain::schema::{Check, FieldShape, FieldSpec, Presence, RecordSchema};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// A field value that passed every rule of its schema entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    /// An optional field the submission left out (or sent as `null`).
    Absent,
}

/// Field values keyed by schema field name, produced only on full success.
#[derive(Debug, Default)]
pub struct ValidatedFields {
    values: HashMap<&'static str, FieldValue>,
}

impl ValidatedFields {
    /// Takes a required text field.
    ///
    /// A missing entry means the record's `from_fields` names a field its
    /// schema table does not declare as required text.
    pub fn take_text(&mut self, name: &str) -> String {
        match self.values.remove(name) {
            Some(FieldValue::Text(s)) => s,
            other => {
                debug_assert!(false, "field '{}' is not validated text: {:?}", name, other);
                String::new()
            }
        }
    }

    /// Takes a required list field. Same contract as [`Self::take_text`].
    pub fn take_list(&mut self, name: &str) -> Vec<String> {
        match self.values.remove(name) {
            Some(FieldValue::List(items)) => items,
            other => {
                debug_assert!(false, "field '{}' is not a validated list: {:?}", name, other);
                Vec::new()
            }
        }
    }

    pub fn take_optional_list(&mut self, name: &str) -> Option<Vec<String>> {
        match self.values.remove(name) {
            Some(FieldValue::List(items)) => Some(items),
            _ => None,
        }
    }
}

/// A validated submission of either entity kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedRecord {
    Semester(NewSemester),
    Unit(NewUnit),
}

/// Validates a raw submission against the schema for `kind`.
pub fn validate(kind: EntityKind, raw: &JsonValue) -> Result<ValidatedRecord, ValidationErrors> {
    match kind {
        EntityKind::Semester => validate_as::<NewSemester>(raw).map(ValidatedRecord::Semester),
        EntityKind::Unit => validate_as::<NewUnit>(raw).map(ValidatedRecord::Unit),
    }
}

/// Typed form of [`validate`] for callers that already know the record type.
pub fn validate_as<R: NewRecord>(raw: &JsonValue) -> Result<R, ValidationErrors> {
    validate_fields(R::schema(), raw).map(R::from_fields)
}

/// Walks every field of `schema`, collecting all violations.
///
/// Keys not named by the schema are ignored.
pub fn validate_fields(
    schema: &RecordSchema,
    raw: &JsonValue,
) -> Result<ValidatedFields, ValidationErrors> {
    let obj = match raw.as_object() {
        Some(o) => o,
        None => {
            return Err(ValidationErrors::single(FieldError::root(format!(
                "Expected object, received {}",
                json_type_name(raw)
            ))))
        }
    };

    let mut errors: Vec<FieldError> = Vec::new();
    let mut out = ValidatedFields::default();

    for spec in schema.fields {
        let value = match obj.get(spec.name) {
            None | Some(JsonValue::Null) => {
                match spec.presence {
                    Presence::Required => {
                        errors.push(FieldError::new(spec.name, spec.missing_message))
                    }
                    Presence::Optional => {
                        out.values.insert(spec.name, FieldValue::Absent);
                    }
                }
                continue;
            }
            Some(v) => v,
        };

        let checked = match spec.shape {
            FieldShape::Text => check_text(spec, value, &mut errors),
            FieldShape::TextList => check_list(spec, value, &mut errors),
        };
        if let Some(v) = checked {
            out.values.insert(spec.name, v);
        }
    }

    if errors.is_empty() {
        Ok(out)
    } else {
        Err(ValidationErrors::new(errors))
    }
}

fn check_text(
    spec: &FieldSpec,
    value: &JsonValue,
    errors: &mut Vec<FieldError>,
) -> Option<FieldValue> {
    let Some(s) = value.as_str() else {
        errors.push(FieldError::new(spec.name, type_mismatch("string", value)));
        return None;
    };
    if spec.presence == Presence::Required && s.trim().is_empty() {
        errors.push(FieldError::new(spec.name, spec.missing_message));
        return None;
    }
    if let Some(message) = first_failure(spec.checks, s) {
        errors.push(FieldError::new(spec.name, message));
        return None;
    }
    Some(FieldValue::Text(s.to_string()))
}

fn check_list(
    spec: &FieldSpec,
    value: &JsonValue,
    errors: &mut Vec<FieldError>,
) -> Option<FieldValue> {
    let Some(items) = value.as_array() else {
        errors.push(FieldError::new(spec.name, type_mismatch("array", value)));
        return None;
    };

    let before = errors.len();
    if let Some(min) = spec.min_items {
        if items.len() < min.count {
            errors.push(FieldError::new(spec.name, min.message));
        }
    }

    let mut collected: Vec<String> = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item.as_str() {
            Some(s) => match first_failure(spec.checks, s) {
                Some(message) => errors.push(FieldError::at(spec.name, index, message)),
                None => collected.push(s.to_string()),
            },
            None => errors.push(FieldError::at(spec.name, index, type_mismatch("string", item))),
        }
    }

    if errors.len() == before {
        Some(FieldValue::List(collected))
    } else {
        None
    }
}

fn first_failure(checks: &[Check], value: &str) -> Option<&'static str> {
    checks.iter().find(|c| !c.rule.check(value)).map(|c| c.message)
}

fn type_mismatch(expected: &str, got: &JsonValue) -> String {
    format!("Expected {}, received {}", expected, json_type_name(got))
}

fn json_type_name(v: &JsonValue) -> &'static str {
    match v {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
