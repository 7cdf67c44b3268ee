use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// Field name used for violations that concern the submission as a whole.
pub const ROOT_FIELD: &str = "$root";

/// One violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    /// Position of the offending item when the field is a list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            index: None,
        }
    }

    pub fn at(field: impl Into<String>, index: usize, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            index: Some(index),
        }
    }

    pub fn root(message: impl Into<String>) -> Self {
        Self::new(ROOT_FIELD, message)
    }
}

/// Every violation found in a submission, in schema order.
///
/// Never empty when returned from the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }

    pub fn single(error: FieldError) -> Self {
        Self(vec![error])
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.0
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    /// Distinct field names, in the order their first violation was reported.
    pub fn fields(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for e in &self.0 {
            if !out.contains(&e.field.as_str()) {
                out.push(&e.field);
            }
        }
        out
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s)", self.0.len())?;
        for e in &self.0 {
            match e.index {
                Some(i) => write!(f, "; {}[{}]: {}", e.field, i, e.message)?,
                None => write!(f, "; {}: {}", e.field, e.message)?,
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
