//! Validation pipeline: untrusted JSON in, typed record or every violation out.

pub mod errors;
pub mod validator;

pub use errors::{FieldError, ValidationErrors, ROOT_FIELD};
pub use validator::{
    validate, validate_as, validate_fields, FieldValue, ValidatedFields, ValidatedRecord,
};
