use super::{EntityKind, NewRecord};
use crate::domain::validate::ValidatedFields;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A validated semester submission, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewSemester {
    pub title: String,
    pub description: String,
    pub pattern: String,
    pub year: String,
    pub sem: String,
    pub branch: String,
    pub university: String,
    /// Syllabus topics; `null` when the submission carried none.
    pub syllabus: Option<Vec<String>>,
}

/// A stored semester: curriculum metadata for one academic term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Semester {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub pattern: String,
    pub year: String,
    pub sem: String,
    pub branch: String,
    pub university: String,
    pub syllabus: Option<Vec<String>>,
}

impl Semester {
    /// Merges an assigned identity into a validated submission.
    pub fn from_new(id: i32, new: NewSemester) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            pattern: new.pattern,
            year: new.year,
            sem: new.sem,
            branch: new.branch,
            university: new.university,
            syllabus: new.syllabus,
        }
    }
}

impl NewRecord for NewSemester {
    const KIND: EntityKind = EntityKind::Semester;

    fn from_fields(mut fields: ValidatedFields) -> Self {
        Self {
            title: fields.take_text("title"),
            description: fields.take_text("description"),
            pattern: fields.take_text("pattern"),
            year: fields.take_text("year"),
            sem: fields.take_text("sem"),
            branch: fields.take_text("branch"),
            university: fields.take_text("university"),
            syllabus: fields.take_optional_list("syllabus"),
        }
    }
}
