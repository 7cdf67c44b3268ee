use super::{EntityKind, NewRecord};
use crate::domain::validate::ValidatedFields;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A validated unit submission, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewUnit {
    pub title: String,
    pub branch: String,
    pub year: String,
    pub sem: String,
    pub pattern: String,
    pub unitno: String,
    pub description: String,
    /// Reference document: a Google Drive link or a `.pdf` URL.
    pub url: String,
    /// YouTube video links, in submission order.
    pub youtube: Vec<String>,
    /// Practice questions, in submission order.
    pub question: Vec<String>,
}

/// A stored unit: the learning content for one instructional unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Unit {
    pub id: i32,
    pub title: String,
    pub branch: String,
    pub year: String,
    pub sem: String,
    pub pattern: String,
    pub unitno: String,
    pub description: String,
    pub url: String,
    pub youtube: Vec<String>,
    pub question: Vec<String>,
}

impl Unit {
    pub fn from_new(id: i32, new: NewUnit) -> Self {
        Self {
            id,
            title: new.title,
            branch: new.branch,
            year: new.year,
            sem: new.sem,
            pattern: new.pattern,
            unitno: new.unitno,
            description: new.description,
            url: new.url,
            youtube: new.youtube,
            question: new.question,
        }
    }
}

impl NewRecord for NewUnit {
    const KIND: EntityKind = EntityKind::Unit;

    fn from_fields(mut fields: ValidatedFields) -> Self {
        Self {
            title: fields.take_text("title"),
            branch: fields.take_text("branch"),
            year: fields.take_text("year"),
            sem: fields.take_text("sem"),
            pattern: fields.take_text("pattern"),
            unitno: fields.take_text("unitno"),
            description: fields.take_text("description"),
            url: fields.take_text("url"),
            youtube: fields.take_list("youtube"),
            question: fields.take_list("question"),
        }
    }
}
