//! Field tables for the two catalog entities.

use super::{Check, FieldShape, FieldSpec, MinItems, Presence, RecordSchema, Rule};
use crate::domain::model::EntityKind;

const DOCUMENT_URL: &[Check] = &[
    Check {
        rule: Rule::Url,
        message: "Invalid URL",
    },
    Check {
        rule: Rule::DocumentLink,
        message: "Must be a Google Drive link or PDF URL",
    },
];

const YOUTUBE_URL: &[Check] = &[
    Check {
        rule: Rule::Url,
        message: "Invalid YouTube URL",
    },
    Check {
        rule: Rule::YoutubeLink,
        message: "Must be a valid YouTube URL",
    },
];

const fn text(name: &'static str, missing_message: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        shape: FieldShape::Text,
        presence: Presence::Required,
        missing_message,
        min_items: None,
        checks: &[],
    }
}

pub static SEMESTER_SCHEMA: RecordSchema = RecordSchema {
    kind: EntityKind::Semester,
    fields: &[
        text("title", "Title is required"),
        text("description", "Description is required"),
        text("pattern", "Pattern is required"),
        text("year", "Year is required"),
        text("sem", "Semester is required"),
        text("branch", "Branch is required"),
        text("university", "University is required"),
        FieldSpec {
            name: "syllabus",
            shape: FieldShape::TextList,
            presence: Presence::Optional,
            missing_message: "Syllabus is required",
            min_items: None,
            checks: &[Check {
                rule: Rule::NonEmpty,
                message: "Syllabus topic must not be empty",
            }],
        },
    ],
};

pub static UNIT_SCHEMA: RecordSchema = RecordSchema {
    kind: EntityKind::Unit,
    fields: &[
        text("title", "Title is required"),
        text("branch", "Branch is required"),
        text("year", "Year is required"),
        text("sem", "Semester is required"),
        text("pattern", "Pattern is required"),
        text("unitno", "Unit number is required"),
        text("description", "Description is required"),
        FieldSpec {
            name: "url",
            shape: FieldShape::Text,
            presence: Presence::Required,
            missing_message: "URL is required",
            min_items: None,
            checks: DOCUMENT_URL,
        },
        FieldSpec {
            name: "youtube",
            shape: FieldShape::TextList,
            presence: Presence::Required,
            missing_message: "At least one YouTube video is required",
            min_items: Some(MinItems {
                count: 1,
                message: "At least one YouTube video is required",
            }),
            checks: YOUTUBE_URL,
        },
        FieldSpec {
            name: "question",
            shape: FieldShape::TextList,
            presence: Presence::Required,
            missing_message: "At least one practice question is required",
            min_items: Some(MinItems {
                count: 1,
                message: "At least one practice question is required",
            }),
            checks: &[Check {
                rule: Rule::NonEmpty,
                message: "Practice question must not be empty",
            }],
        },
    ],
};
