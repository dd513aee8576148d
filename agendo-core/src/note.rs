//! Free-form notes.

use serde::{Deserialize, Serialize};

use crate::resource::Resource;

/// A note record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Fields needed to create a note.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    pub title: String,
    pub content: String,
}

/// Partial update for a note.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Resource for Note {
    const SEGMENT: &'static str = "notes";
    const LABEL: &'static str = "note";

    type Draft = NewNote;
    type Patch = NotePatch;

    fn id(&self) -> i64 {
        self.id
    }
}
