//! Calendar events as the backend stores them.

use serde::{Deserialize, Serialize};

use crate::resource::Resource;

/// An event record.
///
/// Timestamps are kept as the opaque strings the backend sends; the
/// client never does date arithmetic on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Fields needed to create an event. The account id is attached by the
/// client when the request is sent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_time: String,
    pub end_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Partial update for an event. Absent fields are left untouched by the
/// backend, so `None` must not serialize as `null`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Resource for Event {
    const SEGMENT: &'static str = "events";
    const LABEL: &'static str = "event";

    type Draft = NewEvent;
    type Patch = EventPatch;

    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_decodes_camel_case_fields() {
        let event: Event = serde_json::from_str(
            r#"{"id":3,"title":"Standup","startTime":"2024-05-01T09:00:00Z",
                "endTime":"2024-05-01T09:15:00Z","location":"Room 2",
                "createdAt":"2024-04-30","updatedAt":"2024-04-30"}"#,
        )
        .unwrap();

        assert_eq!(event.id, 3);
        assert_eq!(event.start_time, "2024-05-01T09:00:00Z");
        assert_eq!(event.location.as_deref(), Some("Room 2"));
        assert!(event.description.is_none());
    }

    #[test]
    fn test_patch_omits_unset_fields() {
        let patch = EventPatch {
            title: Some("Retro".into()),
            ..EventPatch::default()
        };

        let body = serde_json::to_value(&patch).unwrap();
        assert_eq!(body, serde_json::json!({"title": "Retro"}));
    }
}
