//! Tasks with an optional due date and a completion flag.

use serde::{Deserialize, Serialize};

use crate::resource::Resource;

/// A task record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Fields needed to create a task. `completed` may be omitted; the
/// backend then stores the task as open.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// Partial update for a task.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl Resource for Task {
    const SEGMENT: &'static str = "tasks";
    const LABEL: &'static str = "task";

    type Draft = NewTask;
    type Patch = TaskPatch;

    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_decodes_with_and_without_due_date() {
        let dated: Task = serde_json::from_str(
            r#"{"id":1,"title":"Ship","dueDate":"2024-06-01","completed":false}"#,
        )
        .unwrap();
        let open_ended: Task =
            serde_json::from_str(r#"{"id":2,"title":"Someday","completed":true}"#).unwrap();

        assert_eq!(dated.due_date.as_deref(), Some("2024-06-01"));
        assert!(open_ended.due_date.is_none());
        assert!(open_ended.completed);
    }

    #[test]
    fn test_draft_without_completed_omits_the_field() {
        let draft = NewTask {
            title: "Ship".into(),
            description: None,
            due_date: Some("2024-06-01".into()),
            completed: None,
        };

        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"title": "Ship", "dueDate": "2024-06-01"})
        );
    }

    #[test]
    fn test_patch_can_flip_completed_alone() {
        let patch = TaskPatch {
            completed: Some(true),
            ..TaskPatch::default()
        };

        let body = serde_json::to_value(&patch).unwrap();
        assert_eq!(body, serde_json::json!({"completed": true}));
    }
}
