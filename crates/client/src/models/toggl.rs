//! Models for the Toggl Track API v9.
//!
//! Timestamps are ISO 8601 strings; durations are integer seconds with the
//! `-1` sentinel meaning "currently running". Workspaces and projects are
//! fetched read-only and never mutated by this crate.

use serde::{Deserialize, Serialize};

/// A tracked work interval.
///
/// A running timer has `duration == -1` and no `stop` timestamp; the duration
/// is undefined until the entry is stopped. At most one running entry exists
/// per account, enforced by the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: i64,
    pub workspace_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<i64>,
    #[serde(default)]
    pub billable: bool,
    /// Start timestamp, ISO 8601.
    pub start: String,
    /// Stop timestamp, ISO 8601; absent while the timer is running.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<String>,
    /// Duration in seconds; `-1` while the timer is running.
    pub duration: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_deleted_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

impl TimeEntry {
    /// Whether this entry is a currently running timer.
    pub fn is_running(&self) -> bool {
        self.duration == -1 && self.stop.is_none()
    }
}

/// Body for creating a time entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTimeEntryRequest {
    pub workspace_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    /// Start timestamp, ISO 8601.
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<String>,
    /// Duration in seconds, or `-1` to start a running timer.
    pub duration: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub created_with: String,
}

/// Body for updating an existing time entry. Only the populated fields are
/// sent; the workspace id is always re-serialized to satisfy the remote
/// API's consistency checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateTimeEntryRequest {
    pub workspace_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// An organizational workspace, referenced by id from time entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_admins_may_create_projects: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounding: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounding_minutes: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// A project inside a workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub workspace_id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_hours: Option<i32>,
}

/// Structured error body returned by the Toggl API on non-success responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TogglApiError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_entry_detection() {
        let json = r#"{
            "id": 1001,
            "workspace_id": 123,
            "start": "2024-03-01T09:00:00Z",
            "duration": -1,
            "description": "writing spec"
        }"#;

        let entry: TimeEntry = serde_json::from_str(json).unwrap();
        assert!(entry.is_running());
        assert!(entry.stop.is_none());
        assert_eq!(entry.duration, -1);
    }

    #[test]
    fn test_stopped_entry_is_not_running() {
        let json = r#"{
            "id": 1002,
            "workspace_id": 123,
            "start": "2024-03-01T09:00:00Z",
            "stop": "2024-03-01T10:30:00Z",
            "duration": 5400
        }"#;

        let entry: TimeEntry = serde_json::from_str(json).unwrap();
        assert!(!entry.is_running());
        assert_eq!(entry.duration, 5400);
    }

    #[test]
    fn test_create_request_round_trip_keeps_sentinel() {
        let request = CreateTimeEntryRequest {
            workspace_id: 123,
            project_id: None,
            task_id: None,
            billable: None,
            start: "2024-03-01T09:00:00Z".to_string(),
            stop: None,
            duration: -1,
            description: Some("writing spec".to_string()),
            tags: None,
            created_with: "statline-mcp".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["duration"], -1);
        assert_eq!(json["workspace_id"], 123);
        // Absent optionals are omitted from the wire body entirely.
        assert!(json.get("stop").is_none());
        assert!(json.get("project_id").is_none());
    }

    #[test]
    fn test_update_request_serializes_workspace_id_even_when_bare() {
        let request = UpdateTimeEntryRequest {
            workspace_id: 123,
            description: Some("renamed".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["workspace_id"], 123);
        assert_eq!(json["description"], "renamed");
        assert!(json.get("duration").is_none());
    }
}
