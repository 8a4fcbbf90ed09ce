// Toggl Track tools: workspaces, projects, and time entry management

use crate::envelope::{guard, ToolResult};
use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    json_schema_boolean, json_schema_integer, json_schema_object, json_schema_string, Tool,
};
use anyhow::Result;
use chrono::DateTime;
use serde::Deserialize;
use statline_client::{CreateTimeEntryRequest, TimeEntry, TogglClient, UpdateTimeEntryRequest};
use std::sync::Arc;

/// Marker sent in the `created_with` field of created entries.
const CREATED_WITH: &str = "statline-mcp";

/// List the workspaces available to the configured account.
pub struct TogglWorkspacesTool {
    client: Arc<TogglClient>,
}

impl TogglWorkspacesTool {
    pub fn new(client: Arc<TogglClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for TogglWorkspacesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_workspaces".to_string(),
            description: "Gets all Toggl workspaces available to the authenticated user"
                .to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        let client = self.client.clone();
        let result = guard(async move {
            let workspaces = client.get_workspaces().await?;
            let message = if workspaces.is_empty() {
                "No workspaces found.".to_string()
            } else {
                let names: Vec<String> = workspaces
                    .iter()
                    .map(|w| format!("• {} (ID: {})", w.name, w.id))
                    .collect();
                format!("Found {} workspace(s):\n{}", workspaces.len(), names.join("\n"))
            };
            Ok(ToolResult::ok(workspaces, message))
        })
        .await;
        result.into_call_result()
    }
}

#[derive(Debug, Deserialize)]
struct WorkspaceArgs {
    workspace_id: i64,
}

/// List the projects in a workspace.
pub struct TogglProjectsTool {
    client: Arc<TogglClient>,
}

impl TogglProjectsTool {
    pub fn new(client: Arc<TogglClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for TogglProjectsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_projects".to_string(),
            description: "Gets all projects in a Toggl workspace".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "workspace_id": json_schema_integer("The Toggl workspace ID")
                }),
                vec!["workspace_id"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let result = match serde_json::from_value::<WorkspaceArgs>(arguments) {
            Ok(args) => {
                let client = self.client.clone();
                guard(async move {
                    let projects = client.get_projects(args.workspace_id).await?;
                    let message = if projects.is_empty() {
                        "No projects found in this workspace.".to_string()
                    } else {
                        let names: Vec<String> = projects
                            .iter()
                            .map(|p| format!("• {} (ID: {})", p.name, p.id))
                            .collect();
                        format!("Found {} project(s):\n{}", projects.len(), names.join("\n"))
                    };
                    Ok(ToolResult::ok(projects, message))
                })
                .await
            }
            Err(e) => ToolResult::err(format!("Invalid arguments: {e}")),
        };
        result.into_call_result()
    }
}

#[derive(Debug, Default, Deserialize)]
struct TimeEntriesArgs {
    #[serde(default)]
    start_date: Option<String>,
    #[serde(default)]
    end_date: Option<String>,
}

/// List time entries, optionally bounded by dates.
pub struct TogglTimeEntriesTool {
    client: Arc<TogglClient>,
}

impl TogglTimeEntriesTool {
    pub fn new(client: Arc<TogglClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for TogglTimeEntriesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_time_entries".to_string(),
            description: "Gets Toggl time entries, optionally filtered by a date range \
                          (defaults to today when no dates are given)"
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "start_date": json_schema_string("Start date filter in YYYY-MM-DD format"),
                    "end_date": json_schema_string("End date filter in YYYY-MM-DD format")
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let result = match serde_json::from_value::<TimeEntriesArgs>(arguments) {
            Ok(args) => {
                let client = self.client.clone();
                guard(async move {
                    let entries = client
                        .get_time_entries(args.start_date.as_deref(), args.end_date.as_deref())
                        .await?;
                    let message = if entries.is_empty() {
                        "No time entries found for this period.".to_string()
                    } else {
                        let tracked: i64 =
                            entries.iter().map(|e| e.duration.max(0)).sum();
                        format!(
                            "Found {} time entries, {} tracked.",
                            entries.len(),
                            format_duration(tracked)
                        )
                    };
                    Ok(ToolResult::ok(entries, message))
                })
                .await
            }
            Err(e) => ToolResult::err(format!("Invalid arguments: {e}")),
        };
        result.into_call_result()
    }
}

/// Report the currently running timer, if any.
pub struct TogglCurrentTimerTool {
    client: Arc<TogglClient>,
}

impl TogglCurrentTimerTool {
    pub fn new(client: Arc<TogglClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for TogglCurrentTimerTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_current_timer".to_string(),
            description: "Gets the currently running Toggl timer, if one is active".to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        let client = self.client.clone();
        let result = guard(async move {
            match client.get_current_time_entry().await? {
                Some(entry) => {
                    let message = format!(
                        "Timer running: '{}' (started {})",
                        describe(&entry),
                        entry.start
                    );
                    Ok(ToolResult::ok(entry, message))
                }
                None => Ok(ToolResult::empty("No timer is currently running.")),
            }
        })
        .await;
        result.into_call_result()
    }
}

#[derive(Debug, Deserialize)]
struct StartTimerArgs {
    workspace_id: i64,
    description: String,
    #[serde(default)]
    project_id: Option<i64>,
    #[serde(default)]
    tags: Option<String>,
}

/// Start a running timer.
pub struct TogglStartTimerTool {
    client: Arc<TogglClient>,
}

impl TogglStartTimerTool {
    pub fn new(client: Arc<TogglClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for TogglStartTimerTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "start_timer".to_string(),
            description: "Starts a new running Toggl timer with the given description"
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "workspace_id": json_schema_integer("The Toggl workspace ID"),
                    "description": json_schema_string("Description of the work being tracked"),
                    "project_id": json_schema_integer("Optional project ID to assign"),
                    "tags": json_schema_string("Optional comma-separated list of tags")
                }),
                vec!["workspace_id", "description"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let result = match serde_json::from_value::<StartTimerArgs>(arguments) {
            Ok(args) => {
                let client = self.client.clone();
                guard(async move {
                    let tags = split_tags(args.tags.as_deref());
                    let entry = client
                        .start_timer(args.workspace_id, &args.description, args.project_id, tags)
                        .await?;
                    let message =
                        format!("Timer started: '{}' (ID: {})", describe(&entry), entry.id);
                    Ok(ToolResult::ok(entry, message))
                })
                .await
            }
            Err(e) => ToolResult::err(format!("Invalid arguments: {e}")),
        };
        result.into_call_result()
    }
}

/// Stop the currently running timer.
pub struct TogglStopTimerTool {
    client: Arc<TogglClient>,
}

impl TogglStopTimerTool {
    pub fn new(client: Arc<TogglClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for TogglStopTimerTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "stop_timer".to_string(),
            description: "Stops the currently running Toggl timer".to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        let client = self.client.clone();
        let result = guard(async move {
            let Some(running) = client.get_current_time_entry().await? else {
                return Ok(ToolResult::err("No timer is currently running."));
            };

            let stopped = client
                .stop_time_entry(running.workspace_id, running.id)
                .await?;
            let message = format!(
                "Timer stopped: '{}' ({})",
                describe(&stopped),
                format_duration(stopped.duration)
            );
            Ok(ToolResult::ok(stopped, message))
        })
        .await;
        result.into_call_result()
    }
}

#[derive(Debug, Deserialize)]
struct CreateTimeEntryArgs {
    workspace_id: i64,
    description: String,
    /// ISO 8601 start timestamp.
    start: String,
    /// ISO 8601 stop timestamp.
    stop: String,
    #[serde(default)]
    project_id: Option<i64>,
    #[serde(default)]
    billable: Option<bool>,
    #[serde(default)]
    tags: Option<String>,
}

/// Create a completed time entry with explicit start and stop times.
pub struct TogglCreateTimeEntryTool {
    client: Arc<TogglClient>,
}

impl TogglCreateTimeEntryTool {
    pub fn new(client: Arc<TogglClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for TogglCreateTimeEntryTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "create_time_entry".to_string(),
            description: "Creates a completed Toggl time entry with explicit start and stop \
                          times"
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "workspace_id": json_schema_integer("The Toggl workspace ID"),
                    "description": json_schema_string("Description of the work"),
                    "start": json_schema_string("Start time in ISO 8601 format"),
                    "stop": json_schema_string("Stop time in ISO 8601 format"),
                    "project_id": json_schema_integer("Optional project ID to assign"),
                    "billable": json_schema_boolean("Whether the entry is billable"),
                    "tags": json_schema_string("Optional comma-separated list of tags")
                }),
                vec!["workspace_id", "description", "start", "stop"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let result = match serde_json::from_value::<CreateTimeEntryArgs>(arguments) {
            Ok(args) => match entry_bounds(&args.start, &args.stop) {
                Ok(duration) => {
                    let client = self.client.clone();
                    guard(async move {
                        let request = CreateTimeEntryRequest {
                            workspace_id: args.workspace_id,
                            project_id: args.project_id,
                            task_id: None,
                            billable: args.billable,
                            start: args.start,
                            stop: Some(args.stop),
                            duration,
                            description: Some(args.description),
                            tags: split_tags(args.tags.as_deref()),
                            created_with: CREATED_WITH.to_string(),
                        };

                        let entry = client.create_time_entry(args.workspace_id, request).await?;
                        let message = format!(
                            "Time entry created: '{}' (ID: {}, {})",
                            describe(&entry),
                            entry.id,
                            format_duration(entry.duration)
                        );
                        Ok(ToolResult::ok(entry, message))
                    })
                    .await
                }
                Err(e) => ToolResult::err(e),
            },
            Err(e) => ToolResult::err(format!("Invalid arguments: {e}")),
        };
        result.into_call_result()
    }
}

#[derive(Debug, Deserialize)]
struct UpdateTimeEntryArgs {
    workspace_id: i64,
    time_entry_id: i64,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    start: Option<String>,
    #[serde(default)]
    stop: Option<String>,
    #[serde(default)]
    project_id: Option<i64>,
    #[serde(default)]
    billable: Option<bool>,
    #[serde(default)]
    tags: Option<String>,
}

/// Update fields on an existing time entry.
pub struct TogglUpdateTimeEntryTool {
    client: Arc<TogglClient>,
}

impl TogglUpdateTimeEntryTool {
    pub fn new(client: Arc<TogglClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for TogglUpdateTimeEntryTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "update_time_entry".to_string(),
            description: "Updates an existing Toggl time entry; only the provided fields are \
                          changed"
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "workspace_id": json_schema_integer("The Toggl workspace ID"),
                    "time_entry_id": json_schema_integer("The ID of the time entry to update"),
                    "description": json_schema_string("New description"),
                    "start": json_schema_string("New start time in ISO 8601 format"),
                    "stop": json_schema_string("New stop time in ISO 8601 format"),
                    "project_id": json_schema_integer("New project ID"),
                    "billable": json_schema_boolean("New billable flag"),
                    "tags": json_schema_string("New comma-separated list of tags")
                }),
                vec!["workspace_id", "time_entry_id"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let result = match serde_json::from_value::<UpdateTimeEntryArgs>(arguments) {
            Ok(args) => {
                let client = self.client.clone();
                guard(async move {
                    let request = UpdateTimeEntryRequest {
                        workspace_id: args.workspace_id,
                        project_id: args.project_id,
                        task_id: None,
                        billable: args.billable,
                        start: args.start,
                        stop: args.stop,
                        duration: None,
                        description: args.description,
                        tags: split_tags(args.tags.as_deref()),
                    };

                    let entry = client
                        .update_time_entry(args.workspace_id, args.time_entry_id, request)
                        .await?;
                    let message =
                        format!("Time entry updated: '{}' (ID: {})", describe(&entry), entry.id);
                    Ok(ToolResult::ok(entry, message))
                })
                .await
            }
            Err(e) => ToolResult::err(format!("Invalid arguments: {e}")),
        };
        result.into_call_result()
    }
}

#[derive(Debug, Deserialize)]
struct DeleteTimeEntryArgs {
    workspace_id: i64,
    time_entry_id: i64,
}

/// Delete a time entry.
pub struct TogglDeleteTimeEntryTool {
    client: Arc<TogglClient>,
}

impl TogglDeleteTimeEntryTool {
    pub fn new(client: Arc<TogglClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for TogglDeleteTimeEntryTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "delete_time_entry".to_string(),
            description: "Deletes a Toggl time entry permanently".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "workspace_id": json_schema_integer("The Toggl workspace ID"),
                    "time_entry_id": json_schema_integer("The ID of the time entry to delete")
                }),
                vec!["workspace_id", "time_entry_id"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let result = match serde_json::from_value::<DeleteTimeEntryArgs>(arguments) {
            Ok(args) => {
                let client = self.client.clone();
                guard(async move {
                    client
                        .delete_time_entry(args.workspace_id, args.time_entry_id)
                        .await?;
                    Ok(ToolResult::<serde_json::Value>::empty(format!(
                        "Time entry {} deleted.",
                        args.time_entry_id
                    )))
                })
                .await
            }
            Err(e) => ToolResult::err(format!("Invalid arguments: {e}")),
        };
        result.into_call_result()
    }
}

// Shared helpers

/// Validate the start/stop pair of a new entry and compute its duration in
/// seconds. Stop must be strictly after start.
fn entry_bounds(start: &str, stop: &str) -> Result<i64, String> {
    let start = DateTime::parse_from_rfc3339(start)
        .map_err(|e| format!("Invalid start time: {e}"))?;
    let stop = DateTime::parse_from_rfc3339(stop)
        .map_err(|e| format!("Invalid stop time: {e}"))?;

    if stop <= start {
        return Err("Stop time must be after start time.".to_string());
    }
    Ok((stop - start).num_seconds())
}

/// Split a comma-separated tag string into a tag list, dropping blanks.
fn split_tags(tags: Option<&str>) -> Option<Vec<String>> {
    let tags: Vec<String> = tags?
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect();

    if tags.is_empty() {
        None
    } else {
        Some(tags)
    }
}

fn format_duration(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

fn describe(entry: &TimeEntry) -> &str {
    entry.description.as_deref().unwrap_or("(no description)")
}
