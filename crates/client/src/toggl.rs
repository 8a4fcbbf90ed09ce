//! Client for the Toggl Track API v9.

use crate::config::TogglConfig;
use crate::error::{ClientError, ClientResult};
use crate::http::HttpTransport;
use crate::models::toggl::{
    CreateTimeEntryRequest, Project, TimeEntry, UpdateTimeEntryRequest, Workspace,
};
use chrono::Utc;
use tracing::debug;

/// Marker sent in the `created_with` field of created entries.
const CREATED_WITH: &str = "statline-mcp";

/// Client for the Toggl Track API.
///
/// The API token is fixed at construction. When no usable token was
/// configured, every operation fails fast with
/// [`ClientError::Unauthenticated`] before any network call.
#[derive(Debug, Clone)]
pub struct TogglClient {
    http: HttpTransport,
    authenticated: bool,
}

impl TogglClient {
    /// Create a client from configuration.
    pub fn new(config: TogglConfig) -> ClientResult<Self> {
        let authenticated = config.has_token();
        let http = match config.api_token.as_deref().map(str::trim) {
            Some(token) if authenticated => {
                HttpTransport::with_basic_auth(config.base_url, config.timeout, token)?
            }
            _ => HttpTransport::new(config.base_url, config.timeout)?,
        };

        Ok(Self {
            http,
            authenticated,
        })
    }

    fn ensure_authenticated(&self) -> ClientResult<&HttpTransport> {
        if !self.authenticated {
            return Err(ClientError::Unauthenticated);
        }
        Ok(&self.http)
    }

    /// List all workspaces available to the authenticated user.
    pub async fn get_workspaces(&self) -> ClientResult<Vec<Workspace>> {
        let http = self.ensure_authenticated()?;
        http.get("workspaces").await
    }

    /// List the projects in a workspace.
    pub async fn get_projects(&self, workspace_id: i64) -> ClientResult<Vec<Project>> {
        let http = self.ensure_authenticated()?;
        http.get(&format!("workspaces/{workspace_id}/projects")).await
    }

    /// List time entries, optionally filtered by `YYYY-MM-DD` date bounds.
    ///
    /// When both bounds are omitted the remote default (today) applies; no
    /// default is synthesized locally.
    pub async fn get_time_entries(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> ClientResult<Vec<TimeEntry>> {
        let http = self.ensure_authenticated()?;

        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(start) = start_date.filter(|s| !s.is_empty()) {
            query.push(("start_date", start));
        }
        if let Some(end) = end_date.filter(|s| !s.is_empty()) {
            query.push(("end_date", end));
        }

        if query.is_empty() {
            http.get("me/time_entries").await
        } else {
            http.get_with_query("me/time_entries", &query).await
        }
    }

    /// Get the currently running time entry, if any.
    ///
    /// A 404 or a transport-level failure means "no timer running" and yields
    /// `Ok(None)` rather than an error: for most accounts that is the normal
    /// steady state, not a failure.
    pub async fn get_current_time_entry(&self) -> ClientResult<Option<TimeEntry>> {
        let http = self.ensure_authenticated()?;

        match http.get::<Option<TimeEntry>>("me/time_entries/current").await {
            Ok(entry) => Ok(entry),
            Err(ClientError::Api { status: 404, .. }) | Err(ClientError::Http(_)) => {
                debug!("no running time entry");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Get a time entry by id; `Ok(None)` when it does not exist.
    pub async fn get_time_entry(
        &self,
        workspace_id: i64,
        time_entry_id: i64,
    ) -> ClientResult<Option<TimeEntry>> {
        let http = self.ensure_authenticated()?;

        let path = format!("workspaces/{workspace_id}/time_entries/{time_entry_id}");
        match http.get::<TimeEntry>(&path).await {
            Ok(entry) => Ok(Some(entry)),
            Err(ClientError::Api { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Create a time entry. The workspace id is always re-serialized into the
    /// request body, even though it is already present in the URL.
    pub async fn create_time_entry(
        &self,
        workspace_id: i64,
        mut request: CreateTimeEntryRequest,
    ) -> ClientResult<TimeEntry> {
        let http = self.ensure_authenticated()?;

        request.workspace_id = workspace_id;
        http.post(&format!("workspaces/{workspace_id}/time_entries"), &request)
            .await
    }

    /// Update an existing time entry; same body invariant as create.
    pub async fn update_time_entry(
        &self,
        workspace_id: i64,
        time_entry_id: i64,
        mut request: UpdateTimeEntryRequest,
    ) -> ClientResult<TimeEntry> {
        let http = self.ensure_authenticated()?;

        request.workspace_id = workspace_id;
        http.put(
            &format!("workspaces/{workspace_id}/time_entries/{time_entry_id}"),
            &request,
        )
        .await
    }

    /// Stop a running time entry.
    pub async fn stop_time_entry(
        &self,
        workspace_id: i64,
        time_entry_id: i64,
    ) -> ClientResult<TimeEntry> {
        let http = self.ensure_authenticated()?;

        http.patch(&format!(
            "workspaces/{workspace_id}/time_entries/{time_entry_id}/stop"
        ))
        .await
    }

    /// Delete a time entry.
    pub async fn delete_time_entry(
        &self,
        workspace_id: i64,
        time_entry_id: i64,
    ) -> ClientResult<()> {
        let http = self.ensure_authenticated()?;

        http.delete(&format!(
            "workspaces/{workspace_id}/time_entries/{time_entry_id}"
        ))
        .await
    }

    /// Start a running timer: a create call with `duration = -1` and
    /// `start = now`.
    pub async fn start_timer(
        &self,
        workspace_id: i64,
        description: &str,
        project_id: Option<i64>,
        tags: Option<Vec<String>>,
    ) -> ClientResult<TimeEntry> {
        let request = CreateTimeEntryRequest {
            workspace_id,
            project_id,
            task_id: None,
            billable: None,
            start: Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            stop: None,
            duration: -1,
            description: Some(description.to_string()),
            tags,
            created_with: CREATED_WITH.to_string(),
        };

        self.create_time_entry(workspace_id, request).await
    }
}
