// The uniform result envelope every tool operation returns to its caller.

use crate::protocol::{CallToolResult, ToolContent};
use serde::Serialize;
use statline_client::ClientError;
use std::future::Future;

/// Uniform `{success, data, message, error}` wrapper.
///
/// All four fields are always serialized: the host can rely on `data` being
/// present (possibly `null`) on success, and `success=false` always pairing
/// with a populated `error` and absent `data`.
#[derive(Debug, Clone, Serialize)]
pub struct ToolResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl<T> ToolResult<T> {
    /// Successful result with data and a human-readable message or summary.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            error: None,
        }
    }

    /// Successful result with no data, e.g. "no timer running".
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            error: None,
        }
    }

    /// Failed result; the error text is the only payload.
    pub fn err(error: impl ToString) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.to_string()),
        }
    }
}

impl<T: Serialize> ToolResult<T> {
    /// Render the envelope as an MCP tool response.
    pub fn into_call_result(self) -> anyhow::Result<CallToolResult> {
        let is_error = if self.success { None } else { Some(true) };
        let json = serde_json::to_string_pretty(&self)?;
        Ok(CallToolResult {
            content: vec![ToolContent::text(json)],
            is_error,
        })
    }
}

/// Run a fallible tool body and map any failure into the envelope.
///
/// This is the single catch-and-wrap boundary shared by every tool: the body
/// uses `?` freely on client calls, and whatever [`ClientError`] escapes is
/// rendered into the envelope's `error` field instead of propagating to the
/// host runtime.
pub async fn guard<T, F>(body: F) -> ToolResult<T>
where
    F: Future<Output = Result<ToolResult<T>, ClientError>>,
{
    match body.await {
        Ok(result) => result,
        Err(e) => ToolResult::err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_serializes_all_fields() {
        let result = ToolResult::ok(serde_json::json!({"id": 1}), "done");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["id"], 1);
        assert_eq!(json["message"], "done");
        assert_eq!(json["error"], serde_json::Value::Null);
    }

    #[test]
    fn test_empty_keeps_data_null() {
        let result = ToolResult::<serde_json::Value>::empty("No timer is currently running.");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["data"], serde_json::Value::Null);
        assert_eq!(json["message"], "No timer is currently running.");
    }

    #[test]
    fn test_err_pairs_with_absent_data() {
        let result = ToolResult::<serde_json::Value>::err("boom");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["data"], serde_json::Value::Null);
        assert_eq!(json["error"], "boom");
    }

    #[tokio::test]
    async fn test_guard_wraps_client_errors() {
        let result: ToolResult<()> = guard(async { Err(ClientError::Unauthenticated) }).await;

        assert!(!result.success);
        assert!(result
            .error
            .unwrap()
            .to_lowercase()
            .contains("not authenticated"));
    }

    #[tokio::test]
    async fn test_guard_passes_through_tool_results() {
        let result = guard(async { Ok(ToolResult::ok(42, "computed")) }).await;

        assert!(result.success);
        assert_eq!(result.data, Some(42));
    }

    #[test]
    fn test_into_call_result_flags_failures() {
        let call = ToolResult::<i32>::err("bad input").into_call_result().unwrap();
        assert_eq!(call.is_error, Some(true));

        let call = ToolResult::ok(7, "fine").into_call_result().unwrap();
        assert_eq!(call.is_error, None);
    }
}
