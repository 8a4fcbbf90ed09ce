// Server entry point: wire up clients, register tools, serve stdio.

use anyhow::Result;
use statline_client::{ChessClient, ChessConfig, TogglClient, TogglConfig};
use statline_mcp::tools::chess::{
    ChessPlayerClubsTool, ChessPlayerDailyGamesTool, ChessPlayerStatsTool,
};
use statline_mcp::tools::toggl::{
    TogglCreateTimeEntryTool, TogglCurrentTimerTool, TogglDeleteTimeEntryTool, TogglProjectsTool,
    TogglStartTimerTool, TogglStopTimerTool, TogglTimeEntriesTool, TogglUpdateTimeEntryTool,
    TogglWorkspacesTool,
};
use statline_mcp::tools::ToolRegistry;
use statline_mcp::McpServer;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the protocol; all diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let toggl_token = std::env::var("TOGGL_API_TOKEN").ok();
    if toggl_token.is_none() {
        warn!("TOGGL_API_TOKEN is not set; Toggl tools will report authentication errors");
    }

    let chess = Arc::new(ChessClient::new(ChessConfig::default())?);
    let toggl = Arc::new(TogglClient::new(TogglConfig::new(toggl_token))?);

    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(ChessPlayerStatsTool::new(chess.clone())));
    registry.register(Arc::new(ChessPlayerClubsTool::new(chess.clone())));
    registry.register(Arc::new(ChessPlayerDailyGamesTool::new(chess)));
    registry.register(Arc::new(TogglWorkspacesTool::new(toggl.clone())));
    registry.register(Arc::new(TogglProjectsTool::new(toggl.clone())));
    registry.register(Arc::new(TogglTimeEntriesTool::new(toggl.clone())));
    registry.register(Arc::new(TogglCurrentTimerTool::new(toggl.clone())));
    registry.register(Arc::new(TogglStartTimerTool::new(toggl.clone())));
    registry.register(Arc::new(TogglStopTimerTool::new(toggl.clone())));
    registry.register(Arc::new(TogglCreateTimeEntryTool::new(toggl.clone())));
    registry.register(Arc::new(TogglUpdateTimeEntryTool::new(toggl.clone())));
    registry.register(Arc::new(TogglDeleteTimeEntryTool::new(toggl)));

    info!(tools = registry.len(), "starting statline-mcp");

    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_cancel.cancel();
        }
    });

    McpServer::new(registry).run(cancel).await
}
