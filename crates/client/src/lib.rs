//! # Statline Client
//!
//! Typed async clients for the two upstream services behind the statline MCP
//! server: the Chess.com public data API (read-only, unauthenticated) and the
//! Toggl Track API v9 (Basic auth with a static API token).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use statline_client::{ChessClient, ChessConfig, ClientResult};
//!
//! #[tokio::main]
//! async fn main() -> ClientResult<()> {
//!     let client = ChessClient::new(ChessConfig::default())?;
//!     let stats = client.get_player_stats("hikaru").await?;
//!     if let Some(rapid) = stats.chess_rapid {
//!         println!("rapid rating: {:?}", rapid.last.map(|r| r.rating));
//!     }
//!     Ok(())
//! }
//! ```

pub mod chess;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod toggl;

pub use chess::ChessClient;
pub use config::{ChessConfig, TogglConfig};
pub use error::{ClientError, ClientResult};
pub use toggl::TogglClient;

pub use models::chess::{
    BestRating, Club, DailyGame, DatedRating, GameModeStats, GameRecord, LessonsStats, PlayerClubs,
    PlayerDailyGames, PlayerStats, PuzzleRushBest, PuzzleRushStats, Rating, TacticsStats,
};
pub use models::toggl::{
    CreateTimeEntryRequest, Project, TimeEntry, TogglApiError, UpdateTimeEntryRequest, Workspace,
};
