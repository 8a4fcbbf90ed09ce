// Chess.com tools: player statistics, club memberships, active daily games

use crate::envelope::{guard, ToolResult};
use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_object, json_schema_string, Tool};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use statline_client::{ChessClient, GameModeStats, PlayerClubs, PlayerDailyGames, PlayerStats};
use std::sync::Arc;

/// Summaries itemize at most this many entries before truncating.
const SUMMARY_LIMIT: usize = 10;

#[derive(Debug, Deserialize)]
struct UsernameArgs {
    username: String,
}

/// Tool to fetch per-time-control statistics for a player.
pub struct ChessPlayerStatsTool {
    client: Arc<ChessClient>,
}

impl ChessPlayerStatsTool {
    pub fn new(client: Arc<ChessClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ChessPlayerStatsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_chess_player_stats".to_string(),
            description: "Gets comprehensive chess statistics for a player from Chess.com \
                          including ratings, records, and performance metrics across different \
                          time controls"
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "username": json_schema_string("The Chess.com username of the player")
                }),
                vec!["username"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let result = match serde_json::from_value::<UsernameArgs>(arguments) {
            Ok(args) => {
                let client = self.client.clone();
                guard(async move {
                    let stats = client.get_player_stats(&args.username).await?;
                    let summary = stats_summary(&args.username, &stats);
                    Ok(ToolResult::ok(stats, summary))
                })
                .await
            }
            Err(e) => ToolResult::err(format!("Invalid arguments: {e}")),
        };
        result.into_call_result()
    }
}

/// Tool to fetch the clubs a player is a member of.
pub struct ChessPlayerClubsTool {
    client: Arc<ChessClient>,
}

impl ChessPlayerClubsTool {
    pub fn new(client: Arc<ChessClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ChessPlayerClubsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_chess_player_clubs".to_string(),
            description: "Gets the list of chess clubs that a player is a member of from \
                          Chess.com, including club names, join dates, and activity information"
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "username": json_schema_string("The Chess.com username of the player")
                }),
                vec!["username"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let result = match serde_json::from_value::<UsernameArgs>(arguments) {
            Ok(args) => {
                let client = self.client.clone();
                guard(async move {
                    let clubs = client.get_player_clubs(&args.username).await?;
                    let summary = if clubs.clubs.is_empty() {
                        "This player is not a member of any chess clubs.".to_string()
                    } else {
                        clubs_summary(&args.username, &clubs)
                    };
                    Ok(ToolResult::ok(clubs, summary))
                })
                .await
            }
            Err(e) => ToolResult::err(format!("Invalid arguments: {e}")),
        };
        result.into_call_result()
    }
}

/// Tool to fetch the daily games a player is currently playing.
pub struct ChessPlayerDailyGamesTool {
    client: Arc<ChessClient>,
}

impl ChessPlayerDailyGamesTool {
    pub fn new(client: Arc<ChessClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ChessPlayerDailyGamesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_chess_player_daily_games".to_string(),
            description: "Gets the current daily chess games that a player is actively playing \
                          on Chess.com, including game positions, time controls, and opponent \
                          information"
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "username": json_schema_string("The Chess.com username of the player")
                }),
                vec!["username"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let result = match serde_json::from_value::<UsernameArgs>(arguments) {
            Ok(args) => {
                let client = self.client.clone();
                guard(async move {
                    let games = client.get_player_daily_games(&args.username).await?;
                    let summary = if games.games.is_empty() {
                        "This player is not currently playing any daily chess games.".to_string()
                    } else {
                        games_summary(&args.username, &games)
                    };
                    Ok(ToolResult::ok(games, summary))
                })
                .await
            }
            Err(e) => ToolResult::err(format!("Invalid arguments: {e}")),
        };
        result.into_call_result()
    }
}

// Summary builders. Pure formatting over the fetched data, deterministic
// given the input; dates are rendered in UTC.

fn stats_summary(username: &str, stats: &PlayerStats) -> String {
    let mut lines = vec![format!("Chess player statistics for {username}:")];

    push_mode_line(&mut lines, "Rapid", stats.chess_rapid.as_ref());
    push_mode_line(&mut lines, "Blitz", stats.chess_blitz.as_ref());
    push_mode_line(&mut lines, "Bullet", stats.chess_bullet.as_ref());
    push_mode_line(&mut lines, "Daily", stats.chess_daily.as_ref());

    if let Some(highest) = stats.tactics.as_ref().and_then(|t| t.highest.as_ref()) {
        lines.push(format!("• Tactics: {} (highest)", highest.rating));
    }
    if let Some(best) = stats.puzzle_rush.as_ref().and_then(|p| p.best.as_ref()) {
        lines.push(format!("• Puzzle Rush: {} (best score)", best.score));
    }

    if lines.len() == 1 {
        lines.push("No rated games on record.".to_string());
    }

    lines.join("\n")
}

fn push_mode_line(lines: &mut Vec<String>, label: &str, mode: Option<&GameModeStats>) {
    let Some(last) = mode.and_then(|m| m.last.as_ref()) else {
        return;
    };
    let (win, loss, draw) = mode
        .and_then(|m| m.record.as_ref())
        .map(|r| (r.win, r.loss, r.draw))
        .unwrap_or((0, 0, 0));
    lines.push(format!(
        "• {label}: {} (W:{win} L:{loss} D:{draw})",
        last.rating
    ));
}

fn clubs_summary(username: &str, clubs: &PlayerClubs) -> String {
    let total = clubs.clubs.len();
    let mut lines = vec![format!("Chess club memberships for {username} ({total} total):")];

    for club in clubs.clubs.iter().take(SUMMARY_LIMIT) {
        lines.push(format!(
            "• {} (joined: {}, last activity: {})",
            club.name,
            month_year(club.joined),
            month_year(club.last_activity)
        ));
    }

    if total > SUMMARY_LIMIT {
        lines.push(format!("... and {} more clubs", total - SUMMARY_LIMIT));
    }

    lines.join("\n")
}

fn games_summary(username: &str, games: &PlayerDailyGames) -> String {
    let total = games.games.len();
    let mut lines = vec![format!(
        "Active daily chess games for {username} ({total} total):"
    )];

    for game in games.games.iter().take(SUMMARY_LIMIT) {
        let white = player_name(&game.white);
        let black = player_name(&game.black);
        let time_control = game.time_control.as_deref().unwrap_or("unknown");
        let turn = match game.turn.as_deref() {
            Some("black") => "Black",
            _ => "White",
        };
        let deadline = if game.move_by > 0 {
            move_deadline(game.move_by)
        } else {
            "no deadline".to_string()
        };
        lines.push(format!(
            "• {white} vs {black} ({time_control}) - {turn} to move by {deadline}"
        ));
    }

    if total > SUMMARY_LIMIT {
        lines.push(format!("... and {} more games", total - SUMMARY_LIMIT));
    }

    lines.join("\n")
}

/// Extract the username from a Chess.com player URL.
fn player_name(player_url: &str) -> &str {
    player_url
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("unknown")
}

fn month_year(epoch_seconds: i64) -> String {
    DateTime::<Utc>::from_timestamp(epoch_seconds, 0)
        .map(|t| t.format("%b %Y").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn move_deadline(epoch_seconds: i64) -> String {
    DateTime::<Utc>::from_timestamp(epoch_seconds, 0)
        .map(|t| t.format("%b %d, %H:%M").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use statline_client::{ChessConfig, Club, DailyGame, DatedRating, GameRecord, Rating, TacticsStats};
    use std::time::Duration;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn chess_client(server: &MockServer) -> Arc<ChessClient> {
        let config = ChessConfig {
            base_url: Url::parse(&server.uri()).unwrap(),
            timeout: Duration::from_secs(30),
        };
        Arc::new(ChessClient::new(config).unwrap())
    }

    fn club(name: &str) -> Club {
        Club {
            id: None,
            name: name.to_string(),
            // Mar 2024 / Jun 2021
            last_activity: 1_710_000_000,
            joined: 1_622_548_800,
            icon: None,
            url: None,
        }
    }

    fn envelope_from(call: CallToolResult) -> serde_json::Value {
        let crate::protocol::ToolContent::Text { text } = &call.content[0];
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn test_stats_summary_lists_played_modes_only() {
        let stats = PlayerStats {
            chess_daily: None,
            chess960_daily: None,
            chess_rapid: Some(GameModeStats {
                last: Some(Rating {
                    rating: 1500,
                    date: 1_700_000_000,
                    rd: Some(40),
                }),
                best: None,
                record: Some(GameRecord {
                    win: 10,
                    loss: 5,
                    draw: 2,
                    time_per_move: None,
                    timeout_percent: None,
                }),
            }),
            chess_blitz: None,
            chess_bullet: None,
            tactics: Some(TacticsStats {
                highest: Some(DatedRating {
                    rating: 2100,
                    date: 1_690_000_000,
                }),
                lowest: None,
            }),
            lessons: None,
            puzzle_rush: None,
        };

        let summary = stats_summary("alice", &stats);
        assert!(summary.contains("• Rapid: 1500 (W:10 L:5 D:2)"));
        assert!(summary.contains("• Tactics: 2100 (highest)"));
        assert!(!summary.contains("Blitz"));
    }

    #[test]
    fn test_stats_summary_without_record_defaults_to_zero() {
        let stats = PlayerStats {
            chess_daily: None,
            chess960_daily: None,
            chess_rapid: None,
            chess_blitz: Some(GameModeStats {
                last: Some(Rating {
                    rating: 900,
                    date: 1_700_000_000,
                    rd: None,
                }),
                best: None,
                record: None,
            }),
            chess_bullet: None,
            tactics: None,
            lessons: None,
            puzzle_rush: None,
        };

        let summary = stats_summary("bob", &stats);
        assert!(summary.contains("• Blitz: 900 (W:0 L:0 D:0)"));
    }

    #[test]
    fn test_clubs_summary_truncates_at_ten() {
        let clubs = PlayerClubs {
            clubs: (1..=12).map(|i| club(&format!("Club {i}"))).collect(),
        };

        let summary = clubs_summary("alice", &clubs);
        let itemized: Vec<&str> = summary
            .lines()
            .filter(|l| l.starts_with("• "))
            .collect();

        assert_eq!(itemized.len(), 10);
        assert!(summary.lines().any(|l| l == "... and 2 more clubs"));
        assert!(summary.contains("Club 10"));
        assert!(!summary.contains("Club 11"));
    }

    #[test]
    fn test_clubs_summary_no_truncation_line_at_ten_or_fewer() {
        let clubs = PlayerClubs {
            clubs: (1..=10).map(|i| club(&format!("Club {i}"))).collect(),
        };

        let summary = clubs_summary("alice", &clubs);
        assert!(!summary.contains("more clubs"));
    }

    #[test]
    fn test_clubs_summary_formats_dates() {
        let clubs = PlayerClubs {
            clubs: vec![club("Team Belgium")],
        };

        let summary = clubs_summary("alice", &clubs);
        assert!(summary.contains("• Team Belgium (joined: Jun 2021, last activity: Mar 2024)"));
    }

    #[test]
    fn test_games_summary_line_format() {
        let games = PlayerDailyGames {
            games: vec![DailyGame {
                white: "https://api.chess.com/pub/player/alice".to_string(),
                black: "https://api.chess.com/pub/player/bob".to_string(),
                url: None,
                fen: None,
                pgn: None,
                turn: Some("black".to_string()),
                move_by: 1_710_000_000,
                last_activity: None,
                start_time: None,
                time_control: Some("1/259200".to_string()),
                time_class: None,
                rules: None,
                draw_offer: None,
                tournament: None,
                match_url: None,
            }],
        };

        let summary = games_summary("alice", &games);
        assert!(summary.contains("• alice vs bob (1/259200) - Black to move by"));
    }

    #[test]
    fn test_games_summary_without_deadline() {
        let games = PlayerDailyGames {
            games: vec![DailyGame {
                white: "https://api.chess.com/pub/player/alice".to_string(),
                black: "https://api.chess.com/pub/player/bob".to_string(),
                url: None,
                fen: None,
                pgn: None,
                turn: None,
                move_by: 0,
                last_activity: None,
                start_time: None,
                time_control: None,
                time_class: None,
                rules: None,
                draw_offer: None,
                tournament: None,
                match_url: None,
            }],
        };

        let summary = games_summary("alice", &games);
        assert!(summary.contains("White to move by no deadline"));
    }

    #[tokio::test]
    async fn test_clubs_tool_not_found_envelope() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/player/nonexistent_user_404/clubs"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let tool = ChessPlayerClubsTool::new(chess_client(&server));
        let call = tool
            .execute(serde_json::json!({"username": "nonexistent_user_404"}))
            .await
            .unwrap();

        assert_eq!(call.is_error, Some(true));
        let envelope = envelope_from(call);
        assert_eq!(envelope["success"], false);
        assert!(envelope["error"].as_str().unwrap().contains("not found"));
    }

    #[tokio::test]
    async fn test_stats_tool_success_envelope() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/player/alice/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "chess_rapid": {
                    "last": {"rating": 1500, "date": 1700000000, "rd": 40},
                    "record": {"win": 10, "loss": 5, "draw": 2}
                }
            })))
            .mount(&server)
            .await;

        let tool = ChessPlayerStatsTool::new(chess_client(&server));
        let call = tool
            .execute(serde_json::json!({"username": "alice"}))
            .await
            .unwrap();

        assert_eq!(call.is_error, None);
        let envelope = envelope_from(call);
        assert_eq!(envelope["success"], true);
        assert_eq!(envelope["data"]["chess_rapid"]["last"]["rating"], 1500);
        assert!(envelope["message"]
            .as_str()
            .unwrap()
            .contains("• Rapid: 1500 (W:10 L:5 D:2)"));
    }

    #[tokio::test]
    async fn test_blank_username_rejected_in_envelope() {
        let server = MockServer::start().await;
        let tool = ChessPlayerStatsTool::new(chess_client(&server));

        let call = tool.execute(serde_json::json!({"username": "  "})).await.unwrap();

        let envelope = envelope_from(call);
        assert_eq!(envelope["success"], false);
        assert!(envelope["error"].as_str().unwrap().contains("Invalid input"));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_username_argument_is_envelope_error() {
        let server = MockServer::start().await;
        let tool = ChessPlayerClubsTool::new(chess_client(&server));

        let call = tool.execute(serde_json::json!({})).await.unwrap();

        let envelope = envelope_from(call);
        assert_eq!(envelope["success"], false);
        assert!(envelope["error"].as_str().unwrap().contains("Invalid arguments"));
    }
}
