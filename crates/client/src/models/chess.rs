//! Models for the Chess.com public data API.
//!
//! Every field is optional: the API omits whole sections for players who have
//! never played a given mode, and absence means "no data for that mode", not
//! zero. Timestamps are epoch seconds.

use serde::{Deserialize, Serialize};

/// Per-time-control rating snapshot for a player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chess_daily: Option<GameModeStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chess960_daily: Option<GameModeStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chess_rapid: Option<GameModeStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chess_blitz: Option<GameModeStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chess_bullet: Option<GameModeStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tactics: Option<TacticsStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lessons: Option<LessonsStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub puzzle_rush: Option<PuzzleRushStats>,
}

/// Ratings and win/loss/draw record for one time control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameModeStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<Rating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best: Option<BestRating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<GameRecord>,
}

/// Most recent rating in a mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rating: i32,
    pub date: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rd: Option<i32>,
}

/// Best rating ever achieved in a mode, with the game it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestRating {
    pub rating: i32,
    pub date: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<String>,
}

/// Lifetime win/loss/draw record in a mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub win: i32,
    pub loss: i32,
    pub draw: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_per_move: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_percent: Option<f64>,
}

/// Tactics training rating range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TacticsStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highest: Option<DatedRating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lowest: Option<DatedRating>,
}

/// Lessons rating range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonsStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highest: Option<DatedRating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lowest: Option<DatedRating>,
}

/// A rating together with the epoch second it was recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatedRating {
    pub rating: i32,
    pub date: i64,
}

/// Puzzle Rush results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleRushStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best: Option<PuzzleRushBest>,
}

/// Best Puzzle Rush run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleRushBest {
    pub score: i32,
    pub date: i64,
}

/// Club memberships for a player, in API order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerClubs {
    #[serde(default)]
    pub clubs: Vec<Club>,
}

/// One club membership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Club {
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub last_activity: i64,
    pub joined: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// In-progress daily games for a player, in API order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerDailyGames {
    #[serde(default)]
    pub games: Vec<DailyGame>,
}

/// One in-progress daily game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyGame {
    /// Participant URLs (`.../player/{username}`).
    pub white: String,
    pub black: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fen: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pgn: Option<String>,
    /// Side to move, `"white"` or `"black"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turn: Option<String>,
    /// Deadline for the next move as epoch seconds; 0 means no deadline.
    #[serde(default)]
    pub move_by: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    /// Time control descriptor, e.g. `"1/259200"` (one move per 3 days).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_control: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draw_offer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournament: Option<String>,
    #[serde(rename = "match", default, skip_serializing_if = "Option::is_none")]
    pub match_url: Option<String>,
}
