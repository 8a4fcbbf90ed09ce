//! Client for the Chess.com public data API.

use crate::config::ChessConfig;
use crate::error::{ClientError, ClientResult};
use crate::http::HttpTransport;
use crate::models::chess::{PlayerClubs, PlayerDailyGames, PlayerStats};
use tracing::debug;

/// Client for the read-only, unauthenticated Chess.com data API.
#[derive(Debug, Clone)]
pub struct ChessClient {
    http: HttpTransport,
}

impl ChessClient {
    /// Create a client from configuration.
    pub fn new(config: ChessConfig) -> ClientResult<Self> {
        let http = HttpTransport::new(config.base_url, config.timeout)?;
        Ok(Self { http })
    }

    /// Fetch the per-time-control statistics for a player.
    pub async fn get_player_stats(&self, username: &str) -> ClientResult<PlayerStats> {
        let username = normalize_username(username)?;
        debug!(username = %username, "fetching player stats");
        self.fetch(&username, "stats").await
    }

    /// Fetch the club memberships for a player.
    pub async fn get_player_clubs(&self, username: &str) -> ClientResult<PlayerClubs> {
        let username = normalize_username(username)?;
        debug!(username = %username, "fetching player clubs");
        self.fetch(&username, "clubs").await
    }

    /// Fetch the in-progress daily games for a player.
    pub async fn get_player_daily_games(&self, username: &str) -> ClientResult<PlayerDailyGames> {
        let username = normalize_username(username)?;
        debug!(username = %username, "fetching player daily games");
        self.fetch(&username, "games").await
    }

    /// Issue the GET and give 404 its resource-specific meaning.
    async fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        username: &str,
        resource: &str,
    ) -> ClientResult<T> {
        let path = format!("player/{username}/{resource}");
        match self.http.get(&path).await {
            Err(ClientError::Api { status: 404, .. }) => {
                Err(ClientError::NotFound(format!("Chess player '{username}'")))
            }
            other => other,
        }
    }
}

/// Trim and lower-case the username; blank input fails before any network
/// call is made.
fn normalize_username(username: &str) -> ClientResult<String> {
    let normalized = username.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(ClientError::InvalidInput(
            "Username cannot be empty".to_string(),
        ));
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> ChessClient {
        let config = ChessConfig {
            base_url: Url::parse(&server.uri()).unwrap(),
            timeout: Duration::from_secs(30),
        };
        ChessClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_blank_username_rejected_before_network() {
        let server = MockServer::start().await;
        // No mocks mounted: any request would come back 404 from wiremock,
        // which would surface as NotFound instead of InvalidInput.
        let client = client(&server);

        for username in ["", "   ", "\t\n"] {
            let result = client.get_player_stats(username).await;
            assert!(matches!(result, Err(ClientError::InvalidInput(_))));
        }

        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_username_trimmed_and_lowercased() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/player/magnuscarlsen/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "chess_blitz": {"last": {"rating": 3200, "date": 1700000000, "rd": 30}}
            })))
            .mount(&server)
            .await;

        let stats = client(&server)
            .get_player_stats("  MagnusCarlsen  ")
            .await
            .unwrap();
        assert_eq!(stats.chess_blitz.unwrap().last.unwrap().rating, 3200);
    }

    #[tokio::test]
    async fn test_unknown_player_maps_to_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/player/nonexistent_user_404/clubs"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({"message": "User not found"})),
            )
            .mount(&server)
            .await;

        let result = client(&server).get_player_clubs("nonexistent_user_404").await;
        match result {
            Err(ClientError::NotFound(resource)) => {
                assert_eq!(resource, "Chess player 'nonexistent_user_404'");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_error_is_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/player/somebody/games"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let result = client(&server).get_player_daily_games("somebody").await;
        assert!(matches!(
            result,
            Err(ClientError::Api { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_malformed_body_is_json_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/player/somebody/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{broken"))
            .mount(&server)
            .await;

        let result = client(&server).get_player_stats("somebody").await;
        assert!(matches!(result, Err(ClientError::Json(_))));
    }

    #[tokio::test]
    async fn test_daily_games_deserialized() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/player/alice/games"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "games": [{
                    "white": "https://api.chess.com/pub/player/alice",
                    "black": "https://api.chess.com/pub/player/bob",
                    "turn": "black",
                    "move_by": 1712345678,
                    "time_control": "1/86400"
                }]
            })))
            .mount(&server)
            .await;

        let games = client(&server).get_player_daily_games("alice").await.unwrap();
        assert_eq!(games.games.len(), 1);
        assert_eq!(games.games[0].turn.as_deref(), Some("black"));
    }
}
