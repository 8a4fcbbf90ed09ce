//! Configuration types for the statline clients.

use std::time::Duration;
use url::Url;

/// Public base URL of the Chess.com data API.
pub const CHESS_API_URL: &str = "https://api.chess.com/pub/";

/// Base URL of the Toggl Track API, v9.
pub const TOGGL_API_URL: &str = "https://api.track.toggl.com/api/v9/";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Chess.com client.
///
/// The public data API is read-only and requires no credentials.
#[derive(Debug, Clone)]
pub struct ChessConfig {
    /// Base URL of the API (override for tests).
    pub base_url: Url,
    /// Overall request timeout.
    pub timeout: Duration,
}

impl ChessConfig {
    /// Create a configuration pointing at the given base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Default for ChessConfig {
    fn default() -> Self {
        // The constant is a valid URL; parse cannot fail.
        Self::new(Url::parse(CHESS_API_URL).expect("valid chess API URL"))
    }
}

/// Configuration for the Toggl Track client.
///
/// The API token is injected here once at construction and never mutated
/// afterwards. A `None` or blank token is allowed at construction time; each
/// call then fails fast with an authentication error before touching the
/// network.
#[derive(Debug, Clone)]
pub struct TogglConfig {
    /// Base URL of the API (override for tests).
    pub base_url: Url,
    /// Static API token, sent as the username of a Basic credential with the
    /// literal password `api_token`.
    pub api_token: Option<String>,
    /// Overall request timeout.
    pub timeout: Duration,
}

impl TogglConfig {
    /// Create a configuration with the given API token.
    pub fn new(api_token: Option<String>) -> Self {
        Self {
            base_url: Url::parse(TOGGL_API_URL).expect("valid toggl API URL"),
            api_token,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Replace the base URL, keeping the rest of the configuration.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Whether a usable (non-blank) token is configured.
    pub fn has_token(&self) -> bool {
        self.api_token
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
    }
}
