//! HTTP transport shared by the statline clients.

use crate::error::{ClientError, ClientResult};
use base64::Engine;
use reqwest::{header, Client, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("statline-mcp/", env!("CARGO_PKG_VERSION"));

/// HTTP transport for making API requests.
///
/// Owns the pooled `reqwest::Client` (thread-safe, cloned cheaply) and the
/// base URL. Every call is a fresh network round trip: no retries, no
/// caching. A failed call produces exactly one error result.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Create an unauthenticated transport.
    pub fn new(base_url: Url, timeout: Duration) -> ClientResult<Self> {
        Self::build(base_url, timeout, None)
    }

    /// Create a transport carrying a Basic credential on every request.
    ///
    /// The credential is `base64(token + ":api_token")`, per the Toggl API
    /// authentication contract.
    pub fn with_basic_auth(base_url: Url, timeout: Duration, token: &str) -> ClientResult<Self> {
        let credential =
            base64::engine::general_purpose::STANDARD.encode(format!("{token}:api_token"));
        Self::build(base_url, timeout, Some(credential))
    }

    fn build(base_url: Url, timeout: Duration, credential: Option<String>) -> ClientResult<Self> {
        let mut headers = header::HeaderMap::new();

        if let Some(credential) = credential {
            let mut value = header::HeaderValue::from_str(&format!("Basic {credential}"))
                .map_err(|_| ClientError::InvalidInput("API token is not valid ASCII".into()))?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Join a relative path onto the base URL.
    fn build_url(&self, path: &str) -> ClientResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Send a request and deserialize the expected-success JSON body.
    ///
    /// Non-2xx statuses are mapped to [`ClientError::Api`]; callers decide
    /// which statuses (e.g. 404) get a more specific meaning.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::from_response(status.as_u16(), &body));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Send a request, ignoring any response body.
    async fn execute_no_response(&self, request: RequestBuilder) -> ClientResult<()> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::from_response(status.as_u16(), &body));
        }

        Ok(())
    }

    /// Execute a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET request");
        self.execute(self.client.get(url)).await
    }

    /// Execute a GET request with query parameters.
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET request with query");
        self.execute(self.client.get(url).query(query)).await
    }

    /// Execute a POST request with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "POST request");
        self.execute(self.client.post(url).json(body)).await
    }

    /// Execute a PUT request with a JSON body.
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "PUT request");
        self.execute(self.client.put(url).json(body)).await
    }

    /// Execute a PATCH request without a body.
    pub async fn patch<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "PATCH request");
        self.execute(self.client.patch(url)).await
    }

    /// Execute a DELETE request, ignoring any response body.
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let url = self.build_url(path)?;
        debug!(url = %url, "DELETE request");
        self.execute_no_response(self.client.delete(url)).await
    }
}
