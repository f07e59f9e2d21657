//! # [`ApiClient`]: the single gateway to the remote service
//!
//! Builds every URL from one configured origin, attaches the `Authorization`
//! header according to [`AuthScheme`], and checks the response status before
//! decoding. Endpoint methods live in sibling modules ([`crate::notes`],
//! [`crate::notifications`], ...) as `impl ApiClient` blocks.
//!
//! The client is cheap to clone: `reqwest::Client` is reference counted, and
//! views rebuild it whenever the session token changes.

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use store::config::ApiConfig;
use store::AuthScheme;

use crate::error::ApiError;

/// Typed HTTP client for the note service.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    auth_scheme: AuthScheme,
    token: Option<String>,
}

impl ApiClient {
    /// Create an anonymous client for the configured origin.
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_scheme: config.auth_scheme,
            token: None,
        }
    }

    /// Attach (or drop) the session token.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Full URL for a path below `/api/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Value of the `Authorization` header for the current token.
    fn authorization(&self) -> Result<String, ApiError> {
        let token = self.token.as_deref().ok_or(ApiError::MissingToken)?;
        Ok(match self.auth_scheme {
            AuthScheme::Bearer => format!("Bearer {token}"),
            AuthScheme::Raw => token.to_string(),
        })
    }

    /// Request to an endpoint that needs no credentials.
    pub(crate) fn public(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.endpoint(path);
        tracing::debug!(%method, %url, "api request");
        self.http.request(method, url)
    }

    /// Request to an endpoint that requires the session token.
    pub(crate) fn authed(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let header = self.authorization()?;
        Ok(self.public(method, path).header(AUTHORIZATION, header))
    }

    /// Send and turn non-success statuses into [`ApiError`].
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("api request failed: {e}");
            ApiError::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(status.as_u16(), &body);
        tracing::warn!(status = status.as_u16(), "api error: {err}");
        Err(err)
    }

    /// Send and decode a JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        let bytes = response.bytes().await.map_err(ApiError::from)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Send and discard the body.
    pub(crate) async fn send_empty(&self, request: RequestBuilder) -> Result<(), ApiError> {
        self.send(request).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str, auth_scheme: AuthScheme) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            auth_scheme,
        }
    }

    #[test]
    fn test_endpoint_joining() {
        let client = ApiClient::new(&config("http://localhost:10000/", AuthScheme::Bearer));
        assert_eq!(client.base_url(), "http://localhost:10000");
        assert_eq!(client.endpoint("notes"), "http://localhost:10000/api/notes");
        assert_eq!(client.endpoint("/notes/42"), "http://localhost:10000/api/notes/42");
    }

    #[test]
    fn test_bearer_header() {
        let client = ApiClient::new(&config("http://svc", AuthScheme::Bearer))
            .with_token(Some("tok".to_string()));
        let request = client.authed(Method::GET, "notes").unwrap().build().unwrap();

        assert_eq!(request.url().as_str(), "http://svc/api/notes");
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer tok");
    }

    #[test]
    fn test_raw_header() {
        let client = ApiClient::new(&config("http://svc", AuthScheme::Raw))
            .with_token(Some("tok".to_string()));
        let request = client.authed(Method::DELETE, "notes/1").unwrap().build().unwrap();

        assert_eq!(request.method(), Method::DELETE);
        assert_eq!(request.headers()[AUTHORIZATION], "tok");
    }

    #[test]
    fn test_missing_token() {
        let client = ApiClient::new(&config("http://svc", AuthScheme::Bearer));
        assert!(!client.has_token());
        assert_eq!(
            client.authed(Method::GET, "notes").unwrap_err(),
            ApiError::MissingToken
        );

        let blank = client.with_token(Some("  ".to_string()));
        assert!(!blank.has_token());
    }

    #[test]
    fn test_public_request_has_no_auth_header() {
        let client = ApiClient::new(&config("http://svc", AuthScheme::Bearer))
            .with_token(Some("tok".to_string()));
        let request = client.public(Method::GET, "notifications").build().unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }
}
