//! StudyHub API client facade.
//!
//! [`ApiClient`] is the single seam between the application and the
//! network. It owns the `reqwest` client, attaches credentials, unwraps the
//! server's `{ "data": … }` success envelope, and normalizes every failure
//! into [`ApiError`](crate::ApiError). Callers above this point never see a
//! raw HTTP response.
//!
//! The facade has no retry policy: a failed request fails once, and the
//! caller decides what to do (today, none of them retry).

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::resources::{
    AssessmentsClient, AuthClient, CategoriesClient, ContentClient, PathsClient,
    RecommendationsClient, UsersClient,
};
use crate::token::TokenSource;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Whether a request goes out with credentials attached.
///
/// Public is only used by the login exchange; everything else on the API
/// requires a bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    /// No credentials: public endpoints (login).
    Public,
    /// Attach the current bearer token, when one is present.
    Authenticated,
}

/// Success envelope wrapping every 2xx response body.
#[derive(Debug, serde::Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Typed HTTP client for the StudyHub REST API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    tokens: Arc<dyn TokenSource>,
}

impl ApiClient {
    /// Create a client with the given configuration and token source.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: ApiConfig, tokens: Arc<dyn TokenSource>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self { http, config, tokens })
    }

    /// Create a client with no credentials.
    ///
    /// Useful before login; authenticated endpoints will be rejected by the
    /// server.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn public(config: ApiConfig) -> Result<Self> {
        Self::new(config, Arc::new(crate::token::NoAuth))
    }

    /// The configured API base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // ═══════════════════════════════════════════════════════════════════
    // Typed verbs
    // ═══════════════════════════════════════════════════════════════════

    /// `GET path?params`, unwrapping the data envelope into `T`.
    ///
    /// `params` must already exclude unset filters; an empty slice sends no
    /// query string at all.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] produced by the request or response.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
        auth: Auth,
    ) -> Result<T> {
        self.execute(self.request(Method::GET, path, auth).query(params))
            .await
    }

    /// `POST path` with a JSON body.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] produced by the request or response.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        auth: Auth,
    ) -> Result<T> {
        self.execute(self.request(Method::POST, path, auth).json(body))
            .await
    }

    /// `PUT path` with a JSON body.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] produced by the request or response.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        auth: Auth,
    ) -> Result<T> {
        self.execute(self.request(Method::PUT, path, auth).json(body))
            .await
    }

    /// `PATCH path` with a JSON body.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] produced by the request or response.
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        auth: Auth,
    ) -> Result<T> {
        self.execute(self.request(Method::PATCH, path, auth).json(body))
            .await
    }

    /// `DELETE path`, unwrapping the data envelope into `T`.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] produced by the request or response.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str, auth: Auth) -> Result<T> {
        self.execute(self.request(Method::DELETE, path, auth)).await
    }

    // ═══════════════════════════════════════════════════════════════════
    // Resource clients
    // ═══════════════════════════════════════════════════════════════════

    /// Auth endpoints (login, whoami, logout).
    #[must_use]
    pub const fn auth(&self) -> AuthClient<'_> {
        AuthClient::new(self)
    }

    /// Assessment endpoints.
    #[must_use]
    pub const fn assessments(&self) -> AssessmentsClient<'_> {
        AssessmentsClient::new(self)
    }

    /// Content library endpoints.
    #[must_use]
    pub const fn content(&self) -> ContentClient<'_> {
        ContentClient::new(self)
    }

    /// Learning path endpoints.
    #[must_use]
    pub const fn paths(&self) -> PathsClient<'_> {
        PathsClient::new(self)
    }

    /// User administration endpoints.
    #[must_use]
    pub const fn users(&self) -> UsersClient<'_> {
        UsersClient::new(self)
    }

    /// Recommendation endpoints.
    #[must_use]
    pub const fn recommendations(&self) -> RecommendationsClient<'_> {
        RecommendationsClient::new(self)
    }

    /// Category endpoints.
    #[must_use]
    pub const fn categories(&self) -> CategoriesClient<'_> {
        CategoriesClient::new(self)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Internals
    // ═══════════════════════════════════════════════════════════════════

    fn request(&self, method: Method, path: &str, auth: Auth) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.config.base_url);
        let mut builder = self.http.request(method, url);

        if auth == Auth::Authenticated {
            // Absent token: send without the header and let the server
            // reject authoritatively.
            if let Some(token) = self.tokens.access_token() {
                builder = builder.bearer_auth(token.as_str());
            }
        }

        builder
    }

    async fn execute<T: DeserializeOwned>(&self, builder: reqwest::RequestBuilder) -> Result<T> {
        let response = builder.send().await.map_err(ApiError::from)?;
        let status = response.status();

        if status.is_success() {
            let body = response.text().await.map_err(ApiError::from)?;
            serde_json::from_str::<Envelope<T>>(&body)
                .map(|envelope| envelope.data)
                .map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "api request failed");
            Err(ApiError::from_response(status.as_u16(), &body))
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .field("timeout", &self.config.timeout)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)] // Test code can use expect
mod tests {
    use super::*;

    #[test]
    fn envelope_unwraps_data_field() {
        let envelope: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"data": [1, 2, 3]}"#).expect("valid envelope");
        assert_eq!(envelope.data, vec![1, 2, 3]);
    }

    #[test]
    fn envelope_accepts_null_data() {
        let envelope: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"data": null}"#).expect("valid envelope");
        assert!(envelope.data.is_null());
    }

    #[test]
    fn client_is_cheap_to_clone() {
        let client = ApiClient::public(ApiConfig::new("http://localhost:4000"))
            .expect("client builds");
        let clone = client.clone();
        assert_eq!(client.base_url(), clone.base_url());
    }
}
