//! Auth endpoints: login exchange, identity claims, logout.
//!
//! These are the only operations the session store calls; everything else
//! in this crate assumes a token already exists.

use crate::api::{ApiClient, Auth};
use crate::error::Result;
use crate::types::{AccessToken, AuthClaims, UserProfile};
use serde::{Deserialize, Serialize};

/// Login request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl Credentials {
    /// Build a credentials payload.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Successful login exchange result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// The bearer credential for subsequent requests.
    pub access_token: AccessToken,
}

/// Client for the auth endpoints.
#[derive(Debug, Clone, Copy)]
pub struct AuthClient<'a> {
    api: &'a ApiClient,
}

impl<'a> AuthClient<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Exchange credentials for an access token.
    ///
    /// This is the one public endpoint; no bearer token is attached.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched —
    /// bad credentials arrive as a server-reported error.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        self.api.post("/auth/login", credentials, Auth::Public).await
    }

    /// Fetch the decoded identity claims for the current token.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn me(&self) -> Result<AuthClaims> {
        self.api.get("/auth/me", &[], Auth::Authenticated).await
    }

    /// Fetch the full profile backing the given subject id.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn profile(&self, subject_id: &str) -> Result<UserProfile> {
        self.api
            .get(&format!("/users/{subject_id}"), &[], Auth::Authenticated)
            .await
    }

    /// Invalidate the current token server-side.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    /// The session store treats a failure here as best-effort and clears
    /// local state regardless.
    pub async fn logout(&self) -> Result<()> {
        let _: serde_json::Value = self
            .api
            .post("/auth/logout", &serde_json::json!({}), Auth::Authenticated)
            .await?;
        Ok(())
    }
}
