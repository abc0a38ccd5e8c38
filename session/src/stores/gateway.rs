//! HTTP-backed auth gateway.

use crate::providers::AuthGateway;
use studyhub_client::types::{AuthClaims, UserProfile};
use studyhub_client::{ApiClient, ApiError};

/// Production [`AuthGateway`] over the StudyHub API.
///
/// The wrapped [`ApiClient`] should be built with a token source that
/// reads the session's storage (see
/// [`StorageTokenSource`](crate::token::StorageTokenSource)), so these
/// calls carry whichever token the login chain just persisted.
#[derive(Debug, Clone)]
pub struct HttpAuthGateway {
    api: ApiClient,
}

impl HttpAuthGateway {
    /// Wrap an API client.
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

impl AuthGateway for HttpAuthGateway {
    async fn fetch_claims(&self) -> Result<AuthClaims, ApiError> {
        self.api.auth().me().await
    }

    async fn fetch_profile(&self, subject_id: &str) -> Result<UserProfile, ApiError> {
        self.api.auth().profile(subject_id).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.api.auth().logout().await
    }
}
