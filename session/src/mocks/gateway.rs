//! Mock auth gateway for testing.

use crate::providers::AuthGateway;
use std::sync::{Arc, Mutex, PoisonError};
use studyhub_client::ApiError;
use studyhub_client::types::{AuthClaims, UserProfile};

/// Scriptable [`AuthGateway`] that records call order.
///
/// Results default to a server error so unscripted calls are loud in
/// tests. The call log records one entry per invocation
/// (`"fetch_claims"`, `"fetch_profile:<id>"`, `"logout"`), in order.
#[derive(Debug, Clone)]
pub struct MockAuthGateway {
    claims: Arc<Mutex<Result<AuthClaims, ApiError>>>,
    profile: Arc<Mutex<Result<UserProfile, ApiError>>>,
    logout: Arc<Mutex<Result<(), ApiError>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

fn unscripted(what: &str) -> ApiError {
    ApiError::Api {
        status: 500,
        message: format!("unscripted {what} call"),
    }
}

impl MockAuthGateway {
    /// Create a gateway whose every call fails as unscripted.
    #[must_use]
    pub fn new() -> Self {
        Self {
            claims: Arc::new(Mutex::new(Err(unscripted("fetch_claims")))),
            profile: Arc::new(Mutex::new(Err(unscripted("fetch_profile")))),
            logout: Arc::new(Mutex::new(Ok(()))),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Script the claims fetch result.
    #[must_use]
    pub fn with_claims(self, result: Result<AuthClaims, ApiError>) -> Self {
        *lock(&self.claims) = result;
        self
    }

    /// Script the profile fetch result.
    #[must_use]
    pub fn with_profile(self, result: Result<UserProfile, ApiError>) -> Self {
        *lock(&self.profile) = result;
        self
    }

    /// Script the logout result.
    #[must_use]
    pub fn with_logout(self, result: Result<(), ApiError>) -> Self {
        *lock(&self.logout) = result;
        self
    }

    /// The calls made so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }

    fn record(&self, call: impl Into<String>) {
        lock(&self.calls).push(call.into());
    }
}

impl Default for MockAuthGateway {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(value: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    value.lock().unwrap_or_else(PoisonError::into_inner)
}

impl AuthGateway for MockAuthGateway {
    fn fetch_claims(&self) -> impl Future<Output = Result<AuthClaims, ApiError>> + Send {
        self.record("fetch_claims");
        let result = lock(&self.claims).clone();
        async move { result }
    }

    fn fetch_profile(
        &self,
        subject_id: &str,
    ) -> impl Future<Output = Result<UserProfile, ApiError>> + Send {
        self.record(format!("fetch_profile:{subject_id}"));
        let result = lock(&self.profile).clone();
        async move { result }
    }

    fn logout(&self) -> impl Future<Output = Result<(), ApiError>> + Send {
        self.record("logout");
        let result = lock(&self.logout).clone();
        async move { result }
    }
}
