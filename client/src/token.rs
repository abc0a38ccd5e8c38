//! Bearer token injection.
//!
//! The facade never owns credentials. Whoever constructs an
//! [`ApiClient`](crate::ApiClient) supplies a [`TokenSource`]; the session
//! store implements it over its persisted token so every authenticated
//! request picks up whatever token is current *at send time*, including one
//! written by another browsing context moments earlier.

use crate::types::AccessToken;
use std::sync::Arc;

/// Supplies the current access token, if any.
pub trait TokenSource: Send + Sync {
    /// The token to attach to authenticated requests.
    ///
    /// `None` means "not logged in"; the request is sent without an
    /// `Authorization` header and the server rejects it authoritatively.
    fn access_token(&self) -> Option<AccessToken>;
}

impl<T: TokenSource + ?Sized> TokenSource for Arc<T> {
    fn access_token(&self) -> Option<AccessToken> {
        (**self).access_token()
    }
}

/// A source with no credentials, for public-only clients.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuth;

impl TokenSource for NoAuth {
    fn access_token(&self) -> Option<AccessToken> {
        None
    }
}

/// A fixed token, for scripts and tests.
#[derive(Debug, Clone)]
pub struct StaticToken(AccessToken);

impl StaticToken {
    /// Wrap a fixed token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(AccessToken::new(token))
    }
}

impl TokenSource for StaticToken {
    fn access_token(&self) -> Option<AccessToken> {
        Some(self.0.clone())
    }
}
