//! Session provider traits.
//!
//! The store's two external dependencies, abstracted so tests construct
//! isolated instances:
//!
//! - [`SessionStorage`]: durable key/value storage for the three session
//!   keys (the browser-localStorage analog);
//! - [`AuthGateway`]: the outbound auth calls the session lifecycle
//!   needs (who-am-I, profile, logout).
//!
//! Concrete implementations live in [`stores`](crate::stores); test
//! doubles live in [`mocks`](crate::mocks).

use studyhub_client::ApiError;
use studyhub_client::types::{AuthClaims, UserProfile};

/// Durable key/value storage for session state.
///
/// Reads and writes are synchronous, mirroring the storage interface this
/// models. A value that cannot be read is indistinguishable from an absent
/// one — the caller validates content separately.
pub trait SessionStorage: Send + Sync {
    /// Read a key, `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a key.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`](crate::SessionError::Storage) if
    /// the value cannot be written.
    fn set(&self, key: &str, value: &str) -> crate::error::Result<()>;

    /// Remove a key. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`](crate::SessionError::Storage) if
    /// the key cannot be cleared.
    fn remove(&self, key: &str) -> crate::error::Result<()>;
}

/// A change made to durable storage by another browsing context.
///
/// The embedding shell bridges whatever change-notification source exists
/// (another window, another process) into
/// [`SessionStore::apply_storage_event`](crate::store::SessionStore::apply_storage_event).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEvent {
    /// The key that changed.
    pub key: String,

    /// The new value, or `None` when the key was removed.
    pub new_value: Option<String>,
}

impl StorageEvent {
    /// A key was written.
    #[must_use]
    pub fn set(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            new_value: Some(value.into()),
        }
    }

    /// A key was removed.
    #[must_use]
    pub fn removed(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            new_value: None,
        }
    }
}

/// Outbound auth calls driven by the session lifecycle.
///
/// All methods use whatever token is current at call time; the gateway's
/// transport is expected to pull it from storage through a token source.
pub trait AuthGateway: Send + Sync {
    /// Fetch the decoded identity claims for the current token.
    ///
    /// # Errors
    ///
    /// Returns the facade's normalized [`ApiError`]; the reducer converts
    /// it into a stay-logged-in partial state, never a sign-out.
    fn fetch_claims(&self) -> impl Future<Output = Result<AuthClaims, ApiError>> + Send;

    /// Fetch the full profile for a subject id.
    ///
    /// # Errors
    ///
    /// Returns the facade's normalized [`ApiError`]; failure leaves the
    /// profile absent.
    fn fetch_profile(
        &self,
        subject_id: &str,
    ) -> impl Future<Output = Result<UserProfile, ApiError>> + Send;

    /// Invalidate the current token server-side.
    ///
    /// # Errors
    ///
    /// Returns the facade's normalized [`ApiError`]; the store logs and
    /// swallows it — local sign-out proceeds regardless.
    fn logout(&self) -> impl Future<Output = Result<(), ApiError>> + Send;
}
