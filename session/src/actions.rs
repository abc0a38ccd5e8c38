//! Session actions.
//!
//! Every input to the session state machine, user intent and effect
//! results alike. Actions are the only way the session changes; the store
//! feeds them through [`SessionReducer`](crate::reducer::SessionReducer).

use crate::state::{AuthClaims, UserProfile};
use studyhub_client::LoginResponse;

/// One input to the session reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    /// Hydrate from durable storage at startup.
    ///
    /// Carries the raw persisted values; the reducer validates them, so a
    /// tampered blob degrades to absence instead of failing the boot.
    Restore {
        /// Raw token value, if the key was present.
        token: Option<String>,
        /// Raw claims blob, if the key was present.
        claims: Option<String>,
        /// Raw profile blob, if the key was present.
        profile: Option<String>,
    },

    /// A successful login exchange.
    ///
    /// The credential exchange itself happens in the login page (it owns
    /// the form and the error surface); the store takes over from the
    /// response onward: persist the token, then chain the claims and
    /// profile fetches.
    Login {
        /// The login endpoint's response.
        response: LoginResponse,
    },

    /// The who-am-I fetch resolved.
    ClaimsLoaded {
        /// Decoded identity claims.
        claims: AuthClaims,
    },

    /// The who-am-I fetch failed.
    ///
    /// The session stays logged in with claims absent; the profile fetch
    /// cannot be chained without a subject id.
    ClaimsLoadFailed {
        /// The normalized error message.
        message: String,
    },

    /// The profile fetch resolved.
    ProfileLoaded {
        /// The full profile record.
        profile: UserProfile,
    },

    /// The profile fetch failed.
    ///
    /// The session stays logged in with the profile absent; the UI
    /// degrades to "profile unavailable".
    ProfileLoadFailed {
        /// The normalized error message.
        message: String,
    },

    /// The user asked to sign out.
    Logout,

    /// The best-effort server logout finished (successfully or not).
    LogoutCompleted,

    /// Durable storage changed in another browsing context.
    ///
    /// `new_value: None` means the key was removed. Keys other than the
    /// three session keys are ignored.
    StorageChanged {
        /// The storage key that changed.
        key: String,
        /// The new raw value, or `None` on removal.
        new_value: Option<String>,
    },
}
