//! Session effects.
//!
//! Descriptions of the side effects the session reducer can request.
//! Effects are values, not execution: the store interprets them, in order,
//! each completed before the next starts. That ordering is load-bearing —
//! the token must be persisted before the claims fetch goes out, and the
//! server logout must finish before storage is cleared.

/// One side effect requested by the session reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEffect {
    /// Write a value under a session storage key.
    Persist {
        /// The storage key.
        key: &'static str,
        /// The raw value to store.
        value: String,
    },

    /// Remove a session storage key.
    Remove {
        /// The storage key.
        key: &'static str,
    },

    /// Fetch identity claims from the who-am-I endpoint.
    ///
    /// Resolves to `ClaimsLoaded` or `ClaimsLoadFailed`.
    FetchClaims,

    /// Fetch the full profile for a subject id.
    ///
    /// Resolves to `ProfileLoaded` or `ProfileLoadFailed`.
    FetchProfile {
        /// The claims' subject id.
        subject_id: String,
    },

    /// Call the server logout endpoint, best-effort.
    ///
    /// Always resolves to `LogoutCompleted`; a failure is logged and
    /// swallowed so local sign-out can never be blocked by the network.
    ServerLogout,

    /// Ask the embedding shell to reload the application.
    ///
    /// Emitted after logout clears storage, so no stale in-memory state
    /// survives the transition.
    RequestReload,
}
