//! Session state types.
//!
//! The session is an explicit two-state machine. `LoggedIn` holds the
//! bearer token plus best-effort claims and profile: either may be absent
//! transiently (a fetch failed, or another context wrote a blob that did
//! not validate) and every reader must tolerate that without panicking.

use serde::{Deserialize, Serialize};

// The identity shapes are shared with the HTTP client: what the session
// persists is exactly what the wire carries.
pub use studyhub_client::types::{AccessToken, AuthClaims, Guardian, Role, UserProfile};

/// The session state machine.
///
/// Logout clears token, claims, and profile atomically — it is a single
/// transition to `LoggedOut`, never a field-by-field teardown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum SessionState {
    /// No credential present.
    #[default]
    LoggedOut,

    /// A token is present; claims and profile are best-effort.
    LoggedIn {
        /// The bearer credential.
        token: AccessToken,

        /// Decoded identity claims, if the who-am-I fetch (or a storage
        /// blob) produced a valid value.
        claims: Option<AuthClaims>,

        /// Cached profile, if the profile fetch (or a storage blob)
        /// produced a valid value.
        profile: Option<UserProfile>,
    },
}

impl SessionState {
    /// Whether a credential is present.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn { .. })
    }

    /// The current token, if any.
    #[must_use]
    pub const fn token(&self) -> Option<&AccessToken> {
        match self {
            Self::LoggedOut => None,
            Self::LoggedIn { token, .. } => Some(token),
        }
    }

    /// The current claims, if present.
    #[must_use]
    pub const fn claims(&self) -> Option<&AuthClaims> {
        match self {
            Self::LoggedOut | Self::LoggedIn { claims: None, .. } => None,
            Self::LoggedIn {
                claims: Some(claims),
                ..
            } => Some(claims),
        }
    }

    /// The cached profile, if present.
    #[must_use]
    pub const fn profile(&self) -> Option<&UserProfile> {
        match self {
            Self::LoggedOut | Self::LoggedIn { profile: None, .. } => None,
            Self::LoggedIn {
                profile: Some(profile),
                ..
            } => Some(profile),
        }
    }

    /// The session's role, if any.
    ///
    /// Claims are authoritative; the profile is consulted only when claims
    /// are absent (a transient partial state).
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.claims()
            .map(|claims| claims.role)
            .or_else(|| self.profile().map(|profile| profile.role))
    }

    /// A read model of this state for subscribers.
    ///
    /// The token stays out of snapshots: transport code obtains it through
    /// a token source, UI code never needs it.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        match self {
            Self::LoggedOut => SessionSnapshot {
                phase: SessionPhase::LoggedOut,
                claims: None,
                profile: None,
            },
            Self::LoggedIn {
                claims, profile, ..
            } => SessionSnapshot {
                phase: SessionPhase::LoggedIn,
                claims: claims.clone(),
                profile: profile.clone(),
            },
        }
    }
}

/// Which side of the state machine the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No credential present.
    LoggedOut,
    /// A credential is present.
    LoggedIn,
}

/// A cheap, cloneable view of the session for subscribers and guards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Which state the session is in.
    pub phase: SessionPhase,

    /// Claims, when present.
    pub claims: Option<AuthClaims>,

    /// Profile, when present.
    pub profile: Option<UserProfile>,
}

impl SessionSnapshot {
    /// A logged-out snapshot.
    #[must_use]
    pub const fn logged_out() -> Self {
        Self {
            phase: SessionPhase::LoggedOut,
            claims: None,
            profile: None,
        }
    }

    /// Whether a credential is present.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.phase == SessionPhase::LoggedIn
    }

    /// The session's role, claims first, profile as fallback.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.claims
            .as_ref()
            .map(|claims| claims.role)
            .or_else(|| self.profile.as_ref().map(|profile| profile.role))
    }
}
