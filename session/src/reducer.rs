//! The session reducer.
//!
//! Pure transition logic for the session state machine. Two states are
//! reachable — `LoggedOut` and `LoggedIn` — and every rule about how the
//! session moves between them lives in this file:
//!
//! ```text
//! Login          → store token → fetch claims → fetch profile
//! Logout         → best-effort server logout → clear storage → reload
//! StorageChanged → re-validate the changed key, last writer wins
//! ```
//!
//! Fetch failures after login are tolerated: the session stays logged in
//! with the affected value absent. Reverting to `LoggedOut` because a
//! profile read failed would sign the user out for a transient error.

use crate::actions::SessionAction;
use crate::effects::SessionEffect;
use crate::state::{AccessToken, SessionState};
use crate::{keys, validate};
use studyhub_core::reducer::Reducer;
use studyhub_core::{SmallVec, smallvec};

/// Pure reducer for [`SessionState`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Action = SessionAction;
    type Effect = SessionEffect;
    type Environment = ();

    #[allow(clippy::too_many_lines)] // One arm per transition; splitting hides the machine
    fn reduce(
        &self,
        state: &mut SessionState,
        action: SessionAction,
        (): &(),
    ) -> SmallVec<[SessionEffect; 4]> {
        match action {
            // ═══════════════════════════════════════════════════════════
            // Hydration
            // ═══════════════════════════════════════════════════════════
            SessionAction::Restore {
                token,
                claims,
                profile,
            } => {
                *state = match token {
                    None => SessionState::LoggedOut,
                    Some(raw) => SessionState::LoggedIn {
                        token: AccessToken::new(raw),
                        claims: validate::claims_or_absent(claims.as_deref()),
                        profile: validate::profile_or_absent(profile.as_deref()),
                    },
                };
                smallvec![]
            },

            // ═══════════════════════════════════════════════════════════
            // Login chain
            // ═══════════════════════════════════════════════════════════
            SessionAction::Login { response } => {
                let raw = response.access_token.as_str().to_string();
                *state = SessionState::LoggedIn {
                    token: response.access_token,
                    claims: None,
                    profile: None,
                };

                smallvec![
                    SessionEffect::Persist {
                        key: keys::TOKEN,
                        value: raw,
                    },
                    SessionEffect::FetchClaims,
                ]
            },

            SessionAction::ClaimsLoaded { claims: loaded } => match state {
                SessionState::LoggedIn { claims, .. } => {
                    let mut effects: SmallVec<[SessionEffect; 4]> = smallvec![];
                    if let Some(blob) = encode(&loaded) {
                        effects.push(SessionEffect::Persist {
                            key: keys::CLAIMS,
                            value: blob,
                        });
                    }
                    effects.push(SessionEffect::FetchProfile {
                        subject_id: loaded.subject_id.clone(),
                    });
                    *claims = Some(loaded);
                    effects
                },
                SessionState::LoggedOut => {
                    // Stale result: the session ended while the fetch was
                    // in flight.
                    tracing::debug!("dropping claims for a closed session");
                    smallvec![]
                },
            },

            SessionAction::ClaimsLoadFailed { message } => {
                tracing::warn!(%message, "claims fetch failed; staying logged in without claims");
                smallvec![]
            },

            SessionAction::ProfileLoaded { profile: loaded } => match state {
                SessionState::LoggedIn { profile, .. } => {
                    let mut effects: SmallVec<[SessionEffect; 4]> = smallvec![];
                    if let Some(blob) = encode(&loaded) {
                        effects.push(SessionEffect::Persist {
                            key: keys::PROFILE,
                            value: blob,
                        });
                    }
                    *profile = Some(loaded);
                    effects
                },
                SessionState::LoggedOut => {
                    tracing::debug!("dropping profile for a closed session");
                    smallvec![]
                },
            },

            SessionAction::ProfileLoadFailed { message } => {
                tracing::warn!(%message, "profile fetch failed; staying logged in without profile");
                smallvec![]
            },

            // ═══════════════════════════════════════════════════════════
            // Logout chain
            // ═══════════════════════════════════════════════════════════
            SessionAction::Logout => match state {
                SessionState::LoggedOut => smallvec![],
                SessionState::LoggedIn { .. } => smallvec![SessionEffect::ServerLogout],
            },

            SessionAction::LogoutCompleted => {
                *state = SessionState::LoggedOut;
                smallvec![
                    SessionEffect::Remove { key: keys::TOKEN },
                    SessionEffect::Remove { key: keys::CLAIMS },
                    SessionEffect::Remove { key: keys::PROFILE },
                    SessionEffect::RequestReload,
                ]
            },

            // ═══════════════════════════════════════════════════════════
            // Cross-context synchronization
            // ═══════════════════════════════════════════════════════════
            SessionAction::StorageChanged { key, new_value } => {
                apply_storage_change(state, &key, new_value);
                smallvec![]
            },
        }
    }
}

/// Mirror a storage change made by another browsing context.
///
/// Only the three session keys are reacted to; values are re-validated on
/// the way in so a tampered blob lands as absence. No effects: the other
/// context already persisted the value.
fn apply_storage_change(state: &mut SessionState, key: &str, new_value: Option<String>) {
    match key {
        keys::TOKEN => match new_value {
            None => {
                tracing::debug!("token removed in another context; logging out");
                *state = SessionState::LoggedOut;
            },
            Some(raw) => {
                // Keep whatever claims/profile mirrors already validated;
                // their own storage events follow separately.
                let (claims, profile) = match std::mem::take(state) {
                    SessionState::LoggedIn {
                        claims, profile, ..
                    } => (claims, profile),
                    SessionState::LoggedOut => (None, None),
                };
                *state = SessionState::LoggedIn {
                    token: AccessToken::new(raw),
                    claims,
                    profile,
                };
            },
        },
        keys::CLAIMS => {
            if let SessionState::LoggedIn { claims, .. } = state {
                *claims = validate::claims_or_absent(new_value.as_deref());
            }
        },
        keys::PROFILE => {
            if let SessionState::LoggedIn { profile, .. } = state {
                *profile = validate::profile_or_absent(new_value.as_deref());
            }
        },
        _ => {
            tracing::debug!(key, "ignoring storage change for unrelated key");
        },
    }
}

/// Serialize a value for persistence, degrading failure to "skip".
fn encode<T: serde::Serialize>(value: &T) -> Option<String> {
    match serde_json::to_string(value) {
        Ok(blob) => Some(blob),
        Err(reason) => {
            tracing::warn!(%reason, "failed to encode session value; not persisting");
            None
        },
    }
}
