//! Structural validation of persisted session blobs.
//!
//! Durable storage is writable by anything in the browsing context, so the
//! blobs under the claims and profile keys are untrusted input: malformed
//! JSON, truncations, and hand-edited values are all realistic. The
//! contract here is absolute — a blob either parses to a fully-shaped
//! value or it is *absent*. Nothing in this module panics or lets a parse
//! error escape the session layer.
//!
//! The shape checks ride on serde:
//!
//! - claims: string `subjectId`/`role` (role must be a known role),
//!   integer `issuedAt`/`expiresAt`;
//! - profile: string `id/name/email/role/roleId`, boolean `isActive`,
//!   string `createdAt/updatedAt`, null-or-string
//!   `dateOfBirth/currentGrade/phone` (keys required), and `guardians` a
//!   list whose every element has string `name/email/phone/relationship`.

use studyhub_client::types::{AuthClaims, UserProfile};
use thiserror::Error;

/// Why a persisted blob was rejected.
///
/// The reason is for diagnostics only; every caller treats a rejection as
/// "value absent".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("malformed session blob: {0}")]
pub struct ParseFailure(String);

/// Parse a persisted claims blob.
///
/// # Errors
///
/// Returns [`ParseFailure`] for malformed JSON or any shape violation.
pub fn parse_claims(raw: &str) -> Result<AuthClaims, ParseFailure> {
    serde_json::from_str(raw).map_err(|e| ParseFailure(e.to_string()))
}

/// Parse a persisted profile blob.
///
/// # Errors
///
/// Returns [`ParseFailure`] for malformed JSON or any shape violation.
pub fn parse_profile(raw: &str) -> Result<UserProfile, ParseFailure> {
    serde_json::from_str(raw).map_err(|e| ParseFailure(e.to_string()))
}

/// Parse an optional claims blob, degrading rejections to absence.
#[must_use]
pub fn claims_or_absent(raw: Option<&str>) -> Option<AuthClaims> {
    let raw = raw?;
    match parse_claims(raw) {
        Ok(claims) => Some(claims),
        Err(reason) => {
            tracing::debug!(%reason, "discarding persisted claims");
            None
        },
    }
}

/// Parse an optional profile blob, degrading rejections to absence.
#[must_use]
pub fn profile_or_absent(raw: Option<&str>) -> Option<UserProfile> {
    let raw = raw?;
    match parse_profile(raw) {
        Ok(profile) => Some(profile),
        Err(reason) => {
            tracing::debug!(%reason, "discarding persisted profile");
            None
        },
    }
}
