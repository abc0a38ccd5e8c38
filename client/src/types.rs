//! Shared wire types for the StudyHub API.
//!
//! Identity types live here because both the session crate and several
//! resource clients exchange them. Entity types owned by a single resource
//! live next to that resource's client.
//!
//! The server speaks camelCase JSON; every wire struct carries the rename
//! so field names stay idiomatic on the Rust side.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Opaque bearer credential issued by the login endpoint.
///
/// Presence of a token is what "logged in" means on the client; the server
/// is the only party that can interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a raw token string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw token, for the `Authorization` header.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for AccessToken {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// Account role, the sole input to client-side authorization decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// A learner account.
    Student,
    /// A teaching account.
    Teacher,
    /// A coordinator account with administrative reach.
    Coordinator,
}

impl Role {
    /// The wire representation of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::Coordinator => "coordinator",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "student" => Ok(Self::Student),
            "teacher" => Ok(Self::Teacher),
            "coordinator" => Ok(Self::Coordinator),
            _ => Err(format!("unknown role: {s}")),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded identity claims from the `/auth/me` endpoint.
///
/// Timestamps are unix seconds, matching the wire shape; use the `_utc`
/// accessors for calendar math.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthClaims {
    /// The authenticated user's id.
    pub subject_id: String,

    /// The authenticated user's role.
    pub role: Role,

    /// When the token was issued (unix seconds).
    pub issued_at: i64,

    /// When the token expires (unix seconds).
    pub expires_at: i64,
}

impl AuthClaims {
    /// Issue time as a `DateTime`.
    #[must_use]
    pub fn issued_at_utc(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.issued_at, 0).single()
    }

    /// Expiry time as a `DateTime`.
    #[must_use]
    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.expires_at, 0).single()
    }

    /// Whether the claims are expired at `now`.
    ///
    /// The client never proactively signs out on expiry (the server 401s
    /// authoritatively); this exists for shells that want to render an
    /// expiry hint.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now.timestamp()
    }
}

/// A guardian contact attached to a student account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guardian {
    /// Guardian's full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Relationship to the student (e.g., "mother").
    pub relationship: String,
}

/// Denormalized account record for a student, teacher, or coordinator.
///
/// `guardians` is structurally always present (possibly empty); it only
/// carries meaning for student accounts. The timestamp fields stay as the
/// server's strings because the persisted-session validator checks them
/// structurally, not as dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Account id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Account role.
    pub role: Role,
    /// Server-side role record id.
    pub role_id: String,
    /// Whether the account is activated.
    pub is_active: bool,
    /// Date of birth, if recorded.
    ///
    /// Required on the wire: the server always sends the key, with `null`
    /// when unset. A blob missing the key is rejected as malformed.
    #[serde(deserialize_with = "required_nullable")]
    pub date_of_birth: Option<String>,
    /// Current grade, for students. Required on the wire, nullable.
    #[serde(deserialize_with = "required_nullable")]
    pub current_grade: Option<String>,
    /// Contact phone number, if recorded. Required on the wire, nullable.
    #[serde(deserialize_with = "required_nullable")]
    pub phone: Option<String>,
    /// Guardian contacts (empty for non-students).
    pub guardians: Vec<Guardian>,
    /// Creation timestamp, as sent by the server.
    pub created_at: String,
    /// Last-update timestamp, as sent by the server.
    pub updated_at: String,
}

/// Deserialize an `Option` field whose key must be present.
///
/// Plain `Option` fields are silently defaulted when the key is missing;
/// routing through `deserialize_with` keeps "key absent" an error while
/// still accepting an explicit `null`.
fn required_nullable<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}

/// One page of a list endpoint's results.
///
/// `page` and `limit` are 1-indexed, mirroring the query parameters that
/// produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The records on this page.
    pub items: Vec<T>,
    /// 1-indexed page number.
    pub page: u32,
    /// Requested page size.
    pub limit: u32,
    /// Total records across all pages.
    pub total: u64,
}

#[cfg(test)]
#[allow(clippy::expect_used)] // Test code can use expect
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn role_round_trips_through_wire_strings() {
        for role in [Role::Student, Role::Teacher, Role::Coordinator] {
            let parsed: Role = role.as_str().parse().expect("known role");
            assert_eq!(parsed, role);
        }
        assert!("principal".parse::<Role>().is_err());
    }

    #[test]
    fn claims_expiry_is_inclusive_of_the_boundary() {
        let claims = AuthClaims {
            subject_id: "u-1".to_string(),
            role: Role::Student,
            issued_at: 1_700_000_000,
            expires_at: 1_700_003_600,
        };

        let before = Utc.timestamp_opt(1_700_003_599, 0).single().expect("valid");
        let at = Utc.timestamp_opt(1_700_003_600, 0).single().expect("valid");

        assert!(!claims.is_expired(before));
        assert!(claims.is_expired(at));
    }

    #[test]
    fn claims_deserialize_from_camel_case() {
        let raw = r#"{"subjectId":"u-9","role":"teacher","issuedAt":1,"expiresAt":2}"#;
        let claims: AuthClaims = serde_json::from_str(raw).expect("valid claims");
        assert_eq!(claims.subject_id, "u-9");
        assert_eq!(claims.role, Role::Teacher);
    }
}
