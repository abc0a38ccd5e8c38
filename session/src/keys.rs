//! Durable storage keys.
//!
//! The session persists exactly three values. Cross-context change
//! notifications are matched against these keys and nothing else.

/// Raw bearer token.
pub const TOKEN: &str = "studyhub.session.token";

/// Decoded auth claims, as a JSON blob.
pub const CLAIMS: &str = "studyhub.session.claims";

/// Cached user profile, as a JSON blob.
pub const PROFILE: &str = "studyhub.session.profile";

/// All session keys, in clearing order.
pub const ALL: [&str; 3] = [TOKEN, CLAIMS, PROFILE];
