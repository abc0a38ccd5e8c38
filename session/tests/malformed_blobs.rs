//! Property tests for persisted-blob validation.
//!
//! Durable storage contents are attacker- and accident-writable, so the
//! validators must hold for *any* byte string: parse to a value or to
//! absence, never panic, never leak a parse error out of the session
//! layer.

#![allow(clippy::expect_used)] // Test code can use expect

use proptest::prelude::*;
use studyhub_session::validate::{claims_or_absent, parse_claims, parse_profile, profile_or_absent};
use studyhub_session::{SessionAction, SessionReducer, SessionState};
use studyhub_core::reducer::Reducer;

proptest! {
    /// Arbitrary strings under the claims key parse to absent or a valid
    /// value, and never panic.
    #[test]
    fn claims_parsing_never_panics(raw in ".*") {
        let _ = parse_claims(&raw);
        let _ = claims_or_absent(Some(&raw));
    }

    /// Arbitrary strings under the profile key parse to absent or a valid
    /// value, and never panic.
    #[test]
    fn profile_parsing_never_panics(raw in ".*") {
        let _ = parse_profile(&raw);
        let _ = profile_or_absent(Some(&raw));
    }

    /// Arbitrary JSON-ish objects missing the full shape are rejected,
    /// not partially accepted.
    #[test]
    fn incomplete_objects_are_rejected(
        key in "[a-zA-Z]{1,12}",
        value in "[a-zA-Z0-9]{0,12}",
    ) {
        let blob = format!(r#"{{"{key}": "{value}"}}"#);
        prop_assert!(parse_claims(&blob).is_err());
        prop_assert!(parse_profile(&blob).is_err());
    }

    /// Hydrating a session from arbitrary storage contents always lands
    /// in a well-formed state: logged out without a token, logged in
    /// (with possibly-absent claims/profile) with one.
    #[test]
    fn restore_tolerates_arbitrary_storage(
        token in proptest::option::of(".*"),
        claims in proptest::option::of(".*"),
        profile in proptest::option::of(".*"),
    ) {
        let had_token = token.is_some();
        let mut state = SessionState::LoggedOut;

        let effects = SessionReducer.reduce(
            &mut state,
            SessionAction::Restore { token, claims, profile },
            &(),
        );

        prop_assert!(effects.is_empty());
        prop_assert_eq!(state.is_logged_in(), had_token);
    }
}

/// A round-trip sanity anchor for the properties above: the exact blobs
/// the store itself persists must parse back to the same values.
#[test]
fn persisted_shapes_round_trip() {
    let claims_blob = serde_json::json!({
        "subjectId": "u-1",
        "role": "coordinator",
        "issuedAt": 10,
        "expiresAt": 20
    })
    .to_string();

    let claims = parse_claims(&claims_blob).expect("valid claims");
    let re_encoded = serde_json::to_string(&claims).expect("encodes");
    assert_eq!(
        parse_claims(&re_encoded).expect("re-parses"),
        claims
    );
}
