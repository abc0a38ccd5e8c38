//! Integration tests for the session store lifecycle.
//!
//! These run the full store (reducer + effect execution) against
//! in-memory storage and a scripted gateway, covering the login chain,
//! the tolerated partial failures, logout, and cross-context storage
//! synchronization.

#![allow(clippy::expect_used)] // Test code can use expect
#![allow(clippy::unwrap_used)] // Test code can unwrap

use std::sync::Arc;
use studyhub_client::{ApiError, LoginResponse};
use studyhub_session::mocks::MockAuthGateway;
use studyhub_session::stores::MemoryStorage;
use studyhub_session::{
    AccessToken, AuthClaims, Role, SessionEvent, SessionPhase, SessionStore, StorageEvent,
    UserProfile, keys,
};
use tokio::sync::broadcast;

fn claims() -> AuthClaims {
    AuthClaims {
        subject_id: "u-17".to_string(),
        role: Role::Teacher,
        issued_at: 1_700_000_000,
        expires_at: 1_700_003_600,
    }
}

fn profile() -> UserProfile {
    serde_json::from_value(serde_json::json!({
        "id": "u-17",
        "name": "Ada Mensah",
        "email": "ada@school.example",
        "role": "teacher",
        "roleId": "r-2",
        "isActive": true,
        "dateOfBirth": null,
        "currentGrade": null,
        "phone": "+233200000000",
        "guardians": [],
        "createdAt": "2024-01-10T09:00:00Z",
        "updatedAt": "2024-06-02T10:30:00Z"
    }))
    .expect("valid profile")
}

fn login_response() -> LoginResponse {
    LoginResponse {
        access_token: AccessToken::new("tok-1"),
    }
}

fn server_error(message: &str) -> ApiError {
    ApiError::Api {
        status: 500,
        message: message.to_string(),
    }
}

fn drain(events: &mut broadcast::Receiver<SessionEvent>) -> Vec<SessionEvent> {
    let mut collected = Vec::new();
    while let Ok(event) = events.try_recv() {
        collected.push(event);
    }
    collected
}

// ═══════════════════════════════════════════════════════════════════════
// Login chain
// ═══════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn login_persists_token_claims_and_profile() {
    let storage = Arc::new(MemoryStorage::new());
    let gateway = MockAuthGateway::new()
        .with_claims(Ok(claims()))
        .with_profile(Ok(profile()));
    let store = SessionStore::init(Arc::clone(&storage), gateway.clone());

    store.login(login_response()).await;

    let snapshot = store.snapshot();
    assert!(snapshot.is_logged_in());
    assert_eq!(snapshot.role(), Some(Role::Teacher));
    assert_eq!(
        snapshot.profile.expect("profile present").name,
        "Ada Mensah"
    );

    // All three keys persisted, claims/profile as valid JSON blobs.
    assert_eq!(storage.get(keys::TOKEN), Some("tok-1".to_string()));
    let claims_blob = storage.get(keys::CLAIMS).expect("claims persisted");
    assert!(studyhub_session::validate::parse_claims(&claims_blob).is_ok());
    let profile_blob = storage.get(keys::PROFILE).expect("profile persisted");
    assert!(studyhub_session::validate::parse_profile(&profile_blob).is_ok());

    // Dependent fetches ran in order, profile only after claims resolved.
    assert_eq!(
        gateway.calls(),
        vec!["fetch_claims".to_string(), "fetch_profile:u-17".to_string()]
    );
}

#[tokio::test]
async fn failing_profile_fetch_leaves_session_logged_in() {
    let storage = Arc::new(MemoryStorage::new());
    let gateway = MockAuthGateway::new()
        .with_claims(Ok(claims()))
        .with_profile(Err(server_error("profile backend down")));
    let store = SessionStore::init(Arc::clone(&storage), gateway);

    store.login(login_response()).await;

    let snapshot = store.snapshot();
    assert!(snapshot.is_logged_in());
    assert!(snapshot.claims.is_some());
    assert!(snapshot.profile.is_none());

    // Token and claims persisted; the profile key never written.
    assert!(storage.get(keys::TOKEN).is_some());
    assert!(storage.get(keys::CLAIMS).is_some());
    assert!(storage.get(keys::PROFILE).is_none());
}

#[tokio::test]
async fn failing_claims_fetch_skips_the_profile_fetch() {
    let storage = Arc::new(MemoryStorage::new());
    let gateway = MockAuthGateway::new().with_claims(Err(server_error("who-am-i down")));
    let store = SessionStore::init(Arc::clone(&storage), gateway.clone());

    store.login(login_response()).await;

    let snapshot = store.snapshot();
    assert!(snapshot.is_logged_in());
    assert!(snapshot.claims.is_none());
    assert!(snapshot.profile.is_none());

    // No subject id, so no profile call was attempted.
    assert_eq!(gateway.calls(), vec!["fetch_claims".to_string()]);
}

// ═══════════════════════════════════════════════════════════════════════
// Logout
// ═══════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn logout_clears_storage_even_when_the_server_call_fails() {
    let storage = Arc::new(MemoryStorage::seeded([
        (keys::TOKEN, "tok-1".to_string()),
        (keys::CLAIMS, serde_json::to_string(&claims()).unwrap()),
        (keys::PROFILE, serde_json::to_string(&profile()).unwrap()),
    ]));
    let gateway = MockAuthGateway::new().with_logout(Err(server_error("already gone")));
    let store = SessionStore::init(Arc::clone(&storage), gateway.clone());
    assert!(store.snapshot().is_logged_in());

    let mut events = store.subscribe();
    store.logout().await;

    assert_eq!(store.snapshot().phase, SessionPhase::LoggedOut);
    for key in keys::ALL {
        assert_eq!(storage.get(key), None, "{key} must be cleared");
    }
    assert_eq!(gateway.calls(), vec!["logout".to_string()]);

    // The reload request follows the state change.
    let events = drain(&mut events);
    assert!(events.iter().any(|e| matches!(e, SessionEvent::ReloadRequested)));
    assert!(
        events
            .iter()
            .any(|e| matches!(e, SessionEvent::Changed(s) if !s.is_logged_in()))
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Hydration
// ═══════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn init_restores_a_persisted_session() {
    let storage = Arc::new(MemoryStorage::seeded([
        (keys::TOKEN, "tok-1".to_string()),
        (keys::CLAIMS, serde_json::to_string(&claims()).unwrap()),
        (keys::PROFILE, serde_json::to_string(&profile()).unwrap()),
    ]));
    let store = SessionStore::init(storage, MockAuthGateway::new());

    let snapshot = store.snapshot();
    assert!(snapshot.is_logged_in());
    assert_eq!(snapshot.role(), Some(Role::Teacher));
    assert!(snapshot.profile.is_some());
}

#[tokio::test]
async fn init_with_tampered_blobs_degrades_to_partial_login() {
    let storage = Arc::new(MemoryStorage::seeded([
        (keys::TOKEN, "tok-1".to_string()),
        (keys::CLAIMS, "{definitely not json".to_string()),
        (keys::PROFILE, r#"{"id": "u-17"}"#.to_string()),
    ]));
    let store = SessionStore::init(storage, MockAuthGateway::new());

    let snapshot = store.snapshot();
    assert!(snapshot.is_logged_in());
    assert!(snapshot.claims.is_none());
    assert!(snapshot.profile.is_none());
}

// ═══════════════════════════════════════════════════════════════════════
// Cross-context synchronization
// ═══════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn token_removal_in_another_tab_logs_this_tab_out() {
    let storage = Arc::new(MemoryStorage::seeded([
        (keys::TOKEN, "tok-1".to_string()),
        (keys::CLAIMS, serde_json::to_string(&claims()).unwrap()),
    ]));
    let store = SessionStore::init(storage, MockAuthGateway::new());
    assert!(store.snapshot().is_logged_in());

    let mut events = store.subscribe();
    store
        .apply_storage_event(StorageEvent::removed(keys::TOKEN))
        .await;

    assert!(!store.snapshot().is_logged_in());
    let events = drain(&mut events);
    assert!(
        events
            .iter()
            .any(|e| matches!(e, SessionEvent::Changed(s) if !s.is_logged_in()))
    );
}

#[tokio::test]
async fn login_in_another_tab_logs_this_tab_in() {
    let storage = Arc::new(MemoryStorage::new());
    let store = SessionStore::init(storage, MockAuthGateway::new());
    assert!(!store.snapshot().is_logged_in());

    store
        .apply_storage_event(StorageEvent::set(keys::TOKEN, "tok-2"))
        .await;
    store
        .apply_storage_event(StorageEvent::set(
            keys::CLAIMS,
            serde_json::to_string(&claims()).unwrap(),
        ))
        .await;

    let snapshot = store.snapshot();
    assert!(snapshot.is_logged_in());
    assert_eq!(snapshot.role(), Some(Role::Teacher));
}

#[tokio::test]
async fn malformed_blob_from_another_tab_lands_as_absent() {
    let storage = Arc::new(MemoryStorage::seeded([
        (keys::TOKEN, "tok-1".to_string()),
        (keys::PROFILE, serde_json::to_string(&profile()).unwrap()),
    ]));
    let store = SessionStore::init(storage, MockAuthGateway::new());
    assert!(store.snapshot().profile.is_some());

    store
        .apply_storage_event(StorageEvent::set(keys::PROFILE, "���"))
        .await;

    let snapshot = store.snapshot();
    assert!(snapshot.is_logged_in());
    assert!(snapshot.profile.is_none());
}

#[tokio::test]
async fn unrelated_keys_do_not_disturb_the_session() {
    let storage = Arc::new(MemoryStorage::seeded([(keys::TOKEN, "tok-1".to_string())]));
    let store = SessionStore::init(storage, MockAuthGateway::new());

    let mut events = store.subscribe();
    store
        .apply_storage_event(StorageEvent::set("studyhub.theme", "dark"))
        .await;

    assert!(store.snapshot().is_logged_in());
    assert!(drain(&mut events).is_empty());
}

// ═══════════════════════════════════════════════════════════════════════
// Subscription
// ═══════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn subscribers_observe_every_transition_of_the_login_chain() {
    let storage = Arc::new(MemoryStorage::new());
    let gateway = MockAuthGateway::new()
        .with_claims(Ok(claims()))
        .with_profile(Ok(profile()));
    let store = SessionStore::init(storage, gateway);

    let mut events = store.subscribe();
    store.login(login_response()).await;

    let changes: Vec<SessionEvent> = drain(&mut events);
    // Login, claims loaded, profile loaded: three distinct snapshots.
    assert_eq!(changes.len(), 3);
    assert!(
        changes
            .iter()
            .all(|e| matches!(e, SessionEvent::Changed(s) if s.is_logged_in()))
    );
}
