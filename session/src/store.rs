//! The live session store.
//!
//! [`SessionStore`] is the imperative shell around
//! [`SessionReducer`](crate::reducer::SessionReducer): it owns the state,
//! executes the effects a transition requests (storage writes, gateway
//! calls), feeds effect results back in as actions, and fans state changes
//! out to subscribers.
//!
//! Lifecycle: [`SessionStore::init`] hydrates from storage,
//! [`SessionStore::subscribe`] attaches an observer,
//! [`SessionStore::dispose`] silences the store. Stores are constructed
//! per embedding (and per test) — there is no process-global instance.

use crate::actions::SessionAction;
use crate::effects::SessionEffect;
use crate::keys;
use crate::providers::{AuthGateway, SessionStorage, StorageEvent};
use crate::reducer::SessionReducer;
use crate::state::{SessionSnapshot, SessionState};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use studyhub_client::LoginResponse;
use studyhub_core::reducer::Reducer;
use tokio::sync::broadcast;

/// Capacity of the event fan-out channel.
///
/// Session transitions are rare (login, logout, cross-context sync); a
/// small buffer only matters to a subscriber that has stopped polling.
const EVENT_CAPACITY: usize = 16;

/// A notification to session subscribers.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The session state changed; the new read model is attached.
    Changed(SessionSnapshot),

    /// Logout finished clearing storage; the embedding shell should
    /// reload the application so no stale in-memory state survives.
    ReloadRequested,
}

/// The live session store.
///
/// Generic over its two providers so tests run against
/// [`MemoryStorage`](crate::stores::MemoryStorage) and
/// [`MockAuthGateway`](crate::mocks::MockAuthGateway) at memory speed.
/// Embedders typically hold it in an `Arc` and hand clones of the storage
/// `Arc` to a [`StorageTokenSource`](crate::token::StorageTokenSource)
/// for the API client.
pub struct SessionStore<S, G> {
    state: RwLock<SessionState>,
    storage: Arc<S>,
    gateway: G,
    reducer: SessionReducer,
    events: broadcast::Sender<SessionEvent>,
    disposed: AtomicBool,
}

impl<S, G> SessionStore<S, G>
where
    S: SessionStorage,
    G: AuthGateway,
{
    /// Create a store hydrated from the three persisted session keys.
    ///
    /// Tampered or malformed blobs degrade to absence; hydration can never
    /// fail.
    #[must_use]
    pub fn init(storage: Arc<S>, gateway: G) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let store = Self {
            state: RwLock::new(SessionState::LoggedOut),
            storage,
            gateway,
            reducer: SessionReducer,
            events,
            disposed: AtomicBool::new(false),
        };

        // Restore produces no effects, so hydration stays synchronous.
        let action = SessionAction::Restore {
            token: store.storage.get(keys::TOKEN),
            claims: store.storage.get(keys::CLAIMS),
            profile: store.storage.get(keys::PROFILE),
        };
        let mut state = store.write_state();
        store.reducer.reduce(&mut state, action, &());
        drop(state);

        store
    }

    /// The current read model.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.read_state().snapshot()
    }

    /// Subscribe to session events.
    ///
    /// Every state transition broadcasts [`SessionEvent::Changed`];
    /// logout additionally broadcasts [`SessionEvent::ReloadRequested`]
    /// after storage is cleared.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Silence the store.
    ///
    /// Subsequent actions are ignored and no further events are sent.
    /// Intended for teardown; a disposed store still answers
    /// [`SessionStore::snapshot`].
    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::SeqCst);
    }

    /// Enter the session after a successful login exchange.
    ///
    /// Persists the token, then chains the claims and profile fetches. A
    /// failure in either fetch leaves the session logged in with that
    /// value absent.
    pub async fn login(&self, response: LoginResponse) {
        self.dispatch(SessionAction::Login { response }).await;
    }

    /// Sign out.
    ///
    /// Calls the server logout endpoint best-effort (failure is logged and
    /// swallowed), clears the three storage keys, transitions to
    /// `LoggedOut`, and asks the shell to reload.
    pub async fn logout(&self) {
        self.dispatch(SessionAction::Logout).await;
    }

    /// Mirror a storage change made by another browsing context.
    pub async fn apply_storage_event(&self, event: StorageEvent) {
        self.dispatch(SessionAction::StorageChanged {
            key: event.key,
            new_value: event.new_value,
        })
        .await;
    }

    /// Feed one action (and everything it cascades into) through the
    /// reducer.
    ///
    /// Effects execute strictly in order, each completed before the next
    /// starts; actions produced by effects are processed after the current
    /// action's effect list finishes.
    pub async fn dispatch(&self, action: SessionAction) {
        if self.disposed.load(Ordering::SeqCst) {
            tracing::debug!("ignoring action on disposed session store");
            return;
        }

        let mut queue = VecDeque::from([action]);
        while let Some(action) = queue.pop_front() {
            let before = self.snapshot();
            let effects = {
                let mut state = self.write_state();
                self.reducer.reduce(&mut state, action, &())
            };

            let after = self.snapshot();
            if after != before {
                self.emit(SessionEvent::Changed(after));
            }

            for effect in effects {
                if let Some(follow_up) = self.execute(effect).await {
                    queue.push_back(follow_up);
                }
            }
        }
    }

    async fn execute(&self, effect: SessionEffect) -> Option<SessionAction> {
        match effect {
            SessionEffect::Persist { key, value } => {
                if let Err(reason) = self.storage.set(key, &value) {
                    tracing::warn!(%reason, key, "failed to persist session value");
                }
                None
            },

            SessionEffect::Remove { key } => {
                if let Err(reason) = self.storage.remove(key) {
                    tracing::warn!(%reason, key, "failed to clear session value");
                }
                None
            },

            SessionEffect::FetchClaims => match self.gateway.fetch_claims().await {
                Ok(claims) => Some(SessionAction::ClaimsLoaded { claims }),
                Err(e) => Some(SessionAction::ClaimsLoadFailed {
                    message: e.message().to_string(),
                }),
            },

            SessionEffect::FetchProfile { subject_id } => {
                match self.gateway.fetch_profile(&subject_id).await {
                    Ok(profile) => Some(SessionAction::ProfileLoaded { profile }),
                    Err(e) => Some(SessionAction::ProfileLoadFailed {
                        message: e.message().to_string(),
                    }),
                }
            },

            SessionEffect::ServerLogout => {
                if let Err(reason) = self.gateway.logout().await {
                    tracing::warn!(
                        reason = %reason.message(),
                        "server logout failed; clearing local session anyway"
                    );
                }
                Some(SessionAction::LogoutCompleted)
            },

            SessionEffect::RequestReload => {
                self.emit(SessionEvent::ReloadRequested);
                None
            },
        }
    }

    fn emit(&self, event: SessionEvent) {
        if self.disposed.load(Ordering::SeqCst) {
            return;
        }
        // A send error only means no subscriber is currently attached.
        let _ = self.events.send(event);
    }

    fn read_state(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S, G> std::fmt::Debug for SessionStore<S, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let snapshot = self
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .snapshot();
        f.debug_struct("SessionStore")
            .field("snapshot", &snapshot)
            .field("disposed", &self.disposed.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockAuthGateway;
    use crate::stores::MemoryStorage;

    #[test]
    fn init_with_empty_storage_is_logged_out() {
        let store = SessionStore::init(Arc::new(MemoryStorage::new()), MockAuthGateway::new());
        assert!(!store.snapshot().is_logged_in());
    }

    #[tokio::test]
    async fn disposed_store_ignores_actions_and_events() {
        let storage = Arc::new(MemoryStorage::seeded([(keys::TOKEN, "tok-1")]));
        let store = SessionStore::init(Arc::clone(&storage), MockAuthGateway::new());
        let mut events = store.subscribe();

        store.dispose();
        store.logout().await;

        // Still logged in locally: the action was ignored.
        assert!(store.snapshot().is_logged_in());
        assert!(matches!(
            events.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));
    }
}
