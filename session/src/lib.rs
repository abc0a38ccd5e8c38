//! # StudyHub Session
//!
//! The session state machine and store for the StudyHub client: who is
//! using the app right now, persisted as three durable values (bearer
//! token, decoded claims, cached profile) and kept in sync across
//! browsing contexts.
//!
//! ## Architecture
//!
//! The session is a reducer-driven state machine with two reachable
//! states:
//!
//! ```text
//! LoggedOut ── Login ──▶ LoggedIn { token, claims?, profile? }
//!     ▲                       │
//!     └──── LogoutCompleted ──┘
//! ```
//!
//! [`reducer::SessionReducer`] holds every transition rule as a pure
//! function; [`store::SessionStore`] executes the effects transitions
//! request (storage writes, gateway calls) and fans
//! [`store::SessionEvent`]s out to subscribers.
//!
//! ## Invariants
//!
//! - Claims and profile only exist while a token is present; logout
//!   clears all three in a single transition.
//! - Partial states are legal: a failed claims or profile fetch leaves
//!   the session logged in with that value absent.
//! - Persisted blobs are untrusted: anything malformed parses to
//!   "absent", never an error (see [`validate`]).
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use studyhub_session::{SessionStore, StorageTokenSource, stores::MemoryStorage};
//! use studyhub_session::stores::HttpAuthGateway;
//! use studyhub_client::{ApiClient, ApiConfig};
//!
//! let storage = Arc::new(MemoryStorage::new());
//! let api = ApiClient::new(
//!     ApiConfig::from_env()?,
//!     Arc::new(StorageTokenSource::new(Arc::clone(&storage))),
//! )?;
//! let store = SessionStore::init(storage, HttpAuthGateway::new(api.clone()));
//!
//! let login = api.auth().login(&credentials).await?;
//! store.login(login).await;
//! assert!(store.snapshot().is_logged_in());
//! ```

// Public modules
pub mod actions;
pub mod effects;
pub mod error;
pub mod keys;
pub mod mocks;
pub mod providers;
pub mod reducer;
pub mod state;
pub mod store;
pub mod stores;
pub mod token;
pub mod validate;

// Re-export main types for convenience
pub use actions::SessionAction;
pub use effects::SessionEffect;
pub use error::{Result, SessionError};
pub use providers::{AuthGateway, SessionStorage, StorageEvent};
pub use reducer::SessionReducer;
pub use state::{
    AccessToken, AuthClaims, Guardian, Role, SessionPhase, SessionSnapshot, SessionState,
    UserProfile,
};
pub use store::{SessionEvent, SessionStore};
pub use token::StorageTokenSource;
