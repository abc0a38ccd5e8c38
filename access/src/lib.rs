//! # StudyHub Access
//!
//! Client-side route authorization: which navigation entries a role can
//! see, and what a protected page does with the current session before it
//! renders or fetches anything.
//!
//! Everything here is pure and synchronous on purpose — decisions are made
//! from a [`SessionSnapshot`](studyhub_session::SessionSnapshot) already
//! in hand, so no unauthorized content can flash while something loads and
//! no domain request is issued for a page the user will be bounced from.
//!
//! The server remains the enforcement point (it 403s disallowed
//! operations); this crate only decides what the client shows.
//!
//! ## Example
//!
//! ```
//! use studyhub_access::{GuardOutcome, evaluate, reachable_routes};
//! use studyhub_session::{Role, SessionSnapshot};
//!
//! // Navigation for a student.
//! let nav = reachable_routes(Role::Student);
//! assert!(nav.iter().all(|route| route.allows(Role::Student)));
//!
//! // A student visiting a staff-only page is sent home.
//! let snapshot = SessionSnapshot::logged_out();
//! assert_eq!(
//!     evaluate(&snapshot, &[Role::Teacher]),
//!     GuardOutcome::RedirectToSignIn
//! );
//! ```

pub mod guard;
pub mod interest;
pub mod routes;

// Re-export main types for convenience
pub use guard::{GuardOutcome, evaluate, require_login};
pub use interest::{Interest, InterestGuard};
pub use routes::{ROUTES, RouteEntry, reachable_routes, route_for_path};
