//! Mount guards for protected pages.
//!
//! Every protected page evaluates its guard against the current session
//! snapshot *before* issuing any domain fetch. The evaluation is pure and
//! synchronous — the decision exists before a request could even be
//! constructed, so there is no flash of unauthorized content and no wasted
//! network call.
//!
//! Authorization here is advisory: the server returns 403 on disallowed
//! operations regardless of what the client renders. The guard exists for
//! UX, not security.

use studyhub_session::{Role, SessionSnapshot};

/// The guard's decision for a page visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the page.
    Allow,

    /// No session: redirect to the sign-in page.
    RedirectToSignIn,

    /// Logged in, but the role is not on the page's allow-list (or is not
    /// known yet): redirect to the home route.
    RedirectHome,
}

impl GuardOutcome {
    /// Whether the page may proceed to render and fetch.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Guard a page that only requires a login.
///
/// The home route uses this: any authenticated role may land there, even
/// while claims are still loading.
#[must_use]
pub fn require_login(snapshot: &SessionSnapshot) -> GuardOutcome {
    if snapshot.is_logged_in() {
        GuardOutcome::Allow
    } else {
        GuardOutcome::RedirectToSignIn
    }
}

/// Guard a page restricted to `allowed_roles`.
///
/// A logged-in session whose role is not yet known (claims still loading
/// or discarded as malformed) is redirected home rather than signed out;
/// the home route accepts it via [`require_login`].
#[must_use]
pub fn evaluate(snapshot: &SessionSnapshot, allowed_roles: &[Role]) -> GuardOutcome {
    if !snapshot.is_logged_in() {
        return GuardOutcome::RedirectToSignIn;
    }

    match snapshot.role() {
        Some(role) if allowed_roles.contains(&role) => GuardOutcome::Allow,
        Some(role) => {
            tracing::debug!(%role, "role not allowed for this page; redirecting home");
            GuardOutcome::RedirectHome
        },
        None => {
            tracing::debug!("session has no role yet; redirecting home");
            GuardOutcome::RedirectHome
        },
    }
}
