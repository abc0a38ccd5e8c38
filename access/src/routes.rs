//! The navigation route table.
//!
//! One static table, filtered per role. Order is the order entries are
//! declared in — navigation renders it as-is, so the table is never
//! sorted.

use studyhub_session::Role;

/// One navigable route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    /// Navigation label.
    pub label: &'static str,

    /// Client-side path.
    pub path: &'static str,

    /// Roles that may reach this route.
    pub allowed_roles: &'static [Role],
}

impl RouteEntry {
    /// Whether `role` may reach this route.
    #[must_use]
    pub fn allows(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }
}

const ALL_ROLES: &[Role] = &[Role::Student, Role::Teacher, Role::Coordinator];
const STAFF: &[Role] = &[Role::Teacher, Role::Coordinator];

/// The full route table, in navigation order.
pub const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        label: "Home",
        path: "/",
        allowed_roles: ALL_ROLES,
    },
    RouteEntry {
        label: "Assessments",
        path: "/assessments",
        allowed_roles: ALL_ROLES,
    },
    RouteEntry {
        label: "Content Library",
        path: "/contents",
        allowed_roles: ALL_ROLES,
    },
    RouteEntry {
        label: "Learning Paths",
        path: "/learning-paths",
        allowed_roles: ALL_ROLES,
    },
    RouteEntry {
        label: "Recommendations",
        path: "/recommendations",
        allowed_roles: &[Role::Student],
    },
    RouteEntry {
        label: "People",
        path: "/people",
        allowed_roles: STAFF,
    },
    RouteEntry {
        label: "Administration",
        path: "/admin",
        allowed_roles: &[Role::Coordinator],
    },
];

/// The routes reachable by `role`, in table order.
#[must_use]
pub fn reachable_routes(role: Role) -> Vec<&'static RouteEntry> {
    ROUTES.iter().filter(|route| route.allows(role)).collect()
}

/// Look up a route by its path.
#[must_use]
pub fn route_for_path(path: &str) -> Option<&'static RouteEntry> {
    ROUTES.iter().find(|route| route.path == path)
}
