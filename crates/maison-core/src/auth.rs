//! # Session & Route Authorization
//!
//! The session shape and the pure route-authorization rules.
//!
//! ## Soft Redirects
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    authorize(route, session)                            │
//! │                                                                         │
//! │  requested route                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  public route? ──────────────────────────────► Allow                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  no session? ────────────────────────────────► RedirectToLogin         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  role in allowed set? ───────────────────────► Allow                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Redirect(home route for role)                                         │
//! │    admin → /admin    staff → /staff    client → /shop                  │
//! │                                                                         │
//! │  Authorization failures redirect to a role-appropriate home instead    │
//! │  of an error page; a demo storefront has no dead-end error states.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Role;

// =============================================================================
// Session
// =============================================================================

/// The in-memory record of who is currently signed in.
///
/// Holds role and email only; deliberately not tied to the managed
/// `UserRecord` collection (a demo simplification). Absent = signed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub role: Role,
    pub email: String,
}

// =============================================================================
// Routes
// =============================================================================

/// The storefront's route surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Home,
    About,
    Collections,
    Portfolio,
    Services,
    Contact,
    Register,
    Login,
    Shop,
    Checkout,
    Profile,
    Admin,
    Staff,
}

/// What a route requires of the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Reachable without a session.
    Public,
    /// Reachable only by the listed roles.
    Roles(&'static [Role]),
}

/// Any signed-in account.
const ANY_ACCOUNT: &[Role] = &[Role::Client, Role::Staff, Role::Admin];

impl Route {
    /// URL path for the route.
    pub const fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Collections => "/collections",
            Route::Portfolio => "/portfolio",
            Route::Services => "/services",
            Route::Contact => "/contact",
            Route::Register => "/register",
            Route::Login => "/login",
            Route::Shop => "/shop",
            Route::Checkout => "/checkout",
            Route::Profile => "/profile",
            Route::Admin => "/admin",
            Route::Staff => "/staff",
        }
    }

    /// Parses a URL path.
    pub fn from_path(path: &str) -> Option<Route> {
        match path {
            "/" => Some(Route::Home),
            "/about" => Some(Route::About),
            "/collections" => Some(Route::Collections),
            "/portfolio" => Some(Route::Portfolio),
            "/services" => Some(Route::Services),
            "/contact" => Some(Route::Contact),
            "/register" => Some(Route::Register),
            "/login" => Some(Route::Login),
            "/shop" => Some(Route::Shop),
            "/checkout" => Some(Route::Checkout),
            "/profile" => Some(Route::Profile),
            "/admin" => Some(Route::Admin),
            "/staff" => Some(Route::Staff),
            _ => None,
        }
    }

    /// What this route requires of the current session.
    pub const fn access(&self) -> RouteAccess {
        match self {
            Route::Home
            | Route::About
            | Route::Collections
            | Route::Portfolio
            | Route::Services
            | Route::Contact
            | Route::Register
            | Route::Login => RouteAccess::Public,
            Route::Shop | Route::Checkout | Route::Profile => RouteAccess::Roles(ANY_ACCOUNT),
            Route::Admin => RouteAccess::Roles(&[Role::Admin]),
            Route::Staff => RouteAccess::Roles(&[Role::Staff, Role::Admin]),
        }
    }
}

// =============================================================================
// Authorization
// =============================================================================

/// Outcome of a route authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// The view may render.
    Allow,
    /// No session: send the visitor to the sign-in view.
    RedirectToLogin,
    /// Session exists but the role is not allowed: soft redirect to the
    /// role's home instead of an error page.
    Redirect(Route),
}

/// Pure membership check: may `role` reach a view with `access`?
pub const fn allowed(role: Role, access: RouteAccess) -> bool {
    match access {
        RouteAccess::Public => true,
        RouteAccess::Roles(roles) => {
            let mut i = 0;
            while i < roles.len() {
                if roles[i] as u8 == role as u8 {
                    return true;
                }
                i += 1;
            }
            false
        }
    }
}

/// The default landing view for a role after a soft redirect.
pub const fn home_route(role: Role) -> Route {
    match role {
        Role::Admin => Route::Admin,
        Role::Staff => Route::Staff,
        Role::Client => Route::Shop,
    }
}

/// Decides whether a requested route may render for the current session.
pub fn authorize(route: Route, session: Option<&Session>) -> RouteDecision {
    match route.access() {
        RouteAccess::Public => RouteDecision::Allow,
        access => match session {
            None => RouteDecision::RedirectToLogin,
            Some(session) if allowed(session.role, access) => RouteDecision::Allow,
            Some(session) => RouteDecision::Redirect(home_route(session.role)),
        },
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Role) -> Session {
        Session {
            role,
            email: format!("{}@maison.shop", role.as_str()),
        }
    }

    #[test]
    fn test_route_path_round_trip() {
        for route in [
            Route::Home,
            Route::About,
            Route::Collections,
            Route::Portfolio,
            Route::Services,
            Route::Contact,
            Route::Register,
            Route::Login,
            Route::Shop,
            Route::Checkout,
            Route::Profile,
            Route::Admin,
            Route::Staff,
        ] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/nowhere"), None);
    }

    #[test]
    fn test_public_routes_always_allowed() {
        assert_eq!(authorize(Route::Home, None), RouteDecision::Allow);
        assert_eq!(authorize(Route::Contact, None), RouteDecision::Allow);
        assert_eq!(
            authorize(Route::About, Some(&session(Role::Client))),
            RouteDecision::Allow
        );
    }

    #[test]
    fn test_signed_out_redirects_to_login() {
        assert_eq!(authorize(Route::Shop, None), RouteDecision::RedirectToLogin);
        assert_eq!(
            authorize(Route::Admin, None),
            RouteDecision::RedirectToLogin
        );
    }

    #[test]
    fn test_role_gating() {
        // Any account reaches the shop.
        for role in [Role::Client, Role::Staff, Role::Admin] {
            assert_eq!(
                authorize(Route::Shop, Some(&session(role))),
                RouteDecision::Allow
            );
        }

        // Only admin reaches /admin.
        assert_eq!(
            authorize(Route::Admin, Some(&session(Role::Admin))),
            RouteDecision::Allow
        );
        assert_eq!(
            authorize(Route::Admin, Some(&session(Role::Staff))),
            RouteDecision::Redirect(Route::Staff)
        );
        assert_eq!(
            authorize(Route::Admin, Some(&session(Role::Client))),
            RouteDecision::Redirect(Route::Shop)
        );

        // Staff and admin reach /staff.
        assert_eq!(
            authorize(Route::Staff, Some(&session(Role::Staff))),
            RouteDecision::Allow
        );
        assert_eq!(
            authorize(Route::Staff, Some(&session(Role::Admin))),
            RouteDecision::Allow
        );
        assert_eq!(
            authorize(Route::Staff, Some(&session(Role::Client))),
            RouteDecision::Redirect(Route::Shop)
        );
    }

    #[test]
    fn test_allowed_is_pure_membership() {
        assert!(allowed(Role::Client, RouteAccess::Public));
        assert!(allowed(Role::Admin, RouteAccess::Roles(&[Role::Admin])));
        assert!(!allowed(Role::Client, RouteAccess::Roles(&[Role::Admin])));
    }
}
