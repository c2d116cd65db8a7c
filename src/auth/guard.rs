// Route guard: one declarative policy table, consulted by one middleware

use crate::auth::token::validate_token;
use crate::core::state::AppState;
use crate::models::user::Role;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

pub const LOGIN_PATH: &str = "/login";

/// Access requirement for a path prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Any valid session; row-level scoping happens in the handler.
    Authenticated,
    /// Exactly this role.
    Role(Role),
}

pub struct PolicyRule {
    pub prefix: &'static str,
    pub access: Access,
}

/// The whole authorization policy, in one auditable place.
///
/// Prefixes match on segment boundaries, so `/client` does not capture
/// `/clients`. Unlisted paths are public; the fallback handler 404s them.
pub const POLICY: &[PolicyRule] = &[
    PolicyRule { prefix: "/login", access: Access::Public },
    PolicyRule { prefix: "/auth", access: Access::Public },
    PolicyRule { prefix: "/health", access: Access::Public },
    PolicyRule { prefix: "/services", access: Access::Public },
    PolicyRule { prefix: "/admin", access: Access::Role(Role::Admin) },
    PolicyRule { prefix: "/mechanic", access: Access::Role(Role::Mechanic) },
    PolicyRule { prefix: "/client", access: Access::Role(Role::Client) },
    PolicyRule { prefix: "/clients", access: Access::Authenticated },
    PolicyRule { prefix: "/vehicles", access: Access::Authenticated },
    PolicyRule { prefix: "/appointments", access: Access::Authenticated },
    PolicyRule { prefix: "/invoices", access: Access::Authenticated },
];

/// Identity attached to the request once the guard admits it.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: Uuid,
    pub role: Role,
    /// Linked client row for `Role::Client` accounts; scoping keys on it.
    pub client_id: Option<Uuid>,
}

/// Outcome of one navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Anonymous caller on a protected prefix.
    RedirectLogin,
    /// Authenticated but wrong role; sent to their own home, never
    /// silently allowed.
    RedirectHome(Role),
}

fn prefix_matches(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

pub fn required_access(path: &str) -> Access {
    POLICY
        .iter()
        .find(|rule| prefix_matches(path, rule.prefix))
        .map(|rule| rule.access)
        .unwrap_or(Access::Public)
}

/// Pure decision function; the middleware below only does token plumbing.
pub fn evaluate(path: &str, session: Option<Role>) -> GuardDecision {
    match required_access(path) {
        Access::Public => GuardDecision::Allow,
        Access::Authenticated => match session {
            Some(_) => GuardDecision::Allow,
            None => GuardDecision::RedirectLogin,
        },
        Access::Role(required) => match session {
            None => GuardDecision::RedirectLogin,
            Some(role) if role == required => GuardDecision::Allow,
            Some(role) => GuardDecision::RedirectHome(role),
        },
    }
}

/// Extract the bearer token from the Authorization header, if any.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Middleware enforcing the policy table on every request.
///
/// Invalid, expired or orphaned tokens (user since deleted) behave exactly
/// like no token at all.
pub async fn route_guard(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();

    let current_user = bearer_token(request.headers())
        .and_then(|token| validate_token(token, &state.jwt_secret).ok())
        .and_then(|claims| claims.user_id().ok().map(|id| (id, claims.role)))
        .and_then(|(user_id, role)| {
            let user = state.users.get_by_id(user_id)?;
            Some(CurrentUser {
                user_id,
                role,
                client_id: user.client_id,
            })
        });

    match evaluate(&path, current_user.as_ref().map(|user| user.role)) {
        GuardDecision::Allow => {
            if let Some(user) = current_user {
                request.extensions_mut().insert(user);
            }
            next.run(request).await
        }
        GuardDecision::RedirectLogin => {
            debug!(path = %path, "anonymous access to protected path");
            Redirect::to(LOGIN_PATH).into_response()
        }
        GuardDecision::RedirectHome(role) => {
            debug!(path = %path, role = %role, "wrong-role access to protected path");
            Redirect::to(role.home_path()).into_response()
        }
    }
}
