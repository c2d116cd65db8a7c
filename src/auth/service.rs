// The authenticator: credential verification and token issuance

use crate::auth::password::verify_password;
use crate::auth::token::{issue_token, Claims};
use crate::core::error::AuthError;
use crate::core::state::AppState;
use crate::models::api::LoginResponse;
use tracing::{info, warn};

/// Verify an (email, password) pair against the credential store and issue
/// a session token.
///
/// Unknown email and wrong password both return `InvalidCredentials`; the
/// caller can never tell which one happened, so the login form cannot be
/// used to enumerate accounts.
pub async fn login(state: &AppState, email: &str, password: &str) -> Result<LoginResponse, AuthError> {
    let user = match state.users.find_by_email(email) {
        Some(user) => user,
        None => {
            warn!(email = %email.to_ascii_lowercase(), "login failed: unknown email");
            return Err(AuthError::InvalidCredentials);
        }
    };

    let matches = verify_password(password, &user.password_hash).await?;
    if !matches {
        warn!(user_id = %user.id, "login failed: wrong password");
        return Err(AuthError::InvalidCredentials);
    }

    let claims = Claims::new(user.id, user.role, state.config.auth.token_ttl_secs);
    let token = issue_token(&claims, &state.jwt_secret)?;

    info!(user_id = %user.id, role = %user.role, "login succeeded");

    Ok(LoginResponse {
        token,
        role: user.role,
        user_id: user.id,
        expires_at: claims.exp,
    })
}
