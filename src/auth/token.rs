// Session token issuance and validation (stateless JWT)

use crate::core::error::AuthError;
use crate::models::user::Role;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const TOKEN_ISSUER: &str = "taller";

/// Claims embedded in every session token.
///
/// HS256-signed; the client holds the token but cannot alter the role
/// without invalidating the signature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    /// Issuer
    pub iss: String,
    /// Role at issuance
    pub role: Role,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiry (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    pub fn new(user_id: Uuid, role: Role, ttl_secs: i64) -> Self {
        let now = chrono::Utc::now().timestamp();

        Self {
            sub: user_id.to_string(),
            iss: TOKEN_ISSUER.to_string(),
            role,
            iat: now,
            exp: now + ttl_secs,
        }
    }

    pub fn user_id(&self) -> Result<Uuid, AuthError> {
        Uuid::parse_str(&self.sub).map_err(|_| AuthError::Unauthenticated)
    }
}

/// Sign claims into a bearer token.
pub fn issue_token(claims: &Claims, secret: &str) -> Result<String, AuthError> {
    let header = Header::new(Algorithm::HS256);
    let encoding_key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, claims, &encoding_key)
        .map_err(|e| AuthError::Internal(format!("JWT encoding: {}", e)))
}

/// Validate a bearer token and return its claims.
///
/// Expired, forged and malformed tokens all collapse to
/// `AuthError::Unauthenticated`; the guard treats them as anonymous.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[TOKEN_ISSUER]);

    decode::<Claims>(token, &decoding_key, &validation)
        .map(|data| data.claims)
        .map_err(|_| AuthError::Unauthenticated)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-signing-secret";

    #[test]
    fn test_issue_and_validate_round_trip() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, Role::Mechanic, 3600);
        let token = issue_token(&claims, SECRET).unwrap();

        let validated = validate_token(&token, SECRET).unwrap();
        assert_eq!(validated.user_id().unwrap(), user_id);
        assert_eq!(validated.role, Role::Mechanic);
        assert_eq!(validated.exp, validated.iat + 3600);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let claims = Claims::new(Uuid::new_v4(), Role::Admin, 3600);
        let token = issue_token(&claims, SECRET).unwrap();

        let result = validate_token(&token, "a-different-secret");
        assert!(matches!(result, Err(AuthError::Unauthenticated)));
    }

    #[test]
    fn test_expired_token_rejected() {
        // Issued an hour ago with a TTL that has already elapsed.
        let mut claims = Claims::new(Uuid::new_v4(), Role::Client, 60);
        claims.iat -= 3600;
        claims.exp -= 3600;
        let token = issue_token(&claims, SECRET).unwrap();

        let result = validate_token(&token, SECRET);
        assert!(matches!(result, Err(AuthError::Unauthenticated)));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let claims = Claims::new(Uuid::new_v4(), Role::Client, 3600);
        let token = issue_token(&claims, SECRET).unwrap();

        // Flip a character in the payload segment.
        let mut chars: Vec<char> = token.chars().collect();
        let mid = token.len() / 2;
        chars[mid] = if chars[mid] == 'a' { 'b' } else { 'a' };
        let tampered: String = chars.into_iter().collect();

        assert!(validate_token(&tampered, SECRET).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(matches!(
            validate_token("not-a-jwt", SECRET),
            Err(AuthError::Unauthenticated)
        ));
    }
}
