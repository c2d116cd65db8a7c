// Password hashing and verification

use crate::core::error::AuthError;
use bcrypt::{hash, verify};

/// Hash a password with bcrypt.
///
/// Runs on the blocking thread pool; bcrypt at production cost is far too
/// slow for an async worker thread.
pub async fn hash_password(password: &str, cost: u32) -> Result<String, AuthError> {
    let password = password.to_string();

    tokio::task::spawn_blocking(move || {
        hash(password, cost).map_err(|e| AuthError::Internal(format!("bcrypt hash: {}", e)))
    })
    .await
    .map_err(|e| AuthError::Internal(format!("join error: {}", e)))?
}

/// Verify a password against a stored bcrypt hash.
///
/// `Ok(false)` is a mismatch; `Err` means the hash itself is unusable.
pub async fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AuthError> {
    let password = password.to_string();
    let stored_hash = stored_hash.to_string();

    tokio::task::spawn_blocking(move || {
        verify(password, &stored_hash)
            .map_err(|e| AuthError::Internal(format!("bcrypt verify: {}", e)))
    })
    .await
    .map_err(|e| AuthError::Internal(format!("join error: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;

    // Cost 4 is the bcrypt minimum; production cost is enforced at
    // config validation, not here.
    const TEST_COST: u32 = 4;

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hash = hash_password("s3cret-pw", TEST_COST).await.unwrap();
        assert!(hash.starts_with("$2"));

        assert!(verify_password("s3cret-pw", &hash).await.unwrap());
        assert!(!verify_password("wrong-pw", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_hashes_are_salted() {
        let first = hash_password("same-password", TEST_COST).await.unwrap();
        let second = hash_password("same-password", TEST_COST).await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_garbage_hash_is_internal_error() {
        let result = verify_password("anything", "not-a-bcrypt-hash").await;
        assert!(matches!(result, Err(AuthError::Internal(_))));
    }
}
