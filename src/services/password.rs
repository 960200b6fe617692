//! bcrypt hashing on the blocking pool.

use crate::error::ApiError;

pub async fn hash_password(password: String, cost: u32) -> Result<String, ApiError> {
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hashed)
}

/// `Ok(false)` on mismatch; a stored hash bcrypt cannot parse is an internal error.
pub async fn verify_password(password: String, hash: String) -> Result<bool, ApiError> {
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_then_verify() {
        let hash = hash_password("secret123".to_string(), 4)
            .await
            .unwrap();

        assert_ne!(hash, "secret123");
        assert!(verify_password("secret123".to_string(), hash.clone()).await.unwrap());
        assert!(!verify_password("secret124".to_string(), hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_verify_rejects_garbage_hash() {
        let result = verify_password("secret123".to_string(), "not-a-hash".to_string()).await;
        assert!(matches!(result, Err(ApiError::Internal(_))));
    }
}
