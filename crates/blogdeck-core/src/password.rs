//! Password hashing with bcrypt.
//!
//! [`hash_password`] and [`verify_password`] are the blocking primitives.
//! [`PasswordHasher`] wraps them for request handlers, running each call on
//! tokio's blocking pool so a slow hash only suspends the calling task.

use std::sync::{Arc, OnceLock};

use anyhow::anyhow;
use bcrypt::{hash, verify};

use crate::errors::AppError;

/// Work factor used when none is configured.
pub const DEFAULT_COST: u32 = bcrypt::DEFAULT_COST;

/// Smallest cost bcrypt accepts. Only suitable for tests.
pub const MIN_COST: u32 = 4;

/// Password behind the fixed hash used by [`PasswordHasher::verify_dummy`].
const DUMMY_PASSWORD: &str = "blogdeck-dummy-password";

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash_password_with_cost(password, DEFAULT_COST)
}

pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, AppError> {
    hash(password, cost).map_err(|e| AppError::internal(anyhow!("Failed to hash password: {}", e)))
}

/// Returns `Ok(false)` on mismatch. Errors only when `hash` is not a bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal(anyhow!("Failed to verify password: {}", e)))
}

/// Clones share one fixed dummy hash.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
    dummy_hash: Arc<OnceLock<String>>,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self {
            cost,
            dummy_hash: Arc::new(OnceLock::new()),
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub async fn hash(&self, plaintext: &str) -> Result<String, AppError> {
        let plaintext = plaintext.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || hash_password_with_cost(&plaintext, cost))
            .await
            .map_err(AppError::internal)?
    }

    pub async fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, AppError> {
        let plaintext = plaintext.to_owned();
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || verify_password(&plaintext, &hash))
            .await
            .map_err(AppError::internal)?
    }

    /// Runs one verification at the configured cost against a fixed hash and
    /// discards the outcome, so a failed user lookup takes as long as a
    /// wrong password.
    ///
    /// The fixed hash is created on first use.
    pub async fn verify_dummy(&self, plaintext: &str) -> Result<(), AppError> {
        let plaintext = plaintext.to_owned();
        let cost = self.cost;
        let dummy_hash = Arc::clone(&self.dummy_hash);

        tokio::task::spawn_blocking(move || {
            let hash = match dummy_hash.get() {
                Some(hash) => hash,
                None => {
                    let hash = hash_password_with_cost(DUMMY_PASSWORD, cost)?;
                    dummy_hash.get_or_init(|| hash)
                }
            };
            verify_password(&plaintext, hash).map(|_| ())
        })
        .await
        .map_err(AppError::internal)?
    }

    /// The fixed hash behind [`Self::verify_dummy`], once created.
    pub fn dummy_hash(&self) -> Option<&str> {
        self.dummy_hash.get().map(String::as_str)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cost_is_twelve() {
        assert_eq!(PasswordHasher::default().cost(), 12);
    }

    #[tokio::test]
    async fn test_hasher_round_trip() {
        let hasher = PasswordHasher::new(MIN_COST);
        let hashed = hasher.hash("pw1").await.unwrap();

        assert_ne!(hashed, "pw1");
        assert!(hasher.verify("pw1", &hashed).await.unwrap());
        assert!(!hasher.verify("pw2", &hashed).await.unwrap());
    }

    #[tokio::test]
    async fn test_hasher_uses_configured_cost() {
        let hasher = PasswordHasher::new(5);
        let hashed = hasher.hash("secret").await.unwrap();

        assert!(hashed.starts_with("$2b$05$"));
    }

    #[tokio::test]
    async fn test_hasher_invalid_cost_is_internal_error() {
        let hasher = PasswordHasher::new(99);
        let err = hasher.hash("secret").await.unwrap_err();

        assert_eq!(err.kind, crate::errors::ErrorKind::Internal);
    }

    #[tokio::test]
    async fn test_verify_dummy_creates_hash_at_configured_cost() {
        let hasher = PasswordHasher::new(5);
        assert!(hasher.dummy_hash().is_none());

        hasher.verify_dummy("anything").await.unwrap();

        let dummy = hasher.dummy_hash().unwrap().to_string();
        assert!(dummy.starts_with("$2b$05$"));
        assert!(!hasher.verify("anything", &dummy).await.unwrap());
    }

    #[tokio::test]
    async fn test_clones_share_dummy_hash() {
        let hasher = PasswordHasher::new(MIN_COST);
        let clone = hasher.clone();

        clone.verify_dummy("pw").await.unwrap();
        hasher.verify_dummy("pw").await.unwrap();

        assert_eq!(hasher.dummy_hash(), clone.dummy_hash());
    }
}
